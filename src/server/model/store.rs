use std::{collections::HashMap, fmt};

use chrono::{DateTime, Utc};
use serde::{
    de::{self, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// A customer record as returned by the store, with its namespaced metafields flattened
/// into a key to value map.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub id: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub attributes: HashMap<String, String>,
}

impl RawRecord {
    /// Display name, or `None` when the store returned nothing or an empty string.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Typed metafield kinds understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetafieldType {
    NumberInteger,
    NumberDecimal,
    SingleLineTextField,
    Json,
}

/// A caller-supplied update value. Its kind decides the metafield type it is written as.
///
/// JSON integers must fit in an `i64`; larger integers are rejected rather than written as
/// lossy decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetafieldValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for MetafieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MetafieldValueVisitor)
    }
}

struct MetafieldValueVisitor;

impl<'de> Visitor<'de> for MetafieldValueVisitor {
    type Value = MetafieldValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(MetafieldValue::Integer(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        i64::try_from(value).map(MetafieldValue::Integer).map_err(|_| {
            E::invalid_value(Unexpected::Unsigned(value), &"an integer no larger than i64::MAX")
        })
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(MetafieldValue::Decimal(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(MetafieldValue::Text(value.to_string()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(MetafieldValue::Text(value))
    }
}

impl MetafieldValue {
    pub fn value_type(&self) -> MetafieldType {
        match self {
            Self::Integer(_) => MetafieldType::NumberInteger,
            Self::Decimal(_) => MetafieldType::NumberDecimal,
            Self::Text(_) => MetafieldType::SingleLineTextField,
        }
    }

    /// The value as the store expects it; every metafield value travels as a string.
    pub fn to_store_string(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Decimal(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

/// One metafield write within a batched write call.
#[derive(Debug, Clone, PartialEq)]
pub struct MetafieldEntry {
    pub key: String,
    pub value: String,
    pub value_type: MetafieldType,
}

impl MetafieldEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, value_type: MetafieldType) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            value_type,
        }
    }

    pub fn integer(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, value.to_string(), MetafieldType::NumberInteger)
    }

    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, value, MetafieldType::SingleLineTextField)
    }

    pub fn from_value(key: impl Into<String>, value: &MetafieldValue) -> Self {
        Self::new(key, value.to_store_string(), value.value_type())
    }
}

/// A write rejected by the store for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Result of a batched write that reached the store.
///
/// Field errors are scoped to individual entries; other entries of the same call may
/// have been written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    pub field_errors: Vec<FieldError>,
}

impl WriteOutcome {
    pub fn is_clean(&self) -> bool {
        self.field_errors.is_empty()
    }
}
