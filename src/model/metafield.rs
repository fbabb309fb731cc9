use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::model::store::MetafieldValue;

/// Request to set one or more metafields on a customer
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetafieldsDto {
    pub secret: Option<String>,
    pub customer_id: Option<String>,
    /// Metafield key to new value; numbers are written as numeric metafields, strings as text
    #[schema(value_type = Option<Object>)]
    pub updates: Option<BTreeMap<String, MetafieldValue>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMetafieldsResultDto {
    pub success: bool,
    pub customer_id: String,
    #[schema(value_type = Object)]
    pub updates: BTreeMap<String, MetafieldValue>,
}

/// Request to initialize progression metafields across a batch of customers
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BulkInitializeRequestDto {
    pub secret: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResultDto {
    pub id: String,
    pub name: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkInitializeDto {
    /// Customers fetched from the store
    pub processed: usize,
    /// Customers skipped because they already had a level
    pub skipped: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// One entry per initialized customer, in fetch order
    pub results: Vec<BulkUpdateResultDto>,
}
