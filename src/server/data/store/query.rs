//! GraphQL documents and payload shapes for the store's Admin API.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::server::model::store::{FieldError, MetafieldEntry, MetafieldType, RawRecord};

pub const CUSTOMERS_QUERY: &str = r#"query Customers($first: Int!, $namespace: String!) {
  customers(first: $first) {
    edges {
      node {
        id
        displayName
        createdAt
        metafields(first: 50, namespace: $namespace) {
          edges { node { key value } }
        }
      }
    }
  }
}"#;

pub const CUSTOMER_QUERY: &str = r#"query Customer($id: ID!, $namespace: String!) {
  customer(id: $id) {
    id
    displayName
    createdAt
    metafields(first: 50, namespace: $namespace) {
      edges { node { key value } }
    }
  }
}"#;

pub const METAFIELDS_SET_MUTATION: &str = r#"mutation MetafieldsSet($metafields: [MetafieldsSetInput!]!) {
  metafieldsSet(metafields: $metafields) {
    metafields { key }
    userErrors { field message }
  }
}"#;

#[derive(Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Serialize)]
pub struct CustomersVariables<'a> {
    pub first: u32,
    pub namespace: &'a str,
}

#[derive(Serialize)]
pub struct CustomerVariables<'a> {
    pub id: &'a str,
    pub namespace: &'a str,
}

#[derive(Serialize)]
pub struct MetafieldsSetVariables<'a> {
    pub metafields: Vec<MetafieldsSetInput<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldsSetInput<'a> {
    pub owner_id: &'a str,
    pub namespace: &'a str,
    pub key: &'a str,
    pub value: &'a str,
    #[serde(rename = "type")]
    pub value_type: MetafieldType,
}

impl<'a> MetafieldsSetInput<'a> {
    pub fn new(owner_id: &'a str, namespace: &'a str, entry: &'a MetafieldEntry) -> Self {
        Self {
            owner_id,
            namespace,
            key: &entry.key,
            value: &entry.value,
            value_type: entry.value_type,
        }
    }
}

#[derive(Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Deserialize)]
pub struct CustomersData {
    pub customers: Connection<CustomerNode>,
}

#[derive(Deserialize)]
pub struct CustomerData {
    pub customer: Option<CustomerNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerNode {
    pub id: String,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub metafields: Connection<MetafieldNode>,
}

#[derive(Deserialize)]
pub struct MetafieldNode {
    pub key: String,
    pub value: String,
}

impl From<CustomerNode> for RawRecord {
    fn from(node: CustomerNode) -> Self {
        let attributes: HashMap<String, String> = node
            .metafields
            .edges
            .into_iter()
            .map(|edge| (edge.node.key, edge.node.value))
            .collect();

        RawRecord {
            id: node.id,
            display_name: node.display_name,
            created_at: node.created_at,
            attributes,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldsSetData {
    pub metafields_set: Option<MetafieldsSetPayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldsSetPayload {
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Deserialize)]
pub struct UserError {
    pub field: Option<Vec<String>>,
    pub message: String,
}

impl From<UserError> for FieldError {
    fn from(err: UserError) -> Self {
        FieldError {
            field: err.field.map(|path| path.join(".")).unwrap_or_default(),
            message: err.message,
        }
    }
}
