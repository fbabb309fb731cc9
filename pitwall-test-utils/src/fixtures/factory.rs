use serde_json::{json, Value};

/// Global ID of the customer with the given numeric ID.
pub fn customer_gid(id: u64) -> String {
    format!("gid://shopify/Customer/{}", id)
}

/// A customer node as returned by the `customers` and `customer` queries.
///
/// # Arguments
/// - `id` - Numeric customer ID
/// - `display_name` - Display name, `None` to return `null`
/// - `metafields` - Metafield key/value pairs in the test namespace
pub fn customer(id: u64, display_name: Option<&str>, metafields: &[(&str, &str)]) -> Value {
    let edges: Vec<Value> = metafields
        .iter()
        .map(|(key, value)| json!({ "node": { "key": key, "value": value } }))
        .collect();

    json!({
        "id": customer_gid(id),
        "displayName": display_name,
        "createdAt": "2024-06-01T12:00:00Z",
        "metafields": { "edges": edges }
    })
}

pub fn customers_response(customers: Vec<Value>) -> Value {
    let edges: Vec<Value> = customers
        .into_iter()
        .map(|node| json!({ "node": node }))
        .collect();

    json!({ "data": { "customers": { "edges": edges } } })
}

/// Response to the `customer` query; `None` means the customer does not exist.
pub fn customer_response(customer: Option<Value>) -> Value {
    json!({ "data": { "customer": customer } })
}

/// A `userErrors` entry of the `metafieldsSet` mutation.
pub fn user_error(field: &[&str], message: &str) -> Value {
    json!({ "field": field, "message": message })
}

pub fn metafields_set_response(user_errors: Vec<Value>) -> Value {
    json!({
        "data": {
            "metafieldsSet": {
                "metafields": [],
                "userErrors": user_errors
            }
        }
    })
}

/// Response carrying top-level GraphQL errors and no data.
pub fn graphql_error_response(messages: &[&str]) -> Value {
    let errors: Vec<Value> = messages
        .iter()
        .map(|message| json!({ "message": message }))
        .collect();

    json!({ "errors": errors })
}
