//! GraphQL endpoint mocks.
//!
//! Every store operation is a `POST` to the same GraphQL path, so mocks are told apart by
//! matching the request body: the operation name in the query document and, where
//! relevant, the customer ID in the variables.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::{
    constant::{graphql_path, TEST_ACCESS_TOKEN},
    fixtures::factory::customer_gid,
};

pub const CUSTOMERS_OPERATION: &str = r"customers\(first";
pub const CUSTOMER_OPERATION: &str = r"customer\(id";
pub const METAFIELDS_SET_OPERATION: &str = r"metafieldsSet\(";

/// Creates a mock for GraphQL requests whose body matches every pattern.
///
/// # Arguments
/// - `server` - Mock server to register the endpoint on
/// - `patterns` - Regular expressions the raw request body must match
/// - `status` - HTTP status to respond with
/// - `body` - Response body
/// - `expected_requests` - Number of times this endpoint should be called
pub fn create_graphql_endpoint(
    server: &mut ServerGuard,
    patterns: &[String],
    status: usize,
    body: &Value,
    expected_requests: usize,
) -> Result<Mock, serde_json::Error> {
    let body_matcher = Matcher::AllOf(
        patterns
            .iter()
            .map(|pattern| Matcher::Regex(pattern.clone()))
            .collect(),
    );

    Ok(server
        .mock("POST", graphql_path().as_str())
        .match_header("x-shopify-access-token", TEST_ACCESS_TOKEN)
        .match_body(body_matcher)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(body)?)
        .expect(expected_requests)
        .create())
}

/// Body pattern matching the variables of a request about one customer.
pub(crate) fn customer_id_pattern(key: &str, customer_id: u64) -> String {
    format!(r#""{}":"{}""#, key, customer_gid(customer_id))
}
