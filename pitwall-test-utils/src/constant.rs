//! Placeholder store settings shared by every test.
//!
//! None of these are real credentials.

/// Access token the mock store expects in the `X-Shopify-Access-Token` header.
pub static TEST_ACCESS_TOKEN: &str = "shpat_test_token";

/// Admin API version used in the mock GraphQL path.
pub static TEST_API_VERSION: &str = "2024-10";

/// Shared secret accepted by the write endpoints in tests.
pub static TEST_SECRET: &str = "test_secret";

/// Metafield namespace used in tests.
pub static TEST_NAMESPACE: &str = "pitwall";

/// Path of the GraphQL endpoint served by the mock store.
pub fn graphql_path() -> String {
    format!("/admin/api/{}/graphql.json", TEST_API_VERSION)
}
