//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};

/// Running mock store plus the endpoints registered on it.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_customers_endpoint(vec![factory::customer(1, Some("Ace"), &[("xp", "1200")])], 1)
///     .build()
///     .await?;
///
/// // Point the store client at the mock server
/// let store_url = test.url();
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the store's Admin API
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        TestContext {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock store, usable as the `STORE_URL` setting.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
