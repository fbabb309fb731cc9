//! Declarative mock store setup.
//!
//! The `TestBuilder` queues GraphQL endpoint mocks and registers them all on a fresh mock
//! server during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{
    error::TestError,
    fixtures::{
        factory,
        mockito::{
            create_graphql_endpoint, customer_id_pattern, CUSTOMERS_OPERATION,
            CUSTOMER_OPERATION, METAFIELDS_SET_OPERATION,
        },
    },
    TestContext,
};

/// A queued GraphQL endpoint: body patterns, status, response body and expected calls.
struct GraphQlEndpoint {
    patterns: Vec<String>,
    status: usize,
    body: Value,
    expected_requests: usize,
}

/// Builder for a mock store.
///
/// Provides shortcuts for the three store operations plus upstream failures. Methods can be
/// chained together and finalized with `build()`.
pub struct TestBuilder {
    // Mock endpoints with full control, created first
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    endpoints: Vec<GraphQlEndpoint>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    /// Add a mock `customers` batch query endpoint.
    ///
    /// # Arguments
    /// - `customers` - Customer nodes to return, see [`factory::customer`]
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_customers_endpoint(mut self, customers: Vec<Value>, expected_requests: usize) -> Self {
        self.endpoints.push(GraphQlEndpoint {
            patterns: vec![CUSTOMERS_OPERATION.to_string()],
            status: 200,
            body: factory::customers_response(customers),
            expected_requests,
        });
        self
    }

    /// Add a mock single `customer` query endpoint.
    ///
    /// Only matches requests for `customer_id`.
    ///
    /// # Arguments
    /// - `customer_id` - Numeric ID of the requested customer
    /// - `customer` - Customer node to return, `None` for a customer that does not exist
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_customer_endpoint(
        mut self,
        customer_id: u64,
        customer: Option<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(GraphQlEndpoint {
            patterns: vec![
                CUSTOMER_OPERATION.to_string(),
                customer_id_pattern("id", customer_id),
            ],
            status: 200,
            body: factory::customer_response(customer),
            expected_requests,
        });
        self
    }

    /// Add a mock `metafieldsSet` mutation endpoint for one customer.
    ///
    /// # Arguments
    /// - `customer_id` - Numeric ID of the customer owning the metafields
    /// - `user_errors` - Field errors to report, see [`factory::user_error`]
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_metafields_set_endpoint(
        mut self,
        customer_id: u64,
        user_errors: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(GraphQlEndpoint {
            patterns: vec![
                METAFIELDS_SET_OPERATION.to_string(),
                customer_id_pattern("ownerId", customer_id),
            ],
            status: 200,
            body: factory::metafields_set_response(user_errors),
            expected_requests,
        });
        self
    }

    /// Add an endpoint answering every request matching `operation` with top-level
    /// GraphQL errors.
    ///
    /// # Arguments
    /// - `operation` - Regular expression matched against the request body
    /// - `messages` - Error messages to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_graphql_error_endpoint(
        mut self,
        operation: &str,
        messages: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(GraphQlEndpoint {
            patterns: vec![operation.to_string()],
            status: 200,
            body: factory::graphql_error_response(messages),
            expected_requests,
        });
        self
    }

    /// Add an endpoint answering every request matching `operation` with a non-2xx status.
    ///
    /// # Arguments
    /// - `operation` - Regular expression matched against the request body
    /// - `status` - HTTP status to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_status_error_endpoint(
        mut self,
        operation: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(GraphQlEndpoint {
            patterns: vec![operation.to_string()],
            status,
            body: serde_json::json!({ "errors": "Service unavailable" }),
            expected_requests,
        });
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register every queued endpoint.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running mock store
    /// - `Err(TestError::Json)` - A response body could not be serialized
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await;

        // Custom endpoints are created first so tests can queue several mocks for the same
        // operation and have them matched in order
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for endpoint in self.endpoints {
            mocks.push(create_graphql_endpoint(
                &mut setup.server,
                &endpoint.patterns,
                endpoint.status,
                &endpoint.body,
                endpoint.expected_requests,
            )?);
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Body patterns for the store operations, for use with the error endpoint shortcuts.
pub mod operation {
    pub use crate::fixtures::mockito::{
        CUSTOMERS_OPERATION as CUSTOMERS, CUSTOMER_OPERATION as CUSTOMER,
        METAFIELDS_SET_OPERATION as METAFIELDS_SET,
    };
}
