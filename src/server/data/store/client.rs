use serde::{de::DeserializeOwned, Serialize};

use crate::server::{
    config::{Config, MAX_BATCH_SIZE},
    data::store::{
        query::{
            CustomerData, CustomerVariables, CustomersData, CustomersVariables, GraphQlRequest,
            GraphQlResponse, MetafieldsSetData, MetafieldsSetInput, MetafieldsSetVariables,
            CUSTOMERS_QUERY, CUSTOMER_QUERY, METAFIELDS_SET_MUTATION,
        },
        RemoteStore,
    },
    error::store::StoreError,
    model::store::{FieldError, MetafieldEntry, RawRecord, WriteOutcome},
};

pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// GraphQL client for the customer store's Admin API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StoreClient {
    pub fn builder() -> StoreClientBuilder {
        StoreClientBuilder::default()
    }

    /// URL every GraphQL request is posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts a GraphQL document and unwraps the `data` payload.
    ///
    /// # Returns
    /// - `Ok(T)` - Response carried `data` and no top-level errors
    /// - `Err(StoreError::RequestFailed)` - Transport failure or undecodable body
    /// - `Err(StoreError::UnexpectedStatus)` - Non-2xx HTTP status
    /// - `Err(StoreError::GraphQl)` - Response carried top-level `errors`
    /// - `Err(StoreError::MalformedResponse)` - Response carried neither `data` nor `errors`
    async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T, StoreError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GraphQlResponse<T> = response.json().await?;

        if !payload.errors.is_empty() {
            return Err(StoreError::GraphQl(
                payload.errors.into_iter().map(|e| e.message).collect(),
            ));
        }

        payload
            .data
            .ok_or_else(|| StoreError::MalformedResponse("data".to_string()))
    }
}

impl RemoteStore for StoreClient {
    async fn fetch_batch(&self, count: u32, namespace: &str) -> Result<Vec<RawRecord>, StoreError> {
        let variables = CustomersVariables {
            first: count.clamp(1, MAX_BATCH_SIZE),
            namespace,
        };

        let data: CustomersData = self.execute(CUSTOMERS_QUERY, variables).await?;

        Ok(data
            .customers
            .edges
            .into_iter()
            .map(|edge| RawRecord::from(edge.node))
            .collect())
    }

    async fn fetch_one(&self, id: &str, namespace: &str) -> Result<RawRecord, StoreError> {
        let data: CustomerData = self
            .execute(CUSTOMER_QUERY, CustomerVariables { id, namespace })
            .await?;

        data.customer
            .map(RawRecord::from)
            .ok_or_else(|| StoreError::CustomerNotFound(id.to_string()))
    }

    async fn write_attributes(
        &self,
        record_id: &str,
        namespace: &str,
        entries: &[MetafieldEntry],
    ) -> Result<WriteOutcome, StoreError> {
        let variables = MetafieldsSetVariables {
            metafields: entries
                .iter()
                .map(|entry| MetafieldsSetInput::new(record_id, namespace, entry))
                .collect(),
        };

        let data: MetafieldsSetData = self.execute(METAFIELDS_SET_MUTATION, variables).await?;

        let payload = data
            .metafields_set
            .ok_or_else(|| StoreError::MalformedResponse("metafieldsSet".to_string()))?;

        Ok(WriteOutcome {
            field_errors: payload
                .user_errors
                .into_iter()
                .map(FieldError::from)
                .collect(),
        })
    }
}

/// Builder for [`StoreClient`].
#[derive(Default)]
pub struct StoreClientBuilder {
    store_url: Option<String>,
    access_token: Option<String>,
    api_version: Option<String>,
    user_agent: Option<String>,
}

impl StoreClientBuilder {
    /// Base URL of the store, e.g. `https://shop.myshopify.com`.
    pub fn store_url(mut self, store_url: &str) -> Self {
        self.store_url = Some(store_url.trim_end_matches('/').to_string());
        self
    }

    pub fn access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    pub fn api_version(mut self, api_version: &str) -> Self {
        self.api_version = Some(api_version.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Fills every setting from the application configuration.
    pub fn config(self, config: &Config) -> Self {
        self.store_url(&config.store_url)
            .access_token(&config.store_access_token)
            .api_version(&config.store_api_version)
            .user_agent(&config.user_agent())
    }

    /// Builds the client.
    ///
    /// # Returns
    /// - `Ok(StoreClient)` - Client ready to send requests
    /// - `Err(StoreError::InvalidClientConfig)` - Store URL, access token or API version not set
    /// - `Err(StoreError::RequestFailed)` - The HTTP client could not be initialized
    pub fn build(self) -> Result<StoreClient, StoreError> {
        let missing = |setting: &str| StoreError::InvalidClientConfig(format!("{} not set", setting));

        let store_url = self.store_url.ok_or_else(|| missing("store URL"))?;
        let access_token = self.access_token.ok_or_else(|| missing("access token"))?;
        let api_version = self.api_version.ok_or_else(|| missing("API version"))?;

        let mut http = reqwest::Client::builder();
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(StoreClient {
            http: http.build()?,
            endpoint: format!("{}/admin/api/{}/graphql.json", store_url, api_version),
            access_token,
        })
    }
}
