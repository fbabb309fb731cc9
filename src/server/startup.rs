use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::server::{config::Config, data::store::client::StoreClient, error::Error};

/// Build the store client from the configured store URL, token and API version
pub fn build_store_client(config: &Config) -> Result<StoreClient, Error> {
    let store_client = StoreClient::builder().config(config).build()?;

    Ok(store_client)
}

/// CORS layer allowing the configured origins, or any origin when none are configured
pub fn build_cors(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
