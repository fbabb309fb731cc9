use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Achievements metafield for customer {customer_id} is not a JSON array: {source}")]
    MalformedAchievements {
        customer_id: String,
        source: serde_json::Error,
    },
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
