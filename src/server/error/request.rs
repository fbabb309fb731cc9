use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Customer ID is required")]
    MissingCustomerId,
    #[error("At least one metafield update is required")]
    MissingUpdates,
    #[error("Invalid customer ID {0:?}, expected a numeric ID or a gid://shopify/Customer/ ID")]
    InvalidCustomerId(String),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for RequestError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
