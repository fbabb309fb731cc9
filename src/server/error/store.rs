use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, UpstreamErrorDto};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Customer {0} not found in store")]
    CustomerNotFound(String),
    #[error(transparent)]
    RequestFailed(#[from] reqwest::Error),
    #[error("Store responded with HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("Store returned errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("Store response is missing {0}")]
    MalformedResponse(String),
    #[error("Failed to build store client: {0}")]
    InvalidClientConfig(String),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            Self::CustomerNotFound(ref customer_id) => {
                tracing::debug!(customer_id = %customer_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Customer not found".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                tracing::error!("Customer store error: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(UpstreamErrorDto {
                        error: "Customer store request failed".to_string(),
                        details: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
