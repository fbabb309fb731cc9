use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{FieldErrorDto, FieldErrorsDto},
    server::model::store::FieldError,
};

#[derive(Error, Debug)]
pub enum MetafieldError {
    /// The store rejected some fields of a batched write. Fields not listed may still
    /// have been written.
    #[error("Store rejected {} metafield(s) for customer {customer_id}", .errors.len())]
    FieldWrite {
        customer_id: String,
        errors: Vec<FieldError>,
    },
}

impl IntoResponse for MetafieldError {
    fn into_response(self) -> Response {
        match self {
            Self::FieldWrite {
                ref customer_id,
                ref errors,
            } => {
                tracing::debug!(customer_id = %customer_id, "{}", self);

                let errors = errors
                    .iter()
                    .map(|e| FieldErrorDto {
                        field: e.field.clone(),
                        message: e.message.clone(),
                    })
                    .collect();

                (
                    StatusCode::BAD_REQUEST,
                    Json(FieldErrorsDto {
                        error: "Failed to update metafields".to_string(),
                        errors,
                    }),
                )
                    .into_response()
            }
        }
    }
}
