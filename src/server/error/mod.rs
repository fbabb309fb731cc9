//! Error types for the Pitwall server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, authorization, request validation, the customer store, metafield
//! writes, profile decoding). All errors implement `IntoResponse` for Axum HTTP responses
//! and use `thiserror` for their `Display` and `Error` implementations.

pub mod auth;
pub mod config;
pub mod metafield;
pub mod profile;
pub mod request;
pub mod store;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, metafield::MetafieldError, profile::ProfileError,
        request::RequestError, store::StoreError,
    },
};

/// Main error type for the Pitwall server application.
///
/// Aggregates all domain-specific error types into a single error type so handlers and
/// services can use the `?` operator throughout. The `IntoResponse` implementation
/// delegates to each domain error's own response mapping.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authorization errors (shared secret mismatch)
/// - Request errors (missing or malformed required input)
/// - Store errors (transport failures, upstream error payloads, missing customers)
/// - Metafield errors (field-level write rejections)
/// - Profile errors (stored data that cannot be decoded)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authorization error (shared secret mismatch).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Required request input missing or malformed.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Customer store error (request failure, error payload, customer not found).
    #[error(transparent)]
    StoreError(#[from] StoreError),
    /// One or more metafield writes rejected by the store.
    #[error(transparent)]
    MetafieldError(#[from] MetafieldError),
    /// Stored profile data that cannot be given a safe default.
    #[error(transparent)]
    ProfileError(#[from] ProfileError),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Missing input or rejected metafield writes
/// - 401 Unauthorized - Shared secret mismatch
/// - 404 Not Found - Customer does not exist in the store
/// - 502 Bad Gateway - The customer store failed or returned an error payload
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::RequestError(err) => err.into_response(),
            Self::StoreError(err) => err.into_response(),
            Self::MetafieldError(err) => err.into_response(),
            Self::ProfileError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
