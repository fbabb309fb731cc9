use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when the customer store could not be reached or rejected the request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpstreamErrorDto {
    /// The error message
    pub error: String,
    /// The message reported by the customer store
    pub details: String,
}

/// A single metafield rejected by the customer store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    /// Path of the rejected field as reported by the store
    pub field: String,
    /// Why the store rejected the field
    pub message: String,
}

/// The response when one or more metafield writes were rejected
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FieldErrorsDto {
    /// The error message
    pub error: String,
    /// Every rejected field, in the order the store reported them
    pub errors: Vec<FieldErrorDto>,
}

/// Service health
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
    pub version: String,
}
