use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::request::RequestError;

/// A JSON request body whose extraction failure is left for the handler to report.
///
/// Handlers behind the shared secret take this instead of `Json<T>` and check the secret
/// before parsing the body.
pub type JsonBody = Result<Json<Value>, JsonRejection>;

/// Reads the `secret` field of a body, if the body is a JSON object with a string secret.
pub fn body_secret(body: &JsonBody) -> Option<&str> {
    body.as_ref().ok()?.get("secret")?.as_str()
}

/// Deserializes an extracted body into a request DTO.
///
/// # Returns
/// - `Ok(T)` - Body parsed
/// - `Err(RequestError::InvalidBody)` - Body missing, not JSON, or not shaped like `T`
pub fn parse_body<T: DeserializeOwned>(body: JsonBody) -> Result<T, RequestError> {
    let Json(value) = body?;

    serde_json::from_value(value).map_err(|err| RequestError::InvalidBody(err.to_string()))
}
