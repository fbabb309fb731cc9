use crate::server::error::request::RequestError;

pub const CUSTOMER_GID_PREFIX: &str = "gid://shopify/Customer/";

/// Normalizes a customer ID into the store's global ID form.
///
/// Accepts either the bare numeric ID (`"123"`) or the full global ID
/// (`"gid://shopify/Customer/123"`); surrounding whitespace is ignored.
///
/// # Returns
/// - `Ok(String)` - Global customer ID
/// - `Err(RequestError::MissingCustomerId)` - ID is empty
/// - `Err(RequestError::InvalidCustomerId)` - ID is neither form
pub fn customer_gid(id: &str) -> Result<String, RequestError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(RequestError::MissingCustomerId);
    }

    let numeric = id.strip_prefix(CUSTOMER_GID_PREFIX).unwrap_or(id);
    if numeric.is_empty() || !numeric.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RequestError::InvalidCustomerId(id.to_string()));
    }

    Ok(format!("{}{}", CUSTOMER_GID_PREFIX, numeric))
}
