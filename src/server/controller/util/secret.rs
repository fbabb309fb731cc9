use crate::server::{config::Config, error::auth::AuthError};

/// Checks a request's shared secret against the configured API secret.
///
/// A missing secret is treated the same as a wrong one.
///
/// # Returns
/// - `Ok(())` - Secret matches
/// - `Err(AuthError::InvalidSecret)` - Secret missing or different
pub fn verify_secret(config: &Config, secret: Option<&str>) -> Result<(), AuthError> {
    match secret {
        Some(secret) if secret == config.api_secret => Ok(()),
        _ => Err(AuthError::InvalidSecret),
    }
}
