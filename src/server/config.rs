use crate::server::error::config::ConfigError;

pub const DEFAULT_API_VERSION: &str = "2024-10";
pub const DEFAULT_NAMESPACE: &str = "pitwall";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Largest page the store returns for a single customer query.
pub const MAX_BATCH_SIZE: u32 = 250;

#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: String,
    pub store_access_token: String,
    pub store_api_version: String,
    pub api_secret: String,
    pub metafield_namespace: String,
    pub batch_size: u32,
    pub bind_address: String,
    pub cors_allowed_origins: Vec<String>,
    pub contact_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let required =
            |var: &str| optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let store_url = required("STORE_URL")?.trim_end_matches('/').to_string();
        if !store_url.starts_with("http://") && !store_url.starts_with("https://") {
            return Err(ConfigError::InvalidEnvValue {
                var: "STORE_URL".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        let batch_size = match optional("BATCH_SIZE") {
            Some(value) => parse_batch_size(&value)?,
            None => MAX_BATCH_SIZE,
        };

        let cors_allowed_origins = optional("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            store_url,
            store_access_token: required("STORE_ACCESS_TOKEN")?,
            store_api_version: optional("STORE_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            api_secret: required("API_SECRET")?,
            metafield_namespace: optional("METAFIELD_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            batch_size,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            cors_allowed_origins,
            contact_email: optional("CONTACT_EMAIL"),
        })
    }

    /// User agent sent with every store request.
    pub fn user_agent(&self) -> String {
        match &self.contact_email {
            Some(email) => format!(
                "{}/{} ({})",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                email
            ),
            None => format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

fn parse_batch_size(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: "BATCH_SIZE".to_string(),
        reason,
    };

    let size: u32 = value
        .trim()
        .parse()
        .map_err(|e| invalid(format!("{}", e)))?;

    if size == 0 || size > MAX_BATCH_SIZE {
        return Err(invalid(format!("must be between 1 and {}", MAX_BATCH_SIZE)));
    }

    Ok(size)
}
