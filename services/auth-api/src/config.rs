//! Configuration for the Auth API service.

use roost_auth_core::AuthConfig;
use std::time::Duration;

/// Auth API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Deployment environment flag. "dev" marks environments where
    /// destructive admin surfaces may run; this service has no such surface
    /// and only reports the flag at startup.
    pub platform: String,

    /// Auth core configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let http_port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        // Signing secret (minimum 32 bytes)
        let token_secret =
            std::env::var("TOKEN_SECRET").map_err(|_| ConfigError::Missing("TOKEN_SECRET"))?;

        if token_secret.len() < 32 {
            return Err(ConfigError::Invalid(
                "TOKEN_SECRET must be at least 32 characters",
            ));
        }

        let service_api_key = std::env::var("SERVICE_API_KEY")
            .map_err(|_| ConfigError::Missing("SERVICE_API_KEY"))?;

        let platform = std::env::var("PLATFORM").unwrap_or_else(|_| "prod".to_string());

        // Access token lifetime (default 1 hour; never above it)
        let access_ttl_secs: u64 = std::env::var("ACCESS_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_TTL_SECS"))?;

        let auth = AuthConfig::new(token_secret, service_api_key)
            .with_access_token_ttl(Duration::from_secs(access_ttl_secs.min(3600)));

        Ok(Self {
            http_port,
            database_url,
            platform,
            auth,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
