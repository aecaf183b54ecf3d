//! Configuration types for the auth core

use std::time::Duration;

/// Ratio of refresh token lifetime to access token lifetime
const REFRESH_TTL_FACTOR: u32 = 60;

/// Auth core configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Symmetric secret for access token signing (shared across issue/validate)
    pub token_secret: String,
    /// Static API key authenticating the trusted integration callback
    pub service_api_key: String,
    /// Default access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
}

impl AuthConfig {
    /// Create a new auth config with default lifetimes (1 hour access,
    /// 60x that for refresh)
    pub fn new(token_secret: impl Into<String>, service_api_key: impl Into<String>) -> Self {
        let access_token_ttl = Duration::from_secs(60 * 60);
        Self {
            token_secret: token_secret.into(),
            service_api_key: service_api_key.into(),
            access_token_ttl,
            refresh_token_ttl: access_token_ttl * REFRESH_TTL_FACTOR,
        }
    }

    /// Set the access token lifetime (refresh lifetime scales with it)
    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self.refresh_token_ttl = ttl * REFRESH_TTL_FACTOR;
        self
    }

    /// Set the refresh token lifetime independently
    pub fn with_refresh_token_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_token_ttl = ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_ttl_scales_with_access_ttl() {
        let config = AuthConfig::new("secret", "key");
        assert_eq!(config.access_token_ttl, Duration::from_secs(3600));
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(60 * 3600));

        let config = config.with_access_token_ttl(Duration::from_secs(60));
        assert_eq!(config.refresh_token_ttl, Duration::from_secs(3600));
    }
}
