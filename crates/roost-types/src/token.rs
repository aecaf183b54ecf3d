//! Token types

use serde::{Deserialize, Serialize};

/// Token pair returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Access token (short-lived, stateless)
    pub access_token: String,
    /// Refresh token (long-lived, server-side)
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
    /// Token type (always "Bearer")
    pub token_type: String,
}

impl TokenPair {
    /// Build a token pair with the standard bearer type
    pub fn new(access_token: String, refresh_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            token_type: "Bearer".to_string(),
        }
    }
}
