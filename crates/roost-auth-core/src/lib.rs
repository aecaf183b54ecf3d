//! Roost Auth Core - Authentication business logic
//!
//! Credential and session authentication for the roost service: password
//! hashing, access token issuance/validation, the refresh token ledger, and
//! the guard that turns request headers into an authenticated identity.

pub mod config;
pub mod crypto;
pub mod error;
pub mod extract;
pub mod password;
pub mod refresh;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use crypto::{constant_time_eq, constant_time_str_eq};
pub use error::*;
pub use extract::{api_key, bearer_token};
pub use refresh::RefreshTokenLedger;
pub use service::{authorize_owner, AuthService};
pub use token::{issue_access_token, validate_access_token, MAX_ACCESS_TOKEN_TTL};
