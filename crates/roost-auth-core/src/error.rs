//! Auth errors
//!
//! A closed set of tagged variants. The distinctions exist for logging and
//! tests; `status_code` and `public_message` are the only things a response
//! surface may consult, which keeps the collapse policy in the type rather
//! than in handler discipline.

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential present in the request
    #[error("missing credential")]
    MissingCredential,

    /// Credential present but not in the expected shape
    #[error("malformed credential")]
    MalformedCredential,

    /// A supplied secret did not match (wrong password, wrong API key)
    #[error("invalid credential")]
    InvalidCredential,

    /// Token MAC did not verify
    #[error("invalid signature")]
    InvalidSignature,

    /// Token declared a signing algorithm the verifier does not accept
    #[error("unsupported signing algorithm")]
    UnsupportedAlgorithm,

    /// Token or session past its expiry instant
    #[error("expired")]
    Expired,

    /// Refresh token has been revoked
    #[error("revoked")]
    Revoked,

    /// Referenced record does not exist
    #[error("not found")]
    NotFound,

    /// Authenticated, but not permitted to act on this resource
    #[error("forbidden")]
    Forbidden,

    /// Password hashing failed
    #[error("hashing failure")]
    HashingFailure,

    /// Storage layer failure
    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl AuthError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingCredential
            | Self::MalformedCredential
            | Self::InvalidCredential
            | Self::InvalidSignature
            | Self::UnsupportedAlgorithm
            | Self::Expired
            | Self::Revoked
            | Self::NotFound => 401,
            Self::Forbidden => 403,
            Self::HashingFailure | Self::StorageFailure(_) => 500,
        }
    }

    /// Error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Forbidden => "FORBIDDEN",
            Self::HashingFailure | Self::StorageFailure(_) => "INTERNAL_ERROR",
            _ => "UNAUTHORIZED",
        }
    }

    /// Message safe to put on the wire.
    ///
    /// Every verification failure collapses to the same string so callers
    /// cannot distinguish an unknown account from a wrong secret or a
    /// revoked token.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Forbidden => "you do not own this resource",
            Self::HashingFailure | Self::StorageFailure(_) => "internal error",
            _ => "invalid or missing credentials",
        }
    }
}

impl From<roost_db::DbError> for AuthError {
    fn from(err: roost_db::DbError) -> Self {
        tracing::error!("database error: {}", err);
        Self::StorageFailure(err.to_string())
    }
}
