//! Access token codec
//!
//! Stateless, signed, time-bounded identity assertions: HS256 JWTs carrying
//! only registered claims. Validity is signature + expiry against the shared
//! secret; there is no storage lookup and no revocation path for access
//! tokens. Session termination goes through the refresh token ledger and the
//! short TTL here bounds the remaining exposure.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use roost_types::UserId;

use crate::AuthError;

/// Issuer tag embedded in every access token
pub const ISSUER: &str = "roost";

/// Upper bound on the access token lifetime, regardless of what a client
/// asks for at login
pub const MAX_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Registered claims carried by an access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer tag
    pub iss: String,
    /// Subject (user ID)
    pub sub: String,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

/// Clamp a client-requested token lifetime to the allowed maximum.
pub fn clamp_access_ttl(requested: Duration) -> Duration {
    requested.min(MAX_ACCESS_TOKEN_TTL)
}

/// Issue a signed access token for the given user.
pub fn issue_access_token(
    user_id: UserId,
    secret: &str,
    ttl: Duration,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        iss: ISSUER.to_string(),
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + chrono::Duration::seconds(ttl.as_secs() as i64)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("access token signing failed: {}", e);
        AuthError::HashingFailure
    })
}

/// Validate an access token and return the user ID from its subject.
///
/// The verifier accepts exactly one algorithm. The algorithm field of the
/// token selects nothing; a token declaring anything but HS256 is rejected
/// before any key material is touched.
pub fn validate_access_token(token: &str, secret: &str) -> Result<UserId, AuthError> {
    let header = decode_header(token).map_err(|e| {
        tracing::debug!("undecodable token header: {}", e);
        AuthError::MalformedCredential
    })?;

    if header.alg != Algorithm::HS256 {
        tracing::debug!("token declared unsupported algorithm {:?}", header.alg);
        return Err(AuthError::UnsupportedAlgorithm);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    // Expiry is an exact boundary; no leeway.
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!("access token validation failed: {}", e);
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::InvalidAlgorithm => AuthError::UnsupportedAlgorithm,
            _ => AuthError::MalformedCredential,
        }
    })?;

    // The library's exp check is strictly-less-than; the boundary here is
    // closed, so a token is already invalid at its expiry instant.
    if Utc::now().timestamp() >= data.claims.exp {
        return Err(AuthError::Expired);
    }

    UserId::parse(&data.claims.sub).map_err(|_| AuthError::MalformedCredential)
}
