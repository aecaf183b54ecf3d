//! Password hashing and verification
//!
//! bcrypt at the default work factor. Hashing is salted and therefore
//! non-deterministic; two hashes of the same password never match. The
//! hasher keeps no state and never logs its inputs.

use crate::AuthError;

/// Hash a plaintext password for storage.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        AuthError::HashingFailure
    })
}

/// Verify a plaintext password against a stored hash.
///
/// A malformed stored hash is a verification failure, not an error; the
/// caller sees the same `false` as for a wrong password.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    match bcrypt::verify(password, hash) {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::debug!("password verification against unusable hash: {}", e);
            Ok(false)
        }
    }
}
