//! Auth service - ties together extraction, the token codec, and the ledger
//!
//! This is the guard the surrounding request/response glue calls into: it
//! resolves "who is making this request" and composes the login, refresh,
//! and revoke flows out of the lower-level primitives.

use http::HeaderMap;
use roost_db::{CreateUser, RefreshTokenRepository, UserRepository, UserRow};
use roost_types::{TokenPair, UserId};
use std::sync::Arc;
use std::time::Duration;

use crate::config::AuthConfig;
use crate::crypto::constant_time_str_eq;
use crate::refresh::RefreshTokenLedger;
use crate::token::{clamp_access_ttl, issue_access_token, validate_access_token};
use crate::{extract, password, AuthError};

/// Authentication service
///
/// Provides the unified interface for:
/// - Request authentication (bearer access tokens)
/// - Trusted-integration authentication (static API key)
/// - Login / refresh / revoke flows
pub struct AuthService<U: UserRepository, R: RefreshTokenRepository> {
    config: AuthConfig,
    ledger: RefreshTokenLedger<R>,
    user_repo: Arc<U>,
}

impl<U: UserRepository, R: RefreshTokenRepository> AuthService<U, R> {
    /// Create a new auth service
    pub fn new(config: AuthConfig, user_repo: Arc<U>, refresh_repo: Arc<R>) -> Self {
        Self {
            ledger: RefreshTokenLedger::new(refresh_repo, config.refresh_token_ttl),
            user_repo,
            config,
        }
    }

    /// Access the refresh token ledger (maintenance tasks, tests)
    pub fn ledger(&self) -> &RefreshTokenLedger<R> {
        &self.ledger
    }

    // =========================================================================
    // Request authentication
    // =========================================================================

    /// Resolve the identity behind a request from its headers.
    ///
    /// The standard "is this a logged-in user" check for protected
    /// operations: bearer extraction plus stateless token validation.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<UserId, AuthError> {
        let token = extract::bearer_token(headers)?;
        validate_access_token(token, &self.config.token_secret)
    }

    /// Authenticate a trusted-integration callback via the static API key.
    ///
    /// Not tied to any user identity. The comparison runs in constant time.
    pub fn authenticate_service(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let key = extract::api_key(headers)?;
        if !constant_time_str_eq(key, &self.config.service_api_key) {
            tracing::debug!("service API key mismatch");
            return Err(AuthError::InvalidCredential);
        }
        Ok(())
    }

    // =========================================================================
    // Account + session flows
    // =========================================================================

    /// Create an account with a hashed password.
    pub async fn register(&self, email: &str, pass: &str) -> Result<UserRow, AuthError> {
        let hashed_password = password::hash_password(pass)?;
        let user = self
            .user_repo
            .create(CreateUser {
                id: uuid::Uuid::new_v4(),
                email: email.to_string(),
                hashed_password,
            })
            .await?;
        Ok(user)
    }

    /// Replace an account's password.
    ///
    /// The new plaintext is hashed and the stored hash overwritten; the old
    /// hash is gone after this returns. Existing sessions are untouched.
    pub async fn change_password(
        &self,
        user_id: UserId,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let user = self
            .user_repo
            .find_by_id(user_id.0)
            .await?
            .ok_or(AuthError::NotFound)?;

        let hashed_password = password::hash_password(new_password)?;
        self.user_repo
            .update_password(user.id, &hashed_password)
            .await?;
        Ok(())
    }

    /// Verify credentials and mint a token pair.
    ///
    /// Unknown email and wrong password are internally distinct (`NotFound`
    /// vs `InvalidCredential`) but both collapse to the same unauthorized
    /// outcome on the wire; neither half is revealed. A client-requested
    /// access TTL is honored only up to the fixed maximum.
    pub async fn login(
        &self,
        email: &str,
        pass: &str,
        requested_ttl: Option<Duration>,
    ) -> Result<(UserRow, TokenPair), AuthError> {
        let user = self.user_repo.find_by_email(email).await?.ok_or_else(|| {
            tracing::debug!("login for unknown email");
            AuthError::NotFound
        })?;

        if !password::verify_password(pass, &user.hashed_password)? {
            tracing::debug!(user_id = %user.id, "login with wrong password");
            return Err(AuthError::InvalidCredential);
        }

        let ttl = clamp_access_ttl(requested_ttl.unwrap_or(self.config.access_token_ttl));
        let access_token = issue_access_token(user.user_id(), &self.config.token_secret, ttl)?;
        let refresh_token = self.ledger.issue(user.user_id()).await?;

        let pair = TokenPair::new(access_token, refresh_token, ttl.as_secs());
        Ok((user, pair))
    }

    /// Redeem the refresh token in the request and mint a new access token.
    pub async fn refresh(&self, headers: &HeaderMap) -> Result<String, AuthError> {
        let token = extract::bearer_token(headers)?;
        let user_id = self.ledger.redeem(token).await?;

        issue_access_token(user_id, &self.config.token_secret, self.config.access_token_ttl)
    }

    /// Revoke the refresh token in the request (logout).
    pub async fn revoke(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        let token = extract::bearer_token(headers)?;
        self.ledger.revoke(token).await
    }
}

/// Enforce resource ownership.
///
/// A pure equality check. Callers must establish that the resource exists
/// before invoking this, so a `Forbidden` response never reveals existence
/// that a `NotFound` would have hidden.
pub fn authorize_owner(identity: UserId, resource_owner: UserId) -> Result<(), AuthError> {
    if identity != resource_owner {
        return Err(AuthError::Forbidden);
    }
    Ok(())
}

impl<U: UserRepository, R: RefreshTokenRepository> std::fmt::Debug for AuthService<U, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("access_token_ttl", &self.config.access_token_ttl)
            .field("refresh_token_ttl", &self.config.refresh_token_ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_owner() {
        let owner = UserId::new();
        let other = UserId::new();

        assert!(authorize_owner(owner, owner).is_ok());
        assert!(matches!(
            authorize_owner(other, owner),
            Err(AuthError::Forbidden)
        ));
    }
}
