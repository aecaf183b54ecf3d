//! Refresh token ledger
//!
//! Long-lived opaque tokens backed by durable storage. The ledger is the
//! sole writer of refresh token rows; storage is the single source of truth
//! for their validity.

use chrono::Utc;
use roost_db::{CreateRefreshToken, RefreshTokenRepository};
use roost_types::UserId;
use std::sync::Arc;
use std::time::Duration;

use crate::crypto::generate_refresh_token;
use crate::AuthError;

/// Issues, redeems, and revokes refresh tokens against a durable store.
#[derive(Clone)]
pub struct RefreshTokenLedger<R: RefreshTokenRepository> {
    repo: Arc<R>,
    ttl: Duration,
}

impl<R: RefreshTokenRepository> RefreshTokenLedger<R> {
    /// Create a new ledger with the given token lifetime
    pub fn new(repo: Arc<R>, ttl: Duration) -> Self {
        Self { repo, ttl }
    }

    /// Issue a new refresh token for the given user.
    ///
    /// Concurrent issues for the same user are independent: each call draws
    /// fresh randomness and inserts its own row.
    pub async fn issue(&self, user_id: UserId) -> Result<String, AuthError> {
        let token = generate_refresh_token();
        let expires_at = Utc::now() + chrono::Duration::seconds(self.ttl.as_secs() as i64);

        self.repo
            .create(CreateRefreshToken {
                token: token.clone(),
                user_id: user_id.0,
                expires_at,
            })
            .await?;

        Ok(token)
    }

    /// Redeem a refresh token, returning its owning user.
    ///
    /// Validity is decided on the single row returned by the lookup, so a
    /// revocation that completed before the redeem started is always seen.
    /// The token itself is NOT rotated: the same value stays redeemable
    /// until it expires or is revoked.
    pub async fn redeem(&self, token: &str) -> Result<UserId, AuthError> {
        let row = self
            .repo
            .find_by_token(token)
            .await?
            .ok_or(AuthError::NotFound)?;

        if row.revoked_at.is_some() {
            tracing::debug!("refresh token already revoked");
            return Err(AuthError::Revoked);
        }
        if row.is_expired() {
            tracing::debug!("refresh token past expiry");
            return Err(AuthError::Expired);
        }

        Ok(row.user_id())
    }

    /// Revoke a refresh token.
    ///
    /// Revoking an already-revoked token succeeds and leaves the original
    /// revocation timestamp in place; an unknown token is `NotFound`.
    pub async fn revoke(&self, token: &str) -> Result<(), AuthError> {
        let existed = self.repo.revoke(token, Utc::now()).await?;
        if !existed {
            return Err(AuthError::NotFound);
        }
        Ok(())
    }

    /// Garbage-collect tokens past their expiry. Returns the number removed.
    pub async fn delete_expired(&self) -> Result<u64, AuthError> {
        Ok(self.repo.delete_expired().await?)
    }
}

impl<R: RefreshTokenRepository> std::fmt::Debug for RefreshTokenLedger<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenLedger")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
