//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::*;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Replace a user's password hash
    async fn update_password(&self, id: Uuid, hashed_password: &str) -> DbResult<()>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,
}

/// Refresh token repository trait
///
/// The single lookup returns the full row, revocation state included, so the
/// caller's validity checks run against one consistent read.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Find a refresh token by its value
    async fn find_by_token(&self, token: &str) -> DbResult<Option<RefreshTokenRow>>;

    /// Persist a new refresh token
    async fn create(&self, token: CreateRefreshToken) -> DbResult<RefreshTokenRow>;

    /// Set the revocation timestamp if not already set.
    ///
    /// Returns `false` if no row with this token value exists. Must never
    /// clear or move an existing revocation timestamp.
    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> DbResult<bool>;

    /// Delete tokens past their expiry
    async fn delete_expired(&self) -> DbResult<u64>;
}

/// Create refresh token input
#[derive(Debug, Clone)]
pub struct CreateRefreshToken {
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
}
