//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Refresh token row from the database
///
/// The token value itself is the primary key; the ledger is the sole writer.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenRow {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> roost_types::UserId {
        roost_types::UserId(self.id)
    }
}

impl RefreshTokenRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> roost_types::UserId {
        roost_types::UserId(self.user_id)
    }

    /// Check if the token is past its expiry instant
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
