//! PostgreSQL refresh token repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::DbResult;
use crate::models::RefreshTokenRow;
use crate::repo::{CreateRefreshToken, RefreshTokenRepository};

/// PostgreSQL refresh token repository
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    /// Create a new refresh token repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    async fn find_by_token(&self, token: &str) -> DbResult<Option<RefreshTokenRow>> {
        // One read returns expiry and revocation state together; validity
        // checks downstream always see a consistent snapshot of the row.
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT token, user_id, created_at, updated_at, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, token: CreateRefreshToken) -> DbResult<RefreshTokenRow> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            INSERT INTO refresh_tokens (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, created_at, updated_at, expires_at, revoked_at
            "#,
        )
        .bind(&token.token)
        .bind(token.user_id)
        .bind(token.expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> DbResult<bool> {
        // COALESCE keeps the first revocation timestamp; re-revoking a token
        // neither un-revokes it nor moves the instant.
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = COALESCE(revoked_at, $2), updated_at = $2
            WHERE token = $1
            "#,
        )
        .bind(token)
        .bind(at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM refresh_tokens WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
