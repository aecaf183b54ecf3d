//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::UserRow;
use crate::repo::{CreateUser, UserRepository};

/// PostgreSQL user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, hashed_password, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, hashed_password)
            VALUES ($1, $2, $3)
            RETURNING id, email, hashed_password, created_at, updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.hashed_password)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update_password(&self, id: Uuid, hashed_password: &str) -> DbResult<()> {
        sqlx::query("UPDATE users SET hashed_password = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(hashed_password)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
