//! Mock repositories for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use roost_db::{
    CreateRefreshToken, CreateUser, DbResult, RefreshTokenRepository, RefreshTokenRow,
    UserRepository, UserRow,
};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        let row = UserRow {
            id: user.id,
            email: user.email.clone(),
            hashed_password: user.hashed_password,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.by_email.insert(row.email.clone(), row.id);
        self.users.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update_password(&self, id: Uuid, hashed_password: &str) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.hashed_password = hashed_password.to_string();
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// In-memory refresh token repository for testing
#[derive(Default, Clone)]
pub struct MockRefreshTokenRepository {
    tokens: Arc<DashMap<String, RefreshTokenRow>>,
}

impl MockRefreshTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row directly, bypassing the ledger
    #[allow(dead_code)]
    pub fn insert_row(&self, row: RefreshTokenRow) {
        self.tokens.insert(row.token.clone(), row);
    }

    /// Read a row back for assertions
    #[allow(dead_code)]
    pub fn get_row(&self, token: &str) -> Option<RefreshTokenRow> {
        self.tokens.get(token).map(|r| r.value().clone())
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn find_by_token(&self, token: &str) -> DbResult<Option<RefreshTokenRow>> {
        Ok(self.tokens.get(token).map(|r| r.value().clone()))
    }

    async fn create(&self, token: CreateRefreshToken) -> DbResult<RefreshTokenRow> {
        let row = RefreshTokenRow {
            token: token.token.clone(),
            user_id: token.user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            expires_at: token.expires_at,
            revoked_at: None,
        };
        self.tokens.insert(token.token, row.clone());
        Ok(row)
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> DbResult<bool> {
        match self.tokens.get_mut(token) {
            Some(mut row) => {
                // First revocation wins; a repeat never moves the timestamp
                if row.revoked_at.is_none() {
                    row.revoked_at = Some(at);
                }
                row.updated_at = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_expired(&self) -> DbResult<u64> {
        let now = Utc::now();
        let expired: Vec<String> = self
            .tokens
            .iter()
            .filter(|r| r.expires_at < now)
            .map(|r| r.token.clone())
            .collect();
        let count = expired.len() as u64;
        for token in expired {
            self.tokens.remove(&token);
        }
        Ok(count)
    }
}
