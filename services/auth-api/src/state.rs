//! Application state

use std::sync::Arc;

use roost_auth_core::AuthService;
use roost_db::pg::{PgRefreshTokenRepository, PgUserRepository};

/// Type alias for the auth service with concrete repository types
pub type AuthServiceImpl = AuthService<PgUserRepository, PgRefreshTokenRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for credential checks and token flows
    pub auth: Arc<AuthServiceImpl>,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: AuthServiceImpl) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}
