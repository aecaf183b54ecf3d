//! Axum extractors for authentication

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use roost_types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from the request's bearer token
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let user_id = app_state.auth.authenticate(&parts.headers)?;

        Ok(AuthUser { user_id })
    }
}
