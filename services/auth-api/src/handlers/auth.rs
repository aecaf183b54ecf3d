//! Authentication handlers (register, login, refresh, revoke, me)

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use roost_db::UserRow;

use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&UserRow> for UserResponse {
    fn from(user: &UserRow) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Optional client-requested access token lifetime; clamped server-side
    #[serde(default)]
    pub expires_in_seconds: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/users
///
/// Create an account
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let user = state.auth.register(&req.email, &req.password).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PUT /api/users
///
/// Replace the authenticated caller's password
pub async fn update_password(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> ApiResult<StatusCode> {
    if req.password.is_empty() {
        return Err(ApiError::BadRequest("Password is required".to_string()));
    }

    state
        .auth
        .change_password(auth_user.user_id, &req.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/login
///
/// Verify credentials and hand out an access/refresh token pair
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let requested_ttl = req
        .expires_in_seconds
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    let (user, pair) = state
        .auth
        .login(&req.email, &req.password, requested_ttl)
        .await?;

    Ok(Json(LoginResponse {
        user: UserResponse::from(&user),
        token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}

/// POST /api/refresh
///
/// Redeem the refresh token in the Authorization header for a new access token
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<RefreshResponse>> {
    let token = state.auth.refresh(&headers).await?;

    Ok(Json(RefreshResponse { token }))
}

/// POST /api/revoke
///
/// Revoke the refresh token in the Authorization header (logout)
pub async fn revoke(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<StatusCode> {
    state.auth.revoke(&headers).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/me
///
/// Identity behind the presented access token
pub async fn me(auth_user: AuthUser) -> ApiResult<Json<MeResponse>> {
    Ok(Json(MeResponse {
        id: auth_user.user_id.to_string(),
    }))
}
