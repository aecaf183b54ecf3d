//! Roost Auth API
//!
//! Authentication microservice: accounts, login, and refresh token flows.

mod config;
mod error;
mod extractors;
mod handlers;
mod state;

use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use roost_auth_core::AuthService;
use roost_db::pg::Repositories;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!(platform = %config.platform, "Starting Roost Auth API");

    // Connect to database
    let pool = roost_db::create_pool(&config.database_url).await?;
    let repos = Repositories::new(pool);

    // Build the auth service
    let auth = AuthService::new(
        config.auth.clone(),
        Arc::new(repos.users),
        Arc::new(repos.refresh_tokens),
    );

    let state = AppState::new(auth);

    // Build router
    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/api/users",
            post(handlers::auth::register).put(handlers::auth::update_password),
        )
        .route("/api/login", post(handlers::auth::login))
        .route("/api/refresh", post(handlers::auth::refresh))
        .route("/api/revoke", post(handlers::auth::revoke))
        .route("/api/me", get(handlers::auth::me))
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
