//! Health check handlers

pub async fn health() -> &'static str {
    "OK"
}
