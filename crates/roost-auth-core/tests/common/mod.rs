//! Shared test infrastructure

pub mod mock_repos;

use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};

/// Build headers carrying a bearer credential
pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}

/// Build headers carrying an API key credential
#[allow(dead_code)]
pub fn api_key_headers(key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("ApiKey {key}")).unwrap(),
    );
    headers
}
