//! Credential extraction from request headers
//!
//! Both credential kinds ride the `Authorization` header as a two-token
//! `<Scheme> <value>` pair. Only the scheme is case-insensitive; the value
//! is returned exactly as sent, with no trimming or case folding.

use http::header::AUTHORIZATION;
use http::HeaderMap;

use crate::AuthError;

/// Extract a bearer token from the request headers.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    scheme_value(headers, "Bearer")
}

/// Extract a static API key from the request headers.
pub fn api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    scheme_value(headers, "ApiKey")
}

fn scheme_value<'a>(headers: &'a HeaderMap, scheme: &str) -> Result<&'a str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    let value = header
        .to_str()
        .map_err(|_| AuthError::MalformedCredential)?;

    // Exactly two whitespace-separated fields; anything else is malformed.
    let mut fields = value.split_whitespace();
    let (got_scheme, secret) = match (fields.next(), fields.next(), fields.next()) {
        (Some(s), Some(v), None) => (s, v),
        _ => return Err(AuthError::MalformedCredential),
    };

    if !got_scheme.eq_ignore_ascii_case(scheme) {
        return Err(AuthError::MalformedCredential);
    }

    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with_auth("Bearer abc123");
        assert_eq!(bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with_auth("bearer ABC123");
        assert_eq!(bearer_token(&headers).unwrap(), "ABC123");

        let headers = headers_with_auth("BEARER abc");
        assert_eq!(bearer_token(&headers).unwrap(), "abc");
    }

    #[test]
    fn test_value_is_not_normalized() {
        // Case of the secret itself is preserved untouched
        let headers = headers_with_auth("Bearer MiXeD.CaSe");
        assert_eq!(bearer_token(&headers).unwrap(), "MiXeD.CaSe");
    }

    #[test]
    fn test_missing_header_fails() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MissingCredential)
        ));
    }

    #[test]
    fn test_wrong_scheme_fails() {
        let headers = headers_with_auth("Token abc123");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_missing_value_fails() {
        let headers = headers_with_auth("Bearer");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_extra_fields_fail() {
        let headers = headers_with_auth("Bearer abc 123");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_empty_header_fails() {
        let headers = headers_with_auth("");
        assert!(matches!(
            bearer_token(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }

    #[test]
    fn test_api_key_extracted() {
        let headers = headers_with_auth("ApiKey k-123");
        assert_eq!(api_key(&headers).unwrap(), "k-123");

        let headers = headers_with_auth("apikey k-123");
        assert_eq!(api_key(&headers).unwrap(), "k-123");
    }

    #[test]
    fn test_api_key_rejects_bearer_scheme() {
        let headers = headers_with_auth("Bearer k-123");
        assert!(matches!(
            api_key(&headers),
            Err(AuthError::MalformedCredential)
        ));
    }
}
