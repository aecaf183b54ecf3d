//! Cryptographic utilities
//!
//! Security-critical primitives: constant-time comparison for secret values
//! and entropy for opaque refresh tokens.

use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a refresh token (256 bits)
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate an opaque refresh token value.
///
/// 32 bytes from the OS CSPRNG, hex-encoded to a fixed 64-character string.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Constant-time byte slice comparison.
///
/// Comparison time depends only on the length of the slices, not on their
/// contents. Length itself is not treated as secret.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    // XOR accumulator: zero only if every byte pair matches, and every byte
    // is visited regardless of where a difference sits.
    let result = a
        .iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y));

    result == 0
}

/// Constant-time string comparison.
#[inline]
pub fn constant_time_str_eq(a: &str, b: &str) -> bool {
    constant_time_eq(a.as_bytes(), b.as_bytes())
}
