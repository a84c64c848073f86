//! Bearer token handling.
//!
//! Tokens are opaque random strings handed to the client at signup and login. The
//! database only ever sees their SHA-256 hash. Clients present a token in the
//! `Authorization` header, either raw or as `Bearer <token>`.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Number of random bytes in a token before encoding.
const TOKEN_BYTES: usize = 32;

/// Read access to the token presented with a request.
pub struct AuthSession<'a> {
    headers: &'a HeaderMap,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession over the request headers.
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }

    /// Returns the presented token, if any.
    ///
    /// A `Bearer ` prefix is stripped (case-insensitively). Empty values count as no
    /// token.
    ///
    /// # Returns
    /// - `Some(token)` - Header present with a non-empty token
    /// - `None` - Header missing, not valid UTF-8 or empty
    pub fn token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?.trim();

        let token = match (value.get(..6), value.get(6..)) {
            (Some(scheme), Some(rest))
                if scheme.eq_ignore_ascii_case("bearer")
                    && rest.chars().next().is_none_or(char::is_whitespace) =>
            {
                rest.trim()
            }
            _ => value,
        };

        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }
}

/// Generates a new random token, URL-safe base64 without padding.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Hashes a token for storage and lookup.
pub fn hash_token(token: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}
