// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local (unverified) inspection of access tokens.
//!
//! The client never holds the signing key; the backend verifies signatures.
//! Here we only read the payload to decide whether a token is worth sending.

use crate::models::Role;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims the client cares about. Unknown claims are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID or email, backend-defined)
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiration time (Unix timestamp)
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued at (Unix timestamp)
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Decode the payload segment of a JWT without checking its signature.
///
/// Returns None for anything that is not three dot-separated segments with a
/// base64url JSON object in the middle.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    // Some encoders keep the padding; the URL-safe alphabet is mandatory.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// True if the token decodes and its `exp` is strictly after `now`.
///
/// A token without `exp` is treated as unusable.
pub fn is_token_valid(token: &str, now: DateTime<Utc>) -> bool {
    decode_claims(token)
        .and_then(|claims| claims.exp)
        .is_some_and(|exp| exp > now.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn unsigned_token(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn test_valid_future_exp() {
        let now = Utc::now();
        let token = unsigned_token(json!({
            "sub": "42",
            "exp": (now + Duration::hours(1)).timestamp(),
            "role": "entrenador",
        }));

        assert!(is_token_valid(&token, now));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("42"));
        assert_eq!(claims.role, Some(Role::Entrenador));
    }

    #[test]
    fn test_past_or_equal_exp_is_invalid() {
        let now = Utc::now();
        let expired = unsigned_token(json!({ "exp": (now - Duration::seconds(1)).timestamp() }));
        let boundary = unsigned_token(json!({ "exp": now.timestamp() }));

        assert!(!is_token_valid(&expired, now));
        assert!(!is_token_valid(&boundary, now));
    }

    #[test]
    fn test_malformed_tokens_are_invalid() {
        let now = Utc::now();
        assert!(!is_token_valid("", now));
        assert!(!is_token_valid("not-a-jwt", now));
        assert!(!is_token_valid("a.b", now));
        assert!(!is_token_valid("a.b.c.d", now));
        assert!(!is_token_valid("header.!!!notbase64!!!.sig", now));

        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(!is_token_valid(&not_json, now));
    }

    #[test]
    fn test_missing_exp_is_invalid() {
        let token = unsigned_token(json!({ "sub": "42" }));
        assert!(decode_claims(&token).is_some());
        assert!(!is_token_valid(&token, Utc::now()));
    }

    #[test]
    fn test_unknown_role_still_decodes() {
        let token = unsigned_token(json!({ "exp": 1, "role": "tesorero" }));
        assert_eq!(decode_claims(&token).unwrap().role, Some(Role::Other));
    }
}
