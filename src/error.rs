// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API error types that keep the backend's error payload intact.

use serde_json::Value;

/// Message shown to the user when the backend gives no usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Error returned by every client call.
///
/// `Clone` so one refresh outcome can be handed to every waiting caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {payload}")]
    Http { status: u16, payload: Value },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("No refresh token available")]
    MissingRefreshToken,

    #[error("Response did not include an access token")]
    MissingAccessToken,

    #[error("Token storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Raw error body exactly as the server sent it.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Http { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Human-readable message provided by the server, if any.
    ///
    /// Understands `{"detail": "..."}`, `{"detail": [{"msg": "..."}]}`,
    /// `{"message": "..."}`, `{"error": "..."}` and bare JSON strings.
    pub fn server_message(&self) -> Option<&str> {
        let payload = self.payload()?;

        if let Some(s) = payload.as_str() {
            return non_empty(s);
        }

        if let Some(detail) = payload.get("detail") {
            if let Some(s) = detail.as_str() {
                return non_empty(s);
            }
            if let Some(msg) = detail
                .as_array()
                .and_then(|items| items.first())
                .and_then(|first| first.get("msg"))
                .and_then(Value::as_str)
            {
                return non_empty(msg);
            }
        }

        ["message", "error"]
            .iter()
            .find_map(|key| payload.get(key).and_then(Value::as_str))
            .and_then(non_empty)
    }

    /// Message to show the user: the server's message or the generic fallback.
    pub fn user_message(&self) -> &str {
        self.server_message().unwrap_or(FALLBACK_MESSAGE)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Result type alias for client calls.
pub type Result<T> = std::result::Result<T, ApiError>;
