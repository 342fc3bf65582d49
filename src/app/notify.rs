//! Toast notifications shown after user actions.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A message for the notification area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Error notice using the server's message, or the generic fallback.
    pub fn from_error(err: &ApiError) -> Self {
        tracing::debug!(error = %err, "Reporting error to user");
        Self {
            level: NoticeLevel::Error,
            message: err.user_message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FALLBACK_MESSAGE;
    use serde_json::json;

    #[test]
    fn test_error_notice_uses_server_message() {
        let err = ApiError::Http {
            status: 400,
            payload: json!({ "detail": "Credenciales incorrectas" }),
        };
        let notice = Notice::from_error(&err);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Credenciales incorrectas");
    }

    #[test]
    fn test_error_notice_fallback() {
        let notice = Notice::from_error(&ApiError::Network("timeout".to_string()));
        assert_eq!(notice.message, FALLBACK_MESSAGE);
    }
}
