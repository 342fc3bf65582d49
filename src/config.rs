//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Versioned base URL of the club backend, without a trailing slash
    pub api_base_url: String,
    /// Where to persist the session tokens (None keeps them in memory)
    pub token_store_path: Option<PathBuf>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api/v1".to_string(),
            token_store_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_base_url =
            env::var("CLUB_API_URL").map_err(|_| ConfigError::Missing("CLUB_API_URL"))?;

        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url)?,
            token_store_path: env::var("CLUB_TOKEN_FILE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            name: "CLUB_API_URL",
            reason: format!("expected an http(s) URL, got {:?}", raw),
        });
    }
    Ok(trimmed.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
