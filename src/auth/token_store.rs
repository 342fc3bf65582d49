// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage for the session's access and refresh tokens.
//!
//! The store is the only durable state the client owns. Two implementations:
//! - [`MemoryTokenStore`]: process-local, lost on exit
//! - [`FileTokenStore`]: JSON file, survives restarts of the binary

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

/// Access and refresh token pair as persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Thread-safe token storage shared by the HTTP client and the session.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    /// Replace the access token, and the refresh token when one is given.
    fn set_tokens(&self, access_token: &str, refresh_token: Option<&str>) -> Result<()>;

    fn set_access_token(&self, access_token: &str) -> Result<()> {
        self.set_tokens(access_token, None)
    }

    /// Forget both tokens.
    fn clear(&self) -> Result<()>;
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<StoredTokens>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with tokens (used to resume a session).
    pub fn with_tokens(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            tokens: RwLock::new(StoredTokens {
                access_token,
                refresh_token,
            }),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .refresh_token
            .clone()
    }

    fn set_tokens(&self, access_token: &str, refresh_token: Option<&str>) -> Result<()> {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut tokens, access_token, refresh_token);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = StoredTokens::default();
        Ok(())
    }
}

/// Token store persisted as a JSON file.
///
/// The file is read once on open and rewritten after every change; the
/// in-memory copy is authoritative for reads.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    tokens: RwLock<StoredTokens>,
}

impl FileTokenStore {
    /// Open the store at `path`. A missing file means an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tokens = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                ApiError::Storage(format!("Corrupt token file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => StoredTokens::default(),
            Err(e) => {
                return Err(ApiError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::debug!(path = %path.display(), "Token store opened");
        Ok(Self {
            path,
            tokens: RwLock::new(tokens),
        })
    }

    fn persist(&self, tokens: &StoredTokens) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                ApiError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_vec_pretty(tokens)
            .map_err(|e| ApiError::Storage(format!("Failed to encode tokens: {}", e)))?;
        fs::write(&self.path, json).map_err(|e| {
            ApiError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .refresh_token
            .clone()
    }

    fn set_tokens(&self, access_token: &str, refresh_token: Option<&str>) -> Result<()> {
        let mut tokens = self.tokens.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut tokens, access_token, refresh_token);
        self.persist(&tokens)
    }

    fn clear(&self) -> Result<()> {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = StoredTokens::default();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

fn apply(tokens: &mut StoredTokens, access_token: &str, refresh_token: Option<&str>) {
    tokens.access_token = Some(access_token.to_string());
    if let Some(refresh) = refresh_token {
        tokens.refresh_token = Some(refresh.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_keeps_refresh_token_on_access_update() {
        let store = MemoryTokenStore::new();
        store.set_tokens("access-1", Some("refresh-1")).unwrap();
        store.set_access_token("access-2").unwrap();

        assert_eq!(store.access_token().as_deref(), Some("access-2"));
        assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));

        store.clear().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session").join("tokens.json");

        let store = FileTokenStore::open(&path).unwrap();
        assert!(store.access_token().is_none());
        store.set_tokens("access", Some("refresh")).unwrap();

        let reopened = FileTokenStore::open(&path).unwrap();
        assert_eq!(reopened.access_token().as_deref(), Some("access"));
        assert_eq!(reopened.refresh_token().as_deref(), Some("refresh"));

        reopened.clear().unwrap();
        assert!(!path.exists());
        // Clearing twice is fine
        reopened.clear().unwrap();
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, b"not json").unwrap();

        assert!(matches!(
            FileTokenStore::open(&path),
            Err(ApiError::Storage(_))
        ));
    }
}
