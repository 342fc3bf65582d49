// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP client wrapper for the club backend API.
//!
//! Handles:
//! - Bearer token injection from the shared [`TokenStore`]
//! - 401 handling (clear tokens, send the user back to the login view)
//! - Error bodies surfaced unmodified as [`ApiError::Http`]
//! - Empty bodies (204) decoded as JSON `null`

use crate::app::navigation::{Navigator, Route};
use crate::auth::TokenStore;
use crate::error::{ApiError, Result};
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};

/// Backend API client. Cheap to clone; clones share tokens and navigation.
#[derive(Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    /// Session generation, bumped every time the session is ended.
    session_epoch: Arc<Mutex<u64>>,
}

impl HttpClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            tokens,
            navigator,
            session_epoch: Arc::new(Mutex::new(0)),
        }
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn session_epoch(&self) -> u64 {
        *self
            .session_epoch
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear the stored tokens and start a new session generation.
    pub fn end_session(&self) -> Result<()> {
        let mut epoch = self
            .session_epoch
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *epoch += 1;
        self.tokens.clear()
    }

    /// Store tokens obtained during session generation `epoch`.
    ///
    /// Returns false, storing nothing, if the session ended since then.
    pub fn store_tokens_if_current(
        &self,
        epoch: u64,
        access_token: &str,
        refresh_token: Option<&str>,
    ) -> Result<bool> {
        let current = self
            .session_epoch
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *current != epoch {
            return Ok(false);
        }
        self.tokens.set_tokens(access_token, refresh_token)?;
        Ok(true)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::GET, path)).await
    }

    /// GET with query parameters (`None` fields are skipped by serde).
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::POST, path)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.request(Method::DELETE, path)).await
    }

    /// Build a request, attaching the bearer token when one is stored.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, path, "Dispatching request");

        let builder = self.http.request(method, url);
        match self.tokens.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let payload = parse_error_body(&bytes);

            if status.as_u16() == 401 {
                tracing::warn!("Backend rejected credentials (401), ending session");
                if let Err(e) = self.end_session() {
                    tracing::error!(error = %e, "Failed to clear tokens after 401");
                }
                self.navigator.navigate(Route::Login);
            } else {
                tracing::debug!(status = status.as_u16(), "Request failed");
            }

            return Err(ApiError::Http {
                status: status.as_u16(),
                payload,
            });
        }

        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Keep the server's error body as JSON; non-JSON text becomes a JSON string.
fn parse_error_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
