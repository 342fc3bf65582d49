// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle: login, logout, registration, 2FA and token refresh.
//!
//! Handles:
//! - Local validity checks on the stored access token (no round-trip)
//! - Refresh coalescing: concurrent callers share one `/auth/refresh` call
//! - Token storage as a side effect of login/2FA/logout

use crate::app::navigation::Navigator;
use crate::auth::jwt::{self, Claims};
use crate::auth::TokenStore;
use crate::error::{ApiError, Result};
use crate::http::HttpClient;
use crate::models::{MessageResponse, RegisterRequest, User};
use chrono::Utc;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct TwoFactorVerifyRequest<'a> {
    temp_token: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct TwoFactorCodeRequest<'a> {
    code: &'a str,
}

/// Token pair issued by `/auth/refresh` and `/auth/2fa/verify`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Body of `/auth/login`: either tokens or a 2FA challenge.
#[derive(Debug, Clone, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default, rename = "requires_2fa", alias = "two_factor_required")]
    requires_two_factor: bool,
    #[serde(default)]
    temp_token: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RegisterResponse {
    WithTokens {
        access_token: String,
        #[serde(default)]
        refresh_token: Option<String>,
        user: User,
    },
    User(User),
}

/// Result of a password login.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Tokens stored; the user is signed in.
    Authenticated { user: Option<User> },
    /// The backend wants a second factor before issuing tokens.
    TwoFactorRequired { temp_token: String },
}

/// Data needed to enroll an authenticator app.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TwoFactorSetup {
    pub secret: String,
    #[serde(default, alias = "otpauth_url", alias = "qr_code_uri")]
    pub provisioning_uri: Option<String>,
    /// Pre-rendered QR image (data URL), when the backend provides one
    #[serde(default)]
    pub qr_code: Option<String>,
}

type RefreshFuture = Shared<BoxFuture<'static, Result<String>>>;

/// The refresh currently on the wire, shared by every waiting caller.
struct InFlight {
    id: u64,
    future: RefreshFuture,
}

/// Client-side view of the authenticated session.
///
/// Cheap to clone; clones share the token store and the in-flight refresh.
#[derive(Clone)]
pub struct AuthSession {
    http: HttpClient,
    inflight: Arc<Mutex<Option<InFlight>>>,
    next_refresh_id: Arc<AtomicU64>,
}

impl AuthSession {
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            inflight: Arc::new(Mutex::new(None)),
            next_refresh_id: Arc::new(AtomicU64::new(0)),
        }
    }

    fn tokens(&self) -> &Arc<dyn TokenStore> {
        self.http.tokens()
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        self.http.navigator()
    }

    // ─── Local State ─────────────────────────────────────────────────────────

    /// True if a stored access token decodes and has not expired.
    pub fn is_authenticated(&self) -> bool {
        self.tokens()
            .access_token()
            .is_some_and(|token| jwt::is_token_valid(&token, Utc::now()))
    }

    /// Claims of the stored access token, if it decodes.
    pub fn claims(&self) -> Option<Claims> {
        self.tokens()
            .access_token()
            .and_then(|token| jwt::decode_claims(&token))
    }

    /// Valid locally, or made valid by one silent refresh.
    pub async fn check_auth(&self) -> bool {
        if self.is_authenticated() {
            return true;
        }

        match self.refresh_token().await {
            Ok(token) => jwt::is_token_valid(&token, Utc::now()),
            Err(e) => {
                tracing::debug!(error = %e, "Silent refresh failed");
                false
            }
        }
    }

    // ─── Token Refresh ───────────────────────────────────────────────────────

    /// Obtain a new access token.
    ///
    /// If a refresh is already running, wait for it and return its outcome
    /// instead of issuing another call. The in-flight marker is cleared when
    /// the call settles, success or failure.
    pub async fn refresh_token(&self) -> Result<String> {
        let future = {
            let mut slot = self.inflight.lock().await;
            match slot.as_ref() {
                Some(inflight) => {
                    tracing::debug!(refresh_id = inflight.id, "Joining in-flight token refresh");
                    inflight.future.clone()
                }
                None => {
                    let id = self.next_refresh_id.fetch_add(1, Ordering::Relaxed);
                    let future =
                        run_refresh(self.http.clone(), Arc::clone(&self.inflight), id)
                            .boxed()
                            .shared();
                    *slot = Some(InFlight {
                        id,
                        future: future.clone(),
                    });
                    future
                }
            }
        };

        future.await
    }

    // ─── Login / Logout ──────────────────────────────────────────────────────

    /// Password login. Stores the issued tokens unless 2FA is required.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let response: LoginResponse = self
            .http
            .post("/auth/login", &LoginRequest { email, password })
            .await?;

        if response.requires_two_factor {
            let temp_token = response.temp_token.ok_or_else(|| {
                ApiError::Decode("2FA challenge without temp_token".to_string())
            })?;
            tracing::info!("Login requires second factor");
            return Ok(LoginOutcome::TwoFactorRequired { temp_token });
        }

        let access_token = response
            .access_token
            .ok_or(ApiError::MissingAccessToken)?;
        self.tokens()
            .set_tokens(&access_token, response.refresh_token.as_deref())?;

        tracing::info!("Login successful");
        Ok(LoginOutcome::Authenticated {
            user: response.user,
        })
    }

    /// Complete a 2FA login with the code from the authenticator app.
    pub async fn verify_two_factor(&self, temp_token: &str, code: &str) -> Result<TokenResponse> {
        let response: TokenResponse = self
            .http
            .post(
                "/auth/2fa/verify",
                &TwoFactorVerifyRequest { temp_token, code },
            )
            .await?;

        self.tokens()
            .set_tokens(&response.access_token, response.refresh_token.as_deref())?;
        tracing::info!("Second factor accepted");
        Ok(response)
    }

    /// End the session.
    ///
    /// Local tokens are cleared even when the remote call fails; the remote
    /// error is still returned to the caller.
    pub async fn logout(&self) -> Result<()> {
        let remote: Result<Value> = match self.tokens().refresh_token() {
            Some(refresh_token) => {
                self.http
                    .post(
                        "/auth/logout",
                        &RefreshRequest {
                            refresh_token: &refresh_token,
                        },
                    )
                    .await
            }
            None => self.http.post_empty("/auth/logout").await,
        };

        self.http.end_session()?;

        match remote {
            Ok(_) => {
                tracing::info!("Logged out");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Remote logout failed, local session cleared");
                Err(e)
            }
        }
    }

    // ─── Account ─────────────────────────────────────────────────────────────

    /// Create an account. Tokens are stored if the backend signs the user in.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let response: RegisterResponse = self.http.post("/auth/register", request).await?;

        match response {
            RegisterResponse::WithTokens {
                access_token,
                refresh_token,
                user,
            } => {
                self.tokens()
                    .set_tokens(&access_token, refresh_token.as_deref())?;
                Ok(user)
            }
            RegisterResponse::User(user) => Ok(user),
        }
    }

    pub async fn current_user(&self) -> Result<User> {
        self.http.get("/auth/me").await
    }

    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse> {
        self.http
            .post("/auth/verify-email", &serde_json::json!({ "token": token }))
            .await
    }

    pub async fn resend_verification(&self, email: &str) -> Result<MessageResponse> {
        self.http
            .post(
                "/auth/resend-verification",
                &serde_json::json!({ "email": email }),
            )
            .await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse> {
        self.http
            .post("/auth/forgot-password", &serde_json::json!({ "email": email }))
            .await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<MessageResponse> {
        self.http
            .post(
                "/auth/reset-password",
                &serde_json::json!({ "token": token, "new_password": new_password }),
            )
            .await
    }

    // ─── Two-Factor Management ───────────────────────────────────────────────

    pub async fn setup_two_factor(&self) -> Result<TwoFactorSetup> {
        self.http.post_empty("/auth/2fa/setup").await
    }

    pub async fn enable_two_factor(&self, code: &str) -> Result<MessageResponse> {
        self.http
            .post("/auth/2fa/enable", &TwoFactorCodeRequest { code })
            .await
    }

    pub async fn disable_two_factor(&self, code: &str) -> Result<MessageResponse> {
        self.http
            .post("/auth/2fa/disable", &TwoFactorCodeRequest { code })
            .await
    }
}

/// Perform one refresh call and release the in-flight slot it occupies.
async fn run_refresh(
    http: HttpClient,
    inflight: Arc<Mutex<Option<InFlight>>>,
    id: u64,
) -> Result<String> {
    let outcome = request_refresh(&http).await;

    let mut slot = inflight.lock().await;
    if slot.as_ref().is_some_and(|current| current.id == id) {
        *slot = None;
    }

    match &outcome {
        Ok(_) => tracing::info!(refresh_id = id, "Access token refreshed"),
        Err(e) => tracing::warn!(refresh_id = id, error = %e, "Token refresh failed"),
    }
    outcome
}

async fn request_refresh(http: &HttpClient) -> Result<String> {
    let epoch = http.session_epoch();
    let refresh_token = http
        .tokens()
        .refresh_token()
        .ok_or(ApiError::MissingRefreshToken)?;

    let response: TokenResponse = http
        .post(
            "/auth/refresh",
            &RefreshRequest {
                refresh_token: &refresh_token,
            },
        )
        .await?;

    // A logout or 401 while the call was on the wire wins over its result.
    if !http.store_tokens_if_current(
        epoch,
        &response.access_token,
        response.refresh_token.as_deref(),
    )? {
        tracing::info!("Session ended during refresh, discarding new tokens");
        return Err(ApiError::MissingRefreshToken);
    }
    Ok(response.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_two_factor_aliases() {
        let a: LoginResponse =
            serde_json::from_value(json!({ "requires_2fa": true, "temp_token": "t" })).unwrap();
        let b: LoginResponse =
            serde_json::from_value(json!({ "two_factor_required": true, "temp_token": "t" }))
                .unwrap();
        assert!(a.requires_two_factor);
        assert!(b.requires_two_factor);
    }

    #[test]
    fn test_register_response_shapes() {
        let user = json!({ "id": 1, "email": "a@club.org", "role": "atleta" });

        let bare: RegisterResponse = serde_json::from_value(user.clone()).unwrap();
        assert!(matches!(bare, RegisterResponse::User(_)));

        let with_tokens: RegisterResponse =
            serde_json::from_value(json!({ "access_token": "x", "user": user })).unwrap();
        assert!(matches!(with_tokens, RegisterResponse::WithTokens { .. }));
    }
}
