// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use club_admin::app::HistoryNavigator;
use club_admin::auth::MemoryTokenStore;
use club_admin::config::Config;
use club_admin::AdminClient;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use wiremock::MockServer;

/// Handles a test needs to inspect side effects.
#[allow(dead_code)]
pub struct TestApp {
    pub server: MockServer,
    pub client: AdminClient,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<HistoryNavigator>,
}

/// Claims as the backend issues them.
#[derive(Serialize)]
struct TestClaims<'a> {
    sub: &'a str,
    exp: i64,
    iat: i64,
    role: &'a str,
}

#[allow(dead_code)]
pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Create a signed access token expiring `ttl_secs` from now (negative = expired).
#[allow(dead_code)]
pub fn create_test_jwt(role: &str, ttl_secs: i64) -> String {
    let now = now_secs();
    let claims = TestClaims {
        sub: "42",
        exp: now + ttl_secs,
        iat: now,
        role,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"backend_signing_key_not_known_here"),
    )
    .expect("Failed to create JWT")
}

/// Start a mock backend and a client pointed at it with an empty session.
#[allow(dead_code)]
pub async fn create_test_app() -> TestApp {
    create_test_app_with_tokens(None, None).await
}

#[allow(dead_code)]
pub async fn create_test_app_with_tokens(
    access_token: Option<String>,
    refresh_token: Option<String>,
) -> TestApp {
    let server = MockServer::start().await;
    let tokens = Arc::new(MemoryTokenStore::with_tokens(access_token, refresh_token));
    let navigator = Arc::new(HistoryNavigator::new());

    let config = Config {
        api_base_url: server.uri(),
        ..Config::default()
    };
    let client = AdminClient::new(config, tokens.clone(), navigator.clone());

    TestApp {
        server,
        client,
        tokens,
        navigator,
    }
}
