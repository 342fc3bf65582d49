// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP wrapper behavior: bearer injection, 401 handling, body decoding.

use club_admin::app::{HistoryNavigator, Route};
use club_admin::auth::{MemoryTokenStore, TokenStore};
use club_admin::error::ApiError;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::{create_test_app, create_test_app_with_tokens, create_test_jwt};

#[tokio::test]
async fn test_bearer_token_attached_when_present() {
    let token = create_test_jwt("entrenador", 3600);
    let app = create_test_app_with_tokens(Some(token.clone()), None).await;

    Mock::given(method("GET"))
        .and(path("/atleta/perfil"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&app.server)
        .await;

    let body: Value = app.client.http.get("/atleta/perfil").await.unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/competencia/pruebas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&app.server)
        .await;

    let _: Value = app.client.http.get("/competencia/pruebas").await.unwrap();

    let requests = app.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_401_clears_tokens_and_redirects_to_login() {
    let app = create_test_app_with_tokens(
        Some(create_test_jwt("atleta", 3600)),
        Some("refresh".to_string()),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/atleta/historial"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "detail": "Token revocado" })),
        )
        .mount(&app.server)
        .await;

    let err = app
        .client
        .http
        .get::<Value>("/atleta/historial")
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Token revocado"));
    assert!(app.tokens.access_token().is_none());
    assert!(app.tokens.refresh_token().is_none());
    assert_eq!(app.navigator.history(), vec![Route::Login]);
}

#[tokio::test]
async fn test_other_errors_leave_session_untouched() {
    let token = create_test_jwt("atleta", 3600);
    let app = create_test_app_with_tokens(Some(token.clone()), None).await;

    Mock::given(method("POST"))
        .and(path("/competencia/resultados"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&app.server)
        .await;

    let err = app
        .client
        .http
        .post::<Value, _>("/competencia/resultados", &json!({}))
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, payload } => {
            assert_eq!(status, 403);
            assert_eq!(payload, json!("Forbidden"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(app.tokens.access_token(), Some(token));
    assert!(app.navigator.history().is_empty());
}

#[tokio::test]
async fn test_verbs_send_json_bodies() {
    let app = create_test_app().await;

    for verb in ["POST", "PUT", "PATCH"] {
        Mock::given(method(verb))
            .and(path("/thing"))
            .and(body_json(json!({ "verb": verb })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "echo": verb })))
            .expect(1)
            .mount(&app.server)
            .await;
    }

    let http = &app.client.http;
    let post: Value = http.post("/thing", &json!({ "verb": "POST" })).await.unwrap();
    let put: Value = http.put("/thing", &json!({ "verb": "PUT" })).await.unwrap();
    let patch: Value = http.patch("/thing", &json!({ "verb": "PATCH" })).await.unwrap();

    assert_eq!(post["echo"], "POST");
    assert_eq!(put["echo"], "PUT");
    assert_eq!(patch["echo"], "PATCH");
}

#[tokio::test]
async fn test_empty_body_decodes_as_null() {
    let app = create_test_app().await;

    Mock::given(method("DELETE"))
        .and(path("/entrenador/horarios/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.server)
        .await;

    app.client
        .http
        .delete::<()>("/entrenador/horarios/9")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_query_parameters_skip_none() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/entrenador/horarios"))
        .and(query_param("entrenamiento_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&app.server)
        .await;

    let horarios = app
        .client
        .entrenamientos
        .list_horarios(Some(5))
        .await
        .unwrap();
    assert!(horarios.is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let app = create_test_app().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&app.server)
        .await;

    assert!(matches!(
        app.client.session.current_user().await,
        Err(ApiError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let config = club_admin::config::Config {
        api_base_url: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    };
    let client = club_admin::AdminClient::new(
        config,
        Arc::new(MemoryTokenStore::new()),
        Arc::new(HistoryNavigator::new()),
    );

    assert!(matches!(
        client.http.get::<Value>("/auth/me").await,
        Err(ApiError::Network(_))
    ));
}
