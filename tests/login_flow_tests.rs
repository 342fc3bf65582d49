// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login view and route guard behavior.

use club_admin::app::{LoginView, NoticeLevel, Route};
use club_admin::auth::TokenStore;
use club_admin::error::FALLBACK_MESSAGE;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::{create_test_app, create_test_app_with_tokens, create_test_jwt};

// ─── LoginController ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success_navigates_to_dashboard() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": create_test_jwt("entrenador", 3600),
            "refresh_token": "refresh"
        })))
        .mount(&app.server)
        .await;

    let view = app
        .client
        .login_controller()
        .submit("coach@club.org", "secret")
        .await;

    assert_eq!(view, LoginView::Dashboard);
    assert_eq!(app.navigator.current(), Some(Route::Dashboard));
    assert_eq!(Route::Dashboard.path(), "/dashboard");
}

#[tokio::test]
async fn test_inactive_user_opens_verification_modal() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "detail": "Usuario inactivo, verifique su correo" })),
        )
        .mount(&app.server)
        .await;

    let view = app
        .client
        .login_controller()
        .submit("new@club.org", "secret")
        .await;

    assert_eq!(
        view,
        LoginView::VerificationRequired {
            email: "new@club.org".to_string()
        }
    );
    assert!(app.navigator.history().is_empty());
}

#[tokio::test]
async fn test_bad_credentials_show_server_message() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Credenciales incorrectas" })),
        )
        .mount(&app.server)
        .await;

    match app.client.login_controller().submit("a@club.org", "x").await {
        LoginView::Failed(notice) => {
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(notice.message, "Credenciales incorrectas");
        }
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_message_uses_fallback() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.server)
        .await;

    match app.client.login_controller().submit("a@club.org", "x").await {
        LoginView::Failed(notice) => assert_eq!(notice.message, FALLBACK_MESSAGE),
        other => panic!("unexpected view: {:?}", other),
    }
}

#[tokio::test]
async fn test_two_factor_flow() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "requires_2fa": true, "temp_token": "tmp" })),
        )
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/2fa/verify"))
        .and(body_json(json!({ "temp_token": "tmp", "code": "654321" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": create_test_jwt("atleta", 3600) })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let controller = app.client.login_controller();
    let view = controller.submit("a@club.org", "pw").await;
    let LoginView::TwoFactor { temp_token } = view else {
        panic!("expected 2FA step, got {:?}", view);
    };
    assert_eq!(app.navigator.current(), Some(Route::TwoFactor));

    let view = controller.submit_two_factor(&temp_token, "654321").await;
    assert_eq!(view, LoginView::Dashboard);
    assert_eq!(
        app.navigator.history(),
        vec![Route::TwoFactor, Route::Dashboard]
    );
    assert!(app.tokens.access_token().is_some());
}

#[tokio::test]
async fn test_resend_verification_notice() {
    let app = create_test_app().await;

    Mock::given(method("POST"))
        .and(path("/auth/resend-verification"))
        .and(body_json(json!({ "email": "new@club.org" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Correo enviado" })))
        .expect(1)
        .mount(&app.server)
        .await;

    let notice = app
        .client
        .login_controller()
        .resend_verification("new@club.org")
        .await;
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.message, "Correo enviado");
}

// ─── RouteGuard ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_guard_public_route_passes() {
    let app = create_test_app().await;
    assert_eq!(app.client.route_guard().resolve(Route::Login).await, Route::Login);
}

#[tokio::test]
async fn test_guard_redirects_without_session() {
    let app = create_test_app().await;

    assert_eq!(
        app.client.route_guard().resolve(Route::Dashboard).await,
        Route::Login
    );
    assert_eq!(app.navigator.current(), Some(Route::Login));
}

#[tokio::test]
async fn test_guard_enforces_roles() {
    let app = create_test_app_with_tokens(Some(create_test_jwt("atleta", 3600)), None).await;
    let guard = app.client.route_guard();

    assert_eq!(guard.resolve(Route::Dashboard).await, Route::Dashboard);
    assert_eq!(guard.resolve(Route::Competencias).await, Route::Competencias);
    assert_eq!(guard.resolve(Route::Usuarios).await, Route::Unauthorized);
    assert_eq!(guard.resolve(Route::Atletas).await, Route::Unauthorized);
}

#[tokio::test]
async fn test_guard_refreshes_expired_session() {
    let app = create_test_app_with_tokens(
        Some(create_test_jwt("administrador", -30)),
        Some("refresh".to_string()),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": create_test_jwt("administrador", 3600) })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    assert_eq!(
        app.client.route_guard().resolve(Route::Usuarios).await,
        Route::Usuarios
    );
    assert!(app.navigator.history().is_empty());
}
