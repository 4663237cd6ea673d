//! Simulated login and logout.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use chrono_royale_integration_tests::TestApp;

#[tokio::test]
async fn test_login_then_logout() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/login",
            &[("email", "ana@correo.es"), ("password", "secreto"), ("return_to", "/colecciones")],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/colecciones?notice=login"));

    let body = app.get("/").await.body;
    assert!(body.contains("Sesión: ana@correo.es (clic para gestionar)"));

    let response = app.post_form("/auth/logout", &[("return_to", "/")]).await;
    assert_eq!(response.location(), Some("/?notice=logout"));

    let body = app.get("/").await.body;
    assert!(!body.contains("ana@correo.es"));
    assert!(body.contains(r#"title="Login""#));
}

#[tokio::test]
async fn test_login_requires_password() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/login",
            &[("email", "ana@correo.es"), ("password", "  "), ("return_to", "/")],
        )
        .await;
    assert_eq!(response.location(), Some("/?notice=login-incomplete"));

    let page = app.get("/?notice=login-incomplete").await.body;
    assert!(page.contains("Completa email/usuario y contraseña."));
    assert!(!page.contains("ana@correo.es"));
}

#[tokio::test]
async fn test_login_return_to_stays_local() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/login",
            &[("email", "ana"), ("password", "x"), ("return_to", "https://evil.example/")],
        )
        .await;
    assert_eq!(response.location(), Some("/?notice=login"));
}

#[tokio::test]
async fn test_previous_notice_is_replaced() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/login",
            &[("email", "ana"), ("password", "x"), ("return_to", "/contacto?notice=message-sent")],
        )
        .await;
    assert_eq!(response.location(), Some("/contacto?notice=login"));
}

#[tokio::test]
async fn test_return_to_fragment_is_dropped() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/login",
            &[("email", "ana"), ("password", "x"), ("return_to", "/colecciones#grid")],
        )
        .await;
    assert_eq!(response.location(), Some("/colecciones?notice=login"));
}
