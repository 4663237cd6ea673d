//! Catalog filter flows.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use chrono_royale_integration_tests::TestApp;

#[tokio::test]
async fn test_apply_filter_narrows_grid() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/filtros", &[("brand", "Rolex"), ("min", ""), ("max", "15000")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/colecciones?notice=filters-applied"));

    let body = app.get("/colecciones").await.body;
    assert!(body.contains("1 producto(s)"));
    assert!(body.contains("Submariner Date"));
    assert!(!body.contains("GMT-Master II"));
    assert!(body.contains("Hasta 15000 €"));
}

#[tokio::test]
async fn test_filter_refills_form() {
    let mut app = TestApp::new();
    app.post_form("/filtros", &[("brand", "Richard Mille"), ("min", "250000"), ("max", "")])
        .await;

    let body = app.get("/").await.body;
    assert!(body.contains(r#"value="250000""#));
}

#[tokio::test]
async fn test_filter_without_matches_shows_empty_state() {
    let mut app = TestApp::new();
    app.post_form("/filtros", &[("brand", "Rolex"), ("min", "1000000"), ("max", "")])
        .await;

    let body = app.get("/colecciones").await.body;
    assert!(body.contains("0 producto(s)"));
    assert!(body.contains(r#"id="productsEmpty""#));
}

#[tokio::test]
async fn test_non_numeric_bounds_are_ignored() {
    let mut app = TestApp::new();
    app.post_form("/filtros", &[("brand", ""), ("min", "mucho"), ("max", " ")])
        .await;

    let body = app.get("/colecciones").await.body;
    assert!(body.contains("16 producto(s)"));
}

#[tokio::test]
async fn test_quick_filter_and_clear() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/filtros/rapido", &[("brand", "Patek Philippe")])
        .await;
    assert_eq!(response.location(), Some("/colecciones"));

    let body = app.get("/colecciones").await.body;
    assert!(body.contains("7 producto(s)"));
    assert!(!body.contains("Cosmograph Daytona"));

    let response = app.post_form("/filtros/limpiar", &[]).await;
    assert_eq!(response.location(), Some("/colecciones?notice=filters-cleared"));

    let body = app.get("/colecciones").await.body;
    assert!(body.contains("16 producto(s)"));
}

#[tokio::test]
async fn test_filters_are_per_visitor() {
    let mut app = TestApp::new();
    app.post_form("/filtros/rapido", &[("brand", "Rolex")]).await;

    let mut stranger = app.stranger();
    let body = stranger.get("/colecciones").await.body;
    assert!(body.contains("16 producto(s)"));
}

#[tokio::test]
async fn test_new_collection_ignores_filters() {
    let mut app = TestApp::new();
    app.post_form("/filtros/rapido", &[("brand", "Rolex")]).await;

    let body = app.get("/nueva-coleccion").await.body;
    assert!(body.contains("3 producto(s)"));
}
