//! Router-level tests that never reach the database.

mod common;

use axum::http::StatusCode;
use common::{
    body_bytes, body_json, build_test_app, build_test_app_configured, get, post_json,
    post_multipart, unreachable_pool, RecordingNotifier,
};
use serde_json::json;

#[tokio::test]
async fn health_check_reports_version() {
    let app = build_test_app(unreachable_pool());
    let response = get(&app.router, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn readiness_fails_without_database() {
    let app = build_test_app(unreachable_pool());
    let response = get(&app.router, "/api/ready").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(response).await["status"], "unavailable");
}

#[tokio::test]
async fn openapi_document_lists_endpoints() {
    let app = build_test_app(unreachable_pool());
    let response = get(&app.router, "/api-docs/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    for path in ["/api/aulas", "/api/aulas/{id}", "/api/reservas", "/api/liberar", "/api/reportes", "/api/historicos"] {
        assert!(doc["paths"][path].is_object(), "missing {}", path);
    }
}

#[tokio::test]
async fn malformed_json_is_a_500_with_error() {
    let app = build_test_app(unreachable_pool());
    let response = post_json(&app.router, "/api/aulas", json!({ "Modulo": "B" })).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("Nombre"));
}

#[tokio::test]
async fn bad_reservation_dates_are_rejected() {
    let app = build_test_app(unreachable_pool());
    let response = post_json(
        &app.router,
        "/api/reservas",
        json!({ "Aula_ID": 1, "Usuario": "ana", "Inicio": "mañana", "Fin": "2024-05-06T10:00" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"].as_str().unwrap().contains("invalid date/time"));
}

#[tokio::test]
async fn report_without_room_is_rejected() {
    let app = build_test_app(unreachable_pool());
    let response = post_multipart(
        &app.router,
        "/api/reportes",
        &[("Descripcion", None, b"Proyector sin imagen".as_slice())],
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["error"].as_str().unwrap().contains("Aula_ID"));
}

#[tokio::test]
async fn serves_client_and_uploaded_files() {
    let app = build_test_app(unreachable_pool());
    std::fs::write(app.uploads.path().join("1-2-pizarra.jpg"), b"jpeg bytes").unwrap();

    let response = get(&app.router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<h1>Aulas</h1>");

    let response = get(&app.router, "/uploads/1-2-pizarra.jpg").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"jpeg bytes");

    let response = get(&app.router, "/uploads/missing.jpg").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_upload_is_a_500_with_error() {
    let app = build_test_app_configured(unreachable_pool(), RecordingNotifier::default(), |config| {
        config.uploads.max_body_bytes = 1024;
    });
    let photo = vec![0u8; 8 * 1024];

    let response = post_multipart(
        &app.router,
        "/api/reportes",
        &[
            ("Aula_ID", None, b"1".as_slice()),
            ("Descripcion", None, b"Foto demasiado grande".as_slice()),
            ("foto", Some("grande.jpg"), photo.as_slice()),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().starts_with("Upload error"));
    assert_eq!(std::fs::read_dir(app.uploads.path()).unwrap().count(), 0);
}
