mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use campus::router::init_router;
use campus::state::AppState;
use campus_config::CorsConfig;
use common::{FakeDirectory, get_json, setup_test_app, test_jwt_config};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_needs_no_token() {
    let app = setup_test_app(FakeDirectory::new());

    let (status, body) = get_json(app, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = setup_test_app(FakeDirectory::new());

    let (status, body) = get_json(app, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/health",
        "/api/permissions/me",
        "/api/permissions/roles/{role}",
        "/api/departments/{department_id}/permissions/me",
        "/api/navigation",
    ] {
        assert!(paths.contains_key(path), "missing path {}", path);
    }
    assert!(body["components"]["securitySchemes"]["bearer_auth"].is_object());
    assert!(body["components"]["schemas"]["CapabilitySet"].is_object());
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = setup_test_app(FakeDirectory::new());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_test_app(FakeDirectory::new());

    let (status, _) = get_json(app, "/api/grades", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wildcard_origin_does_not_break_startup() {
    let state = AppState::new(
        FakeDirectory::new(),
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["*".to_string(), "http://portal.test".to_string()],
        },
    );
    let app = init_router(state);

    let request = Request::builder()
        .uri("/health")
        .header("origin", "http://portal.test")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://portal.test"
    );
}
