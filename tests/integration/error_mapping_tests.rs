use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::Router;
use pos_backend::utils::error::AppError;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn bad_request() -> AppError {
    AppError::bad_request("invalid request body")
}

async fn unauthorized() -> AppError {
    AppError::unauthorized("token is missing or malformed")
}

async fn forbidden() -> AppError {
    AppError::forbidden("insufficient role")
}

async fn not_found() -> AppError {
    AppError::not_found("user")
}

async fn validation() -> AppError {
    AppError::validation(json!([{"field": "price", "rule": "required"}]))
}

async fn internal() -> AppError {
    AppError::internal("pool exhausted")
}

fn error_router() -> Router {
    Router::new()
        .route("/bad-request", get(bad_request))
        .route("/unauthorized", get(unauthorized))
        .route("/forbidden", get(forbidden))
        .route("/not-found", get(not_found))
        .route("/validation", get(validation))
        .route("/internal", get(internal))
}

async fn fetch(path: &str) -> (StatusCode, Value) {
    let response = error_router()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_bad_request_maps_to_400() {
    let (status, body) = fetch("/bad-request").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("BAD_REQUEST"));
    assert_eq!(body["error"]["message"], json!("invalid request body"));
}

#[tokio::test]
async fn test_unauthorized_maps_to_401() {
    let (status, body) = fetch("/unauthorized").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], json!("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_forbidden_maps_to_403() {
    let (status, body) = fetch("/forbidden").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], json!("FORBIDDEN_ACCESS"));
}

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let (status, body) = fetch("/not-found").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
    assert_eq!(body["error"]["message"], json!("user not found"));
}

#[tokio::test]
async fn test_validation_maps_to_400() {
    let (status, body) = fetch("/validation").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_internal_maps_to_500() {
    let (status, body) = fetch("/internal").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!("INTERNAL_ERROR"));
    // Primary message stays generic, the cause lives in details.
    assert_eq!(body["error"]["message"], json!("An unexpected error occurred"));
}

#[tokio::test]
async fn test_every_failure_shape_shares_the_envelope() {
    for path in [
        "/bad-request",
        "/unauthorized",
        "/forbidden",
        "/not-found",
        "/validation",
        "/internal",
    ] {
        let (_, body) = fetch(path).await;
        assert_eq!(body["success"], json!(false), "path {}", path);
        assert!(body["error"]["code"].is_string(), "path {}", path);
        assert!(body["timestamp"].is_string(), "path {}", path);
        assert!(body.get("data").is_none(), "path {}", path);
    }
}
