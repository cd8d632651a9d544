use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;
use wiremock::MockServer;

use super::common::*;

#[tokio::test]
async fn test_generate_commit_success_body() {
    let server = MockServer::start().await;
    mount_completion(&server, 200, json!({"choices": [{"text": " fix bug in parser "}]})).await;

    let router = test_router(test_config(&server), Duration::from_secs(5));
    let response = post_json(router, "/generate_commit", r#"{"diff": "+parse()"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!({"commit_message": "fix bug in parser", "model_used": DEFAULT_MODEL})
    );
}

#[tokio::test]
async fn test_empty_diff_is_exact_error_with_status_200() {
    let server = MockServer::start().await;
    forbid_completion(&server).await;

    let router = test_router(test_config(&server), Duration::from_secs(5));
    let response = post_json(router, "/generate_commit", r#"{"diff": "   "}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({"error": "No diff provided."}));
}

#[tokio::test]
async fn test_missing_diff_field_is_empty_input() {
    let server = MockServer::start().await;
    forbid_completion(&server).await;

    let router = test_router(test_config(&server), Duration::from_secs(5));
    let response = post_json(router, "/generate_commit", r#"{"model": "provider-3/gpt-5-nano"}"#).await;

    assert_eq!(response_json(response).await, json!({"error": "No diff provided."}));
}

#[tokio::test]
async fn test_upstream_rejection_body() {
    let server = MockServer::start().await;
    mount_completion(&server, 500, json!({"message": "internal"})).await;

    let router = test_router(test_config(&server), Duration::from_secs(5));
    let response = post_json(router, "/generate_commit", r#"{"diff": "+x"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["error"], "AI API request failed");
    assert_eq!(body["details"], r#"{"message":"internal"}"#);
}

#[tokio::test]
async fn test_invalid_json_gets_structured_error() {
    let server = MockServer::start().await;
    forbid_completion(&server).await;

    let router = test_router(test_config(&server), Duration::from_secs(5));
    let response = post_json(router, "/generate_commit", "{not json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid JSON body.");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_error_status_codes_when_enabled() {
    let server = MockServer::start().await;
    mount_completion(&server, 500, json!({})).await;

    let mut config = test_config(&server);
    config.server.error_status_codes = true;

    let response = post_json(
        test_router(config.clone(), Duration::from_secs(5)),
        "/generate_commit",
        r#"{"diff": ""}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        test_router(config, Duration::from_secs(5)),
        "/generate_commit",
        r#"{"diff": "+x"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_models_endpoint_lists_registry() {
    let server = MockServer::start().await;
    let router = test_router(test_config(&server), Duration::from_secs(5));

    let request = Request::builder()
        .uri("/models")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["default_model"], DEFAULT_MODEL);
    assert_eq!(body["categories"][3]["category"], "embedding");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let server = MockServer::start().await;
    let router = test_router(test_config(&server), Duration::from_secs(5));

    let request = Request::builder()
        .uri("/health")
        .header("origin", "vscode-webview://extension")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_diff_over_two_megabytes_is_relayed() {
    let server = MockServer::start().await;
    mount_completion(&server, 200, json!({"choices": [{"text": "Regenerate fixtures"}]})).await;

    let diff = format!("+{}", "x".repeat(3 * 1024 * 1024));
    let body = json!({ "diff": diff }).to_string();

    let router = test_router(test_config(&server), Duration::from_secs(30));
    let response = post_json(router, "/generate_commit", &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!({"commit_message": "Regenerate fixtures", "model_used": DEFAULT_MODEL})
    );
}

#[tokio::test]
async fn test_body_over_configured_cap_gets_json_error() {
    let server = MockServer::start().await;
    forbid_completion(&server).await;

    let mut config = test_config(&server);
    config.server.max_body_bytes = Some(1024);
    let body = json!({ "diff": "+".repeat(4096) }).to_string();

    let response = post_json(
        test_router(config.clone(), Duration::from_secs(5)),
        "/generate_commit",
        &body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json_body = response_json(response).await;
    assert_eq!(json_body["error"], "Request body rejected.");
    assert!(json_body["details"].is_string());

    config.server.error_status_codes = true;
    let response = post_json(test_router(config, Duration::from_secs(5)), "/generate_commit", &body).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response_json(response).await["error"], "Request body rejected.");
}

#[tokio::test]
async fn test_non_string_model_is_rejected_without_upstream_call() {
    let server = MockServer::start().await;
    forbid_completion(&server).await;

    let router = test_router(test_config(&server), Duration::from_secs(5));
    let response = post_json(router, "/generate_commit", r#"{"diff": "+x", "model": 123}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid JSON body.");
    assert_eq!(body["details"], "`model` must be a string, got 123");
}

#[tokio::test]
async fn test_health_reports_relay_target() {
    let server = MockServer::start().await;
    let config = test_config(&server);
    let base_url = config.upstream.base_url.clone();
    let router = test_router(config, Duration::from_secs(5));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["upstream"], base_url);
    assert_eq!(body["default_model"], DEFAULT_MODEL);
    assert_eq!(body["api_key_configured"], true);
}
