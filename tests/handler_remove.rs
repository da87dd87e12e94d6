mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_remove_success() {
    let (server, storage) = common::create_test_server();

    server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex" }))
        .await
        .assert_status_ok();

    let response = server.delete("/url").json(&json!({ "alias": "ex" })).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "OK", "alias": "ex" }));
    assert_eq!(storage.len(), 0);
}

#[tokio::test]
async fn test_remove_via_post_route() {
    let (server, storage) = common::create_test_server();

    server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex" }))
        .await
        .assert_status_ok();

    let response = server.post("/url/remove").json(&json!({ "alias": "ex" })).await;

    response.assert_json(&json!({ "status": "OK", "alias": "ex" }));
    assert_eq!(storage.len(), 0);
}

#[tokio::test]
async fn test_remove_unknown_alias() {
    let (server, _storage) = common::create_test_server();

    let response = server.delete("/url").json(&json!({ "alias": "nope" })).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "Error", "error": "failed to delete url" }));
}

#[tokio::test]
async fn test_remove_requires_alias() {
    let (server, storage) = common::create_test_server();

    let response = server.delete("/url").json(&json!({})).await;

    response.assert_json(&json!({ "status": "Error", "error": "invalid request" }));
    assert_eq!(storage.calls(), 0);
}

#[tokio::test]
async fn test_remove_then_redirect_fails() {
    let (server, _storage) = common::create_test_server();

    server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex" }))
        .await
        .assert_status_ok();
    server
        .delete("/url")
        .json(&json!({ "alias": "ex" }))
        .await
        .assert_status_ok();

    let response = server.get("/ex").await;

    assert_ne!(response.status_code(), StatusCode::FOUND);
    response.assert_json(&json!({ "status": "Error", "error": "internal error" }));
}

#[tokio::test]
async fn test_remove_without_content_type() {
    let (server, storage) = common::create_test_server();

    server
        .post("/url")
        .json(&json!({ "url": "https://example.com", "alias": "ex" }))
        .await
        .assert_status_ok();

    let response = server
        .delete("/url")
        .bytes(Bytes::from_static(br#"{"alias":"ex"}"#))
        .await;

    response.assert_json(&json!({ "status": "OK", "alias": "ex" }));
    assert_eq!(storage.len(), 0);
}
