mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use link_checker::api::handlers::{check_links_handler, generate_report_handler};
use serde_json::json;

fn test_server(available: &[&str]) -> TestServer {
    let (state, _repo) = common::create_test_state(available);
    let app = Router::new()
        .route("/api/check-links", post(check_links_handler))
        .route("/api/generate-report", post(generate_report_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_generate_report_for_stored_batch() {
    let server = test_server(&["google.com"]);

    let check = server
        .post("/api/check-links")
        .json(&json!({ "links": ["google.com", "invalid.test"] }))
        .await;
    let batch_id = check.json::<serde_json::Value>()["links_num"].clone();

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "links_list": [batch_id] }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/pdf");
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"links_report.pdf\""
    );
    assert!(response.as_bytes().starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_generate_report_unknown_batch_is_title_only() {
    let server = test_server(&[]);

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "links_list": [999] }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "application/pdf");
    assert!(!response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_generate_report_empty_list() {
    let server = test_server(&[]);

    let response = server
        .post("/api/generate-report")
        .json(&json!({ "links_list": [] }))
        .await;

    response.assert_status_ok();
    assert!(response.as_bytes().starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_generate_report_is_deterministic() {
    let server = test_server(&["google.com"]);

    server
        .post("/api/check-links")
        .json(&json!({ "links": ["google.com"] }))
        .await
        .assert_status_ok();

    let first = server
        .post("/api/generate-report")
        .json(&json!({ "links_list": [1] }))
        .await;
    let second = server
        .post("/api/generate-report")
        .json(&json!({ "links_list": [1] }))
        .await;

    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[tokio::test]
async fn test_generate_report_invalid_json() {
    let server = test_server(&[]);

    let response = server
        .post("/api/generate-report")
        .bytes("not json".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
}
