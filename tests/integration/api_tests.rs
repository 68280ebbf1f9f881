// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{image_site, spawn_app};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health_and_version() {
    let app = spawn_app();

    let health = app.server.get("/health").await;
    health.assert_status_ok();
    assert_eq!(health.text(), "OK");

    let version = app.server.get("/version").await;
    assert_eq!(version.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_metrics_empty_before_any_job() {
    let app = spawn_app();

    let response = app.server.get("/metrics").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({}));
}

#[tokio::test]
async fn test_submit_job_then_query_metrics() {
    let site = image_site().await;
    let app = spawn_app();
    let urls = vec![
        format!("{}/gallery", site.uri()),
        format!("{}/blog", site.uri()),
    ];

    let response = app
        .server
        .post("/")
        .json(&json!({ "jobname": "holiday", "urls": urls }))
        .await;

    response.assert_status_ok();
    assert!(response.text().starts_with("Done job: holiday in "));

    // Tag images are named by their index within the page
    let job_dir = app.output_dir.path().join("holiday");
    assert!(job_dir.join("0.png").exists());
    assert!(job_dir.join("two.png").exists());
    assert!(!job_dir.join("broken.gif").exists());

    let metrics: Value = app.server.get("/metrics").await.json();
    let entry = &metrics["holiday"];
    assert_eq!(metrics.as_object().unwrap().len(), 1);
    assert_eq!(entry["filesCount"], 3);
    assert_eq!(entry["urls"], json!(urls));
    assert!(entry["time"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_duplicate_job_name_is_rejected() {
    let site = image_site().await;
    let app = spawn_app();
    let body = json!({ "jobname": "dup", "urls": [format!("{}/gallery", site.uri())] });

    app.server.post("/").json(&body).await.assert_status_ok();
    let second = app.server.post("/").json(&body).await;

    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    assert_eq!(second.text(), "JOB EXISTS ALREADY, CHANGE JOB NAME");

    let metrics: Value = app.server.get("/metrics").await.json();
    assert_eq!(metrics["dup"]["filesCount"], 2);
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let app = spawn_app();

    let response = app.server.post("/").text("{not json").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
    assert_eq!(app.server.get("/metrics").await.json::<Value>(), json!({}));
}

#[tokio::test]
async fn test_path_like_job_name_is_rejected() {
    let app = spawn_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "jobname": "../outside", "urls": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(!app.output_dir.path().join("..").join("outside").exists());
}

#[tokio::test]
async fn test_multibyte_job_name_over_byte_limit_is_rejected() {
    let app = spawn_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "jobname": "猫".repeat(100), "urls": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.server.get("/metrics").await.json::<Value>(), json!({}));
}

#[tokio::test]
async fn test_job_without_urls_completes() {
    let app = spawn_app();

    let response = app
        .server
        .post("/")
        .json(&json!({ "jobname": "empty", "urls": [] }))
        .await;

    response.assert_status_ok();
    assert!(app.output_dir.path().join("empty").is_dir());

    let metrics: Value = app.server.get("/metrics").await.json();
    assert_eq!(metrics["empty"]["filesCount"], 0);
    assert_eq!(metrics["empty"]["urls"], json!([]));
}
