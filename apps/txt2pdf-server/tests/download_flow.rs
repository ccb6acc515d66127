//! HTTP tests for downloads, the landing page and routing

mod common;

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use axum_test::TestServer;

use common::{body_bytes, files_in, test_app};
use txt2pdf_server::cleanup::CleanupReason;

#[tokio::test]
async fn test_download_missing_is_404() {
    let app = test_app(Duration::from_secs(60)).await;
    let server = TestServer::new(app.app.clone()).unwrap();

    let response = server.get("/download/missing.pdf").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(app.state.cleanup().stats().scheduled, 0);
}

#[tokio::test]
async fn test_download_within_grace_window_then_expired() {
    let app = test_app(Duration::from_millis(300)).await;

    let upload = app.upload("report.txt", b"quarterly report").await;
    assert_eq!(upload.status(), StatusCode::FOUND);

    let first = app.get("/download/report.pdf").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(
        first.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    assert_eq!(
        first.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=\"report.pdf\""
    );
    let on_disk = std::fs::read(app.outgoing().join("report.pdf")).unwrap();
    let body = body_bytes(first).await;
    assert!(body.starts_with(b"%PDF-"));
    assert_eq!(body, on_disk);

    // Still inside the grace window
    let second = app.get("/download/report.pdf").await;
    assert_eq!(second.status(), StatusCode::OK);

    let outgoing = app.outgoing().join("report.pdf");
    let pending = app.state.cleanup().pending_for(&outgoing);
    assert_eq!(pending.len(), 2);
    assert!(pending.iter().all(|d| d.reason == CleanupReason::Downloaded));

    tokio::time::sleep(Duration::from_millis(900)).await;

    let expired = app.get("/download/report.pdf").await;
    assert_eq!(expired.status(), StatusCode::NOT_FOUND);
    assert!(files_in(&app.outgoing()).is_empty());
    assert!(files_in(&app.incoming()).is_empty());
    assert_eq!(app.state.cleanup().pending_count(), 0);
}

#[tokio::test]
async fn test_unreadable_download_is_500_without_cleanup() {
    let app = test_app(Duration::from_secs(60)).await;
    std::fs::create_dir(app.outgoing().join("sub.pdf")).unwrap();

    let response = app.get("/download/sub.pdf").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body["error"], "io_error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("File storage error"));

    assert_eq!(app.state.cleanup().stats().scheduled, 0);
    assert!(app.outgoing().join("sub.pdf").is_dir());
}

#[tokio::test]
async fn test_download_accepts_any_method() {
    let app = test_app(Duration::from_secs(60)).await;
    app.upload("any.txt", b"method agnostic").await;

    let request = Request::builder()
        .method("POST")
        .uri("/download/any.pdf")
        .body(Body::empty())
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_download_traversal_is_rejected() {
    let app = test_app(Duration::from_secs(60)).await;
    std::fs::write(app.dir.path().join("secret.pdf"), b"secret").unwrap();

    let response = app.get("/download/..%2Fsecret.pdf").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.dir.path().join("secret.pdf").exists());
}

#[tokio::test]
async fn test_home_serves_landing_page() {
    let app = test_app(Duration::from_secs(60)).await;
    let server = TestServer::new(app.app.clone()).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("action=\"/upload\""));
    assert!(page.contains("name=\"file\""));

    server.post("/").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_home_prefers_template_on_disk() {
    let app = test_app(Duration::from_secs(60)).await;
    std::fs::write(
        &app.state.config().web.index_template,
        "<h1>custom landing</h1>",
    )
    .unwrap();

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"<h1>custom landing</h1>");
}

#[tokio::test]
async fn test_static_and_unknown_routes() {
    let app = test_app(Duration::from_secs(60)).await;
    let server = TestServer::new(app.app.clone()).unwrap();

    let css = server.get("/static/app.css").await;
    css.assert_status_ok();
    assert_eq!(css.text(), "body { margin: 0; }");

    server.get("/nope").await.assert_status(StatusCode::NOT_FOUND);
    server.get("/download/").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_cleanup_stats() {
    let app = test_app(Duration::from_secs(60)).await;
    app.upload("h.txt", b"health").await;
    let server = TestServer::new(app.app.clone()).unwrap();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "txt2pdf-server");
    assert_eq!(body["cleanup"]["scheduled"], 1);
    assert_eq!(body["cleanup"]["pending"], 1);
}
