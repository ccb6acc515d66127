//! Shared helpers for HTTP tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

use txt2pdf_server::pdf::Converter;
use txt2pdf_server::{router, AppState, Config};

const BOUNDARY: &str = "txt2pdf-test-boundary";

/// Router plus the state and temp directory behind it
pub struct TestApp {
    pub dir: TempDir,
    pub state: AppState,
    pub app: Router,
}

impl TestApp {
    pub fn incoming(&self) -> PathBuf {
        self.dir.path().join("uploads")
    }

    pub fn outgoing(&self) -> PathBuf {
        self.dir.path().join("converted")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().oneshot(request).await.unwrap()
    }

    pub async fn upload(&self, file_name: &str, content: &[u8]) -> Response<Body> {
        self.send(multipart_request("file", file_name, content)).await
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }
}

fn test_config(dir: &TempDir, grace_period: Duration) -> Config {
    let mut config = Config::default();
    config.storage.incoming_dir = dir.path().join("uploads");
    config.storage.outgoing_dir = dir.path().join("converted");
    config.cleanup.grace_period = grace_period;
    config.web.index_template = dir.path().join("no-template.html");
    config.web.static_dir = dir.path().join("static");
    config
}

async fn build(dir: TempDir, state: AppState) -> TestApp {
    state.storage().prepare().await.unwrap();
    std::fs::create_dir_all(dir.path().join("static")).unwrap();
    std::fs::write(dir.path().join("static/app.css"), "body { margin: 0; }").unwrap();

    let app = router(state.clone());
    TestApp { dir, state, app }
}

/// App with the real converter and the given grace window
pub async fn test_app(grace_period: Duration) -> TestApp {
    let dir = TempDir::new().unwrap();
    let state = AppState::new(test_config(&dir, grace_period));
    build(dir, state).await
}

/// App with a substitute converter
pub async fn test_app_with_converter(converter: Arc<dyn Converter>) -> TestApp {
    let dir = TempDir::new().unwrap();
    let state = AppState::with_converter(test_config(&dir, Duration::from_secs(60)), converter);
    build(dir, state).await
}

/// Hand-built multipart/form-data body with a single file field
pub fn multipart_request(field: &str, file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: text/plain\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("missing Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Files currently present in a directory, sorted
pub fn files_in(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Whitespace-separated words of every page in a PDF
pub fn pdf_words(pdf: &[u8]) -> Vec<String> {
    let doc = lopdf::Document::load_mem(pdf).unwrap();
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    doc.extract_text(&pages)
        .unwrap()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}
