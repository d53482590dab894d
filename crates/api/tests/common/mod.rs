#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use projecthub_api::config::ServerConfig;
use projecthub_api::router::build_app_router;
use projecthub_api::state::AppState;
use projecthub_db::store::InMemoryProjectStore;
use projecthub_genai::{GenAiError, TextGenerator};

/// Text generator double that records prompts and returns a canned reply.
pub struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingGenerator {
    pub fn replying() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(GenAiError::Api {
                status: 429,
                body: "quota exhausted for key sk-secret".to_string(),
            });
        }
        Ok("Generated summary".to_string())
    }
}

/// Router plus handles on its collaborators for assertions.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryProjectStore>,
    pub generator: Arc<RecordingGenerator>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Test configuration: defaults, no environment lookups.
pub fn test_config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).unwrap()
}

/// Build the full application router over an empty in-memory store.
pub fn build_test_app() -> TestApp {
    build_test_app_with(RecordingGenerator::replying())
}

pub fn build_test_app_with(generator: RecordingGenerator) -> TestApp {
    let store = Arc::new(InMemoryProjectStore::new());
    let generator = Arc::new(generator);

    let state = AppState::new(store.clone(), generator.clone());
    let router = build_app_router(state, &test_config());

    TestApp {
        router,
        store,
        generator,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body.to_string()).await
}

pub async fn json_request(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project through the API and return its JSON.
pub async fn create_project(app: &TestApp, body: serde_json::Value) -> serde_json::Value {
    let response = post_json(app.router(), "/api/projects", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
