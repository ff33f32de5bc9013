#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::config::{LogFormat, ServerConfig};
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_store::ItemStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        default_page_size: 20,
        seed_demo_items: false,
        seed_tenant_id: "defaultTenant".to_string(),
        log_format: LogFormat::Text,
    }
}

/// Shared state over an empty store, so a test can build several routers
/// that see the same items.
pub fn test_state() -> AppState {
    AppState::new(ItemStore::new(), test_config())
}

/// Full application router (same middleware stack as `main.rs`) over `state`.
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

/// Shared state over a store holding the three demo items under `defaultTenant`.
pub fn seeded_state() -> AppState {
    AppState::new(ItemStore::seeded("defaultTenant"), test_config())
}

/// Router over a freshly seeded store.
pub fn build_seeded_app() -> Router {
    build_test_app(seeded_state())
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body.to_string())).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body.to_string())).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
