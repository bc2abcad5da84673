use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::app::{app, AppState};
use crate::config::AppConfig;
use crate::database::Database;

/// Development config pointed at a private in-memory database, request logging off
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.database.url = "sqlite::memory:".to_string();
    config.database.enable_query_logging = false;
    config.api.enable_request_logging = false;
    config
}

/// Fresh in-memory database with the schema applied
pub async fn memory_database() -> Database {
    Database::connect(&test_config().database)
        .await
        .expect("failed to open in-memory database")
}

/// Router over a fresh database. The database handle is returned so tests can close it.
pub async fn test_app() -> (Router, Database) {
    let config = test_config();
    let database = memory_database().await;
    let state = AppState::new(database.clone(), config.server.base_path.clone());
    (app(state, &config), database)
}

/// Drive one request through the router with an optional JSON body
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|b| b.to_string()).unwrap_or_default();
    send_raw(app, method, uri, &raw).await
}

/// Like `send` but with a raw body string. Non-JSON responses come back as `Value::String`.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if !body.is_empty() {
        request = request.header(header::CONTENT_TYPE, "application/json");
    }
    let request = request
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
