use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::app::AppState;
use crate::error::ApiError;

/// GET / - service name, version and where things live
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let base = &state.base_path;

    Json(json!({
        "name": "Portfolio API",
        "version": version,
        "description": "API to manage portfolio stocks",
        "endpoints": {
            "portfolio": format!("{}/portfolio[/:id]", base),
            "health": "/health",
            "docs": "/api-docs",
            "openapi": ["/api-docs/openapi.json", "/api-docs/openapi.yaml"],
        }
    }))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.database.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "error": "database unavailable"
                })),
            )
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// Fallback for known paths hit with a method they do not serve
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Method not allowed")
}
