use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::api;
use crate::config::AppConfig;
use crate::database::{Database, PortfolioStore};
use crate::handlers::{portfolio, system};

/// Shared router state. The pool inside `database` is owned by whoever built
/// the state and must be closed by them.
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub portfolio: PortfolioStore,
    pub base_path: String,
}

impl AppState {
    pub fn new(database: Database, base_path: impl Into<String>) -> Self {
        let portfolio = database.portfolio();
        Self {
            database,
            portfolio,
            base_path: base_path.into(),
        }
    }
}

/// Build the full router: service endpoints, the portfolio resource under
/// `server.base_path`, API docs and the global middleware from `config`.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let base_path = state.base_path.clone();

    let router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health));

    // axum refuses to nest at the root
    let router = if base_path.is_empty() {
        router.merge(portfolio_routes())
    } else {
        router.nest(&base_path, portfolio_routes())
    };

    let mut router = router.fallback(system::not_found).with_state(state);

    if config.api.enable_docs {
        router = router.merge(api::docs_router(&base_path));
    }

    router = router.layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));
    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn portfolio_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/portfolio",
            get(portfolio::list_stocks)
                .post(portfolio::add_stock)
                .put(portfolio::update_stock)
                .delete(portfolio::delete_without_id)
                .fallback(system::method_not_allowed),
        )
        // `:id` never matches an empty segment
        .route(
            "/portfolio/",
            delete(portfolio::delete_without_id).fallback(system::method_not_allowed),
        )
        .route(
            "/portfolio/:id",
            delete(portfolio::delete_stock).fallback(system::method_not_allowed),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::testing::{memory_database, send, test_config};

    use super::*;

    #[tokio::test]
    async fn mounts_resource_under_configured_base_path() {
        let mut config = test_config();
        config.server.base_path = "/v2".to_string();
        let state = AppState::new(memory_database().await, config.server.base_path.clone());
        let router = app(state, &config);

        let (status, _) = send(&router, "GET", "/v2/portfolio", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&router, "GET", "/api/portfolio", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mounts_at_root_when_base_path_is_empty() {
        let mut config = test_config();
        config.server.base_path = String::new();
        let state = AppState::new(memory_database().await, "");
        let router = app(state, &config);

        let (status, _) = send(&router, "GET", "/portfolio", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn trailing_slash_delete_asks_for_an_id() {
        let config = test_config();
        let state = AppState::new(memory_database().await, config.server.base_path.clone());
        let router = app(state, &config);

        let (status, body) = send(&router, "DELETE", "/api/portfolio/", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Stock ID is required");
    }

    #[tokio::test]
    async fn unsupported_methods_get_json_405() {
        let config = test_config();
        let state = AppState::new(memory_database().await, config.server.base_path.clone());
        let router = app(state, &config);

        for (method, uri) in [("PATCH", "/api/portfolio"), ("GET", "/api/portfolio/1")] {
            let (status, body) = send(&router, method, uri, None).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);
            assert_eq!(body["error"], "Method not allowed");
        }
    }

    #[tokio::test]
    async fn serves_openapi_documents() {
        let config = test_config();
        let state = AppState::new(memory_database().await, config.server.base_path.clone());
        let router = app(state, &config);

        let (status, doc) = send(&router, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc["info"]["title"], "Portfolio API");

        let (status, _) = crate::testing::send_raw(&router, "GET", "/api-docs/openapi.yaml", "").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn docs_can_be_disabled() {
        let mut config = test_config();
        config.api.enable_docs = false;
        let state = AppState::new(memory_database().await, config.server.base_path.clone());
        let router = app(state, &config);

        let (status, _) = send(&router, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
