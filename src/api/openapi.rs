use axum::{http::header, routing::get, Router};
use tracing::warn;
use utoipa::openapi::{OpenApi as OpenApiDoc, Server};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::database::models::{NewStock, Stock, StockUpdate};
use crate::error::ErrorBody;
use crate::middleware::MessageResponse;

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const OPENAPI_YAML_PATH: &str = "/api-docs/openapi.yaml";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "API to manage portfolio stocks"
    ),
    paths(
        crate::handlers::portfolio::list::list_stocks,
        crate::handlers::portfolio::create::add_stock,
        crate::handlers::portfolio::update::update_stock,
        crate::handlers::portfolio::delete::delete_stock,
    ),
    components(schemas(Stock, NewStock, StockUpdate, MessageResponse, ErrorBody)),
    tags((name = "portfolio", description = "Stock holdings in the portfolio"))
)]
pub struct ApiDoc;

/// The OpenAPI document with its single server entry pointing at `base_path`
pub fn openapi(base_path: &str) -> OpenApiDoc {
    let mut doc = ApiDoc::openapi();
    let url = if base_path.is_empty() { "/" } else { base_path };
    doc.servers = Some(vec![Server::new(url)]);
    doc
}

pub fn to_json(doc: &OpenApiDoc) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

pub fn to_yaml(doc: &OpenApiDoc) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(doc)
}

/// Swagger UI at `/api-docs` plus the raw document as JSON and YAML
pub fn docs_router(base_path: &str) -> Router {
    let doc = openapi(base_path);

    let router = match to_yaml(&doc) {
        Ok(yaml) => Router::new().route(
            OPENAPI_YAML_PATH,
            get(move || {
                let yaml = yaml.clone();
                async move { ([(header::CONTENT_TYPE, "application/yaml")], yaml) }
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Failed to render OpenAPI document as YAML");
            Router::new()
        }
    };

    router.merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, doc))
}
