mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK, "unexpected status: {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok", "unexpected body: {}", body);
    assert_eq!(body["database"], "ok", "unexpected body: {}", body);
    Ok(())
}

#[tokio::test]
async fn swagger_document_is_served() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api-docs/openapi.json", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let doc = res.json::<serde_json::Value>().await?;
    assert_eq!(doc["info"]["title"], "Portfolio API");
    assert_eq!(doc["servers"][0]["url"], "/api");
    assert!(doc["paths"]["/portfolio"]["post"].is_object(), "missing POST /portfolio: {}", doc);
    Ok(())
}
