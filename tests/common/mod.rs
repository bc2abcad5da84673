#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub const BIN: &str = env!("CARGO_BIN_EXE_portfolio-api");

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Each test binary gets its own server process with a private in-memory database
        let mut cmd = Command::new(BIN);
        cmd.env("HOST", "127.0.0.1")
            .env("PORT", port.to_string())
            .env("DATABASE_URL", "sqlite::memory:")
            .env("API_BASE_PATH", "/api")
            .env("API_ENABLE_REQUEST_LOGGING", "false")
            .env("RUST_LOG", "warn")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn portfolio_url(&self) -> String {
        format!("{}/api/portfolio", self.base_url)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Tests in one binary share a server, so they tell their rows apart by ticker
pub async fn find_by_ticker(
    client: &reqwest::Client,
    server: &TestServer,
    ticker: &str,
) -> Result<Option<serde_json::Value>> {
    let list = client
        .get(server.portfolio_url())
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let found = list
        .as_array()
        .context("portfolio list should be an array")?
        .iter()
        .find(|s| s["ticker"] == ticker)
        .cloned();
    Ok(found)
}
