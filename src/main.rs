use clap::Parser;
use portfolio_api::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize configuration (this loads the config singleton)
    let config = portfolio_api::config::config().clone();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.api.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    portfolio_api::cli::run(cli, config).await
}
