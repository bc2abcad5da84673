use anyhow::Context;
use clap::Args;
use tokio::net::TcpListener;
use tracing::info;

use crate::app::{app, AppState};
use crate::cli::DatabaseArgs;
use crate::config::AppConfig;
use crate::database::Database;

#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    #[arg(long, help = "Interface to bind (overrides HOST)")]
    pub host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides PORT)")]
    pub port: Option<u16>,

    #[command(flatten)]
    pub database: DatabaseArgs,
}

impl ServeArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        self.database.apply(config);
    }
}

pub async fn handle(args: ServeArgs, mut config: AppConfig) -> anyhow::Result<()> {
    args.apply(&mut config);
    info!("Starting Portfolio API in {:?} mode", config.environment);

    let database = Database::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;

    let state = AppState::new(database.clone(), config.server.base_path.clone());
    let router = app(state, &config);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!("Portfolio API listening on http://{}", bind_addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // Release the pool whether or not the server exited cleanly
    database.close().await;
    served.context("server error")?;

    info!("Portfolio API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
