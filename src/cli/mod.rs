pub mod commands;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "portfolio-api")]
#[command(about = "Portfolio API - REST service for stock holdings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve(commands::serve::ServeArgs),

    #[command(about = "Create the database schema and exit")]
    InitDb(DatabaseArgs),

    #[command(about = "Print the OpenAPI document")]
    Openapi(commands::openapi::OpenapiArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct DatabaseArgs {
    #[arg(long, help = "Database URL, e.g. sqlite://portfolio.db (overrides DATABASE_URL)")]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.database_url {
            config.database.url = url.clone();
        }
    }
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    match cli.command {
        None => commands::serve::handle(Default::default(), config).await,
        Some(Commands::Serve(args)) => commands::serve::handle(args, config).await,
        Some(Commands::InitDb(args)) => commands::init_db::handle(args, config).await,
        Some(Commands::Openapi(args)) => commands::openapi::handle(args, config),
    }
}
