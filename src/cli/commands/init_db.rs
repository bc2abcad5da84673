use anyhow::Context;

use crate::cli::DatabaseArgs;
use crate::config::AppConfig;
use crate::database::Database;

/// Connecting applies the schema, so open and close the pool
pub async fn handle(args: DatabaseArgs, mut config: AppConfig) -> anyhow::Result<()> {
    args.apply(&mut config);

    let database = Database::connect(&config.database)
        .await
        .with_context(|| format!("failed to initialize database {}", config.database.url))?;
    database.close().await;

    println!("Database schema ready at {}", config.database.url);
    Ok(())
}
