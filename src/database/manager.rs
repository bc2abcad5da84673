use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::portfolio::PortfolioStore;
use crate::database::schema::SQLITE_INIT;

/// Errors from the database layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Owns the connection pool for the lifetime of the server.
///
/// Opened once in `main`, handed to the router state, and closed after
/// graceful shutdown. Cloning is cheap and shares the same pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool described by `config` and make sure the schema exists
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if !config.url.starts_with("sqlite:") {
            return Err(DatabaseError::InvalidDatabaseUrl(config.url.clone()));
        }

        let mut options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|_| DatabaseError::InvalidDatabaseUrl(config.url.clone()))?
            .create_if_missing(true);
        if !config.enable_query_logging {
            options = options.disable_statement_logging();
        }

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(config.connection_timeout));

        // Every connection to an in-memory database opens its own empty database,
        // so pin a single connection and never let the pool recycle it.
        if Self::is_in_memory(&config.url) {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            pool_options = pool_options.max_connections(config.max_connections);
        }

        let pool = pool_options.connect_with(options).await?;
        let database = Self { pool };
        database.init_schema().await?;

        info!(url = %config.url, "Database pool ready");
        Ok(database)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Store for the portfolio table, sharing this pool
    pub fn portfolio(&self) -> PortfolioStore {
        PortfolioStore::new(self.pool.clone())
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), DatabaseError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the pool (e.g., on shutdown). Later queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Closed database pool");
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn detects_in_memory_urls() {
        assert!(Database::is_in_memory("sqlite::memory:"));
        assert!(Database::is_in_memory("sqlite://file:portfolio?mode=memory&cache=shared"));
        assert!(!Database::is_in_memory("sqlite://portfolio.db"));
    }

    #[tokio::test]
    async fn connects_and_pings_in_memory_database() {
        let mut config = AppConfig::development().database;
        config.url = "sqlite::memory:".to_string();

        let db = Database::connect(&config).await.unwrap();
        db.health_check().await.unwrap();

        db.close().await;
        assert!(db.health_check().await.is_err());
    }

    #[tokio::test]
    async fn rejects_malformed_url() {
        let mut config = AppConfig::development().database;
        config.url = "postgres://localhost/portfolio".to_string();

        let err = Database::connect(&config).await.err().unwrap();
        assert!(matches!(err, DatabaseError::InvalidDatabaseUrl(_)));
    }
}
