use sqlx::SqlitePool;
use tracing::debug;

use crate::database::manager::DatabaseError;
use crate::database::models::{NewStock, Stock, StockUpdate};

/// CRUD access to the `portfolio` table. Every method is a single statement.
#[derive(Clone)]
pub struct PortfolioStore {
    pool: SqlitePool,
}

impl PortfolioStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All holdings in primary-key order. An empty table yields an empty vec.
    pub async fn list_all(&self) -> Result<Vec<Stock>, DatabaseError> {
        let stocks = sqlx::query_as::<_, Stock>(
            "SELECT id, name, ticker, quantity, buy_price FROM portfolio ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stocks)
    }

    /// Insert a new holding. Returns the id assigned by the database.
    pub async fn insert(&self, stock: &NewStock) -> Result<i64, DatabaseError> {
        let id = sqlx::query(
            "INSERT INTO portfolio (name, ticker, quantity, buy_price) VALUES (?, ?, ?, ?)",
        )
        .bind(&stock.name)
        .bind(&stock.ticker)
        .bind(stock.quantity)
        .bind(stock.buy_price)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        debug!(id, ticker = %stock.ticker, "Inserted stock");
        Ok(id)
    }

    /// Update quantity and buy price by id. Returns rows affected (0 when no row matched).
    pub async fn update(&self, stock: &StockUpdate) -> Result<u64, DatabaseError> {
        let affected = sqlx::query("UPDATE portfolio SET quantity = ?, buy_price = ? WHERE id = ?")
            .bind(stock.quantity)
            .bind(stock.buy_price)
            .bind(stock.id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        debug!(id = stock.id, affected, "Updated stock");
        Ok(affected)
    }

    /// Delete by id. Returns rows affected (0 when no row matched).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, DatabaseError> {
        let affected = sqlx::query("DELETE FROM portfolio WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        debug!(id, affected, "Deleted stock");
        Ok(affected)
    }
}
