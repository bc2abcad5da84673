//! SQL DDL for the portfolio table (SQLite).

/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, never reused after a delete
/// - `buy_price` REAL, exposed as `buyPrice` on the wire
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS portfolio (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    ticker TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    buy_price REAL NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_portfolio_ticker ON portfolio(ticker);
"#;
