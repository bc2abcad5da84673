//! Persistence for the portfolio.
//!
//! - `manager.rs`: pool lifecycle (connect, schema, health, close)
//! - `portfolio.rs`: CRUD statements against the `portfolio` table
//! - `models/`: row and request structs
//! - `schema.rs`: SQL DDL

pub mod manager;
pub mod models;
pub mod portfolio;
pub mod schema;

pub use manager::{Database, DatabaseError};
pub use models::{NewStock, Stock, StockUpdate};
pub use portfolio::PortfolioStore;
