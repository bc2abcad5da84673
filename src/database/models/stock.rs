use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A single portfolio holding as stored in the `portfolio` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i64,
    pub name: String,
    pub ticker: String,
    pub quantity: i64,
    pub buy_price: f64,
}

/// Fields accepted when adding a stock; the store assigns `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewStock {
    #[schema(example = "Acme Corp")]
    pub name: String,
    #[schema(example = "ACM")]
    pub ticker: String,
    #[schema(example = 10)]
    pub quantity: i64,
    #[schema(example = 5.5)]
    pub buy_price: f64,
}

/// Fields accepted when updating a stock. Only quantity and buy price change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub id: i64,
    #[schema(example = 20)]
    pub quantity: i64,
    #[schema(example = 6.0)]
    pub buy_price: f64,
}
