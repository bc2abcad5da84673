use axum::extract::State;
use tracing::info;

use crate::app::AppState;
use crate::database::models::NewStock;
use crate::error::{ApiError, ErrorBody};
use crate::middleware::{ApiResponse, ApiResult, JsonBody, MessageResponse};

use super::payload::parse_new_stock;

/// POST /portfolio - add a stock
#[utoipa::path(
    post,
    path = "/portfolio",
    tag = "portfolio",
    request_body = NewStock,
    responses(
        (status = 201, description = "Stock added successfully", body = MessageResponse),
        (status = 400, description = "Missing required fields", body = ErrorBody),
        (status = 500, description = "Failed to add stock", body = ErrorBody)
    )
)]
pub async fn add_stock(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<MessageResponse> {
    let stock = parse_new_stock(&body)?;

    info!(
        name = %stock.name,
        ticker = %stock.ticker,
        quantity = stock.quantity,
        buy_price = stock.buy_price,
        "Attempting to add stock"
    );
    let id = state
        .portfolio
        .insert(&stock)
        .await
        .map_err(|e| ApiError::storage("Failed to add stock", e))?;
    info!(id, ticker = %stock.ticker, "Stock added");

    Ok(ApiResponse::created(MessageResponse::new("Stock added successfully")))
}
