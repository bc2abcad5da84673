use axum::extract::State;
use tracing::warn;

use crate::app::AppState;
use crate::database::models::StockUpdate;
use crate::error::{ApiError, ErrorBody};
use crate::middleware::{ApiResponse, ApiResult, JsonBody, MessageResponse};

use super::payload::parse_stock_update;

/// PUT /portfolio - change quantity and buy price of an existing stock.
///
/// An id that matches no row still answers 200; the miss is only logged.
#[utoipa::path(
    put,
    path = "/portfolio",
    tag = "portfolio",
    request_body = StockUpdate,
    responses(
        (status = 200, description = "Stock updated successfully", body = MessageResponse),
        (status = 400, description = "Missing required fields", body = ErrorBody),
        (status = 500, description = "Failed to update stock", body = ErrorBody)
    )
)]
pub async fn update_stock(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<MessageResponse> {
    let update = parse_stock_update(&body)?;

    let affected = state
        .portfolio
        .update(&update)
        .await
        .map_err(|e| ApiError::storage("Failed to update stock", e))?;
    if affected == 0 {
        warn!(id = update.id, "Update matched no stock");
    }

    Ok(ApiResponse::success(MessageResponse::new("Stock updated successfully")))
}
