use axum::extract::{Path, State};
use tracing::warn;

use crate::app::AppState;
use crate::error::{ApiError, ErrorBody};
use crate::middleware::{ApiResponse, ApiResult, MessageResponse};

use super::payload::parse_stock_id;

/// DELETE /portfolio/{id} - remove a stock. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/portfolio/{id}",
    tag = "portfolio",
    params(
        ("id" = i64, Path, description = "The ID of the stock to delete")
    ),
    responses(
        (status = 200, description = "Stock deleted successfully", body = MessageResponse),
        (status = 400, description = "Stock ID is required", body = ErrorBody),
        (status = 500, description = "Failed to delete stock", body = ErrorBody)
    )
)]
pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = parse_stock_id(&id)?;

    let affected = state
        .portfolio
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::storage("Failed to delete stock", e))?;
    if affected == 0 {
        warn!(id, "Delete matched no stock");
    }

    Ok(ApiResponse::success(MessageResponse::new("Stock deleted successfully")))
}

/// DELETE /portfolio - no id in the path
pub async fn delete_without_id() -> ApiError {
    ApiError::bad_request("Stock ID is required")
}
