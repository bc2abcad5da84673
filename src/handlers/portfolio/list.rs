use axum::extract::State;

use crate::app::AppState;
use crate::database::models::Stock;
use crate::error::{ApiError, ErrorBody};
use crate::middleware::{ApiResponse, ApiResult};

/// GET /portfolio - every stock in the portfolio
#[utoipa::path(
    get,
    path = "/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "A list of stocks in the portfolio", body = [Stock]),
        (status = 500, description = "Failed to fetch portfolio", body = ErrorBody)
    )
)]
pub async fn list_stocks(State(state): State<AppState>) -> ApiResult<Vec<Stock>> {
    let stocks = state
        .portfolio
        .list_all()
        .await
        .map_err(|e| ApiError::storage("Failed to fetch portfolio", e))?;

    Ok(ApiResponse::success(stocks))
}
