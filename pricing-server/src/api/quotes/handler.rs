//! Quote API Handlers

use axum::{Json, extract::State};
use shared::pricing::{RentalQuote, RentalQuoteRequest};

use crate::core::ServerState;
use crate::quote::quote_rental;
use crate::utils::{ApiResponse, AppResult};

/// POST /api/quotes - 计算租车报价
pub async fn create(
    State(state): State<ServerState>,
    Json(req): Json<RentalQuoteRequest>,
) -> AppResult<ApiResponse<RentalQuote>> {
    let rules = state.rules.load_rules().await?;
    let today = chrono::Local::now().date_naive();

    let quote = quote_rental(&req, &rules, &state.catalog, today, state.quote_options())?;
    Ok(ApiResponse::success(quote))
}
