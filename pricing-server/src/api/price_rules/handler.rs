//! Price Rule API Handlers

use axum::extract::{Path, State};
use serde::Serialize;
use shared::models::PriceRule;

use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /api/price-rules - 获取所有价格规则
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<PriceRule>>> {
    let rules = state.rules.load_rules().await?;
    Ok(ApiResponse::success(rules.to_vec()))
}

/// GET /api/price-rules/:id - 获取单个价格规则
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<PriceRule>> {
    let rule = state
        .rules
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::rule_not_found(&id))?;
    Ok(ApiResponse::success(rule))
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub count: usize,
}

/// POST /api/price-rules/reload - 重新读取规则文件
pub async fn reload(State(state): State<ServerState>) -> AppResult<ApiResponse<ReloadResponse>> {
    let count = state.rules.reload().await?;
    Ok(ApiResponse::success_with_message(
        "Price rules reloaded",
        ReloadResponse { count },
    ))
}
