//! Pricing API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::models::{BookingContext, ConditionGroup, PriceRule};
use shared::pricing::PriceCalculationResult;

use crate::core::ServerState;
use crate::pricing::{calculate_price, evaluate_condition_group};
use crate::utils::validation::validate_non_negative;
use crate::utils::{ApiResponse, AppError, AppResult};

fn default_duration() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub base_price: f64,
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default)]
    pub context: BookingContext,
    /// Explicit rule set; the loaded rules are used when absent
    #[serde(default)]
    pub rules: Option<Vec<PriceRule>>,
}

/// POST /api/pricing/calculate - 计算最终价格
pub async fn calculate(
    State(state): State<ServerState>,
    Json(req): Json<CalculateRequest>,
) -> AppResult<ApiResponse<PriceCalculationResult>> {
    validate_non_negative(req.base_price, "basePrice")?;
    validate_non_negative(req.duration, "duration")?;

    let result = match &req.rules {
        Some(rules) => calculate_price(rules, &req.context, req.base_price, req.duration)?,
        None => {
            let rules = state.rules.load_rules().await?;
            calculate_price(&rules, &req.context, req.base_price, req.duration)?
        }
    };
    Ok(ApiResponse::success(result))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    /// Parsed by the handler so grammar errors map to `ConditionInvalid`
    pub condition_logic: Value,
    #[serde(default)]
    pub context: BookingContext,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub applicable: bool,
}

/// POST /api/pricing/evaluate - 评估条件树
pub async fn evaluate(Json(req): Json<EvaluateRequest>) -> AppResult<ApiResponse<EvaluateResponse>> {
    let group: ConditionGroup = serde_json::from_value(req.condition_logic)
        .map_err(|e| AppError::invalid_condition(format!("Invalid condition logic: {}", e)))?;

    Ok(ApiResponse::success(EvaluateResponse {
        applicable: evaluate_condition_group(&group, &req.context),
    }))
}
