//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 服务状态 + 已加载规则数 |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "environment": "development", "rules_loaded": 15 }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    environment: String,
    rules_loaded: usize,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let (status, rules_loaded) = match state.rules.load_rules().await {
        Ok(rules) => ("ok", rules.len()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read price rules");
            ("degraded", 0)
        }
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        rules_loaded,
    })
}
