//! Pricing API 模块 - 价格计算和条件评估

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pricing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/calculate", post(handler::calculate))
        .route("/evaluate", post(handler::evaluate))
}
