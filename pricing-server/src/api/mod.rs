//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`price_rules`] - 价格规则查询 / 重新加载
//! - [`pricing`] - 价格计算、条件评估
//! - [`quotes`] - 租车报价

pub mod health;
pub mod price_rules;
pub mod pricing;
pub mod quotes;

use axum::Router;
use http::{HeaderName, HeaderValue, Uri};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::AppError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(price_rules::router())
        .merge(pricing::router())
        .merge(quotes::router())
        .fallback(route_not_found)
}

/// Unknown paths answer with the standard error envelope
async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build the fully configured application with middleware and state
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
        // Request ID - generated outermost, echoed on the response
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), XRequestId))
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .with_state(state)
}
