//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射，并组装完整应用。

use axum::{
    http::{Method, Uri},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{error::ApiError, handlers, middleware::auth_middleware, state::AppState};

/// 公开路由（无需认证）
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// 规则评估路由
fn evaluate_routes() -> Router<AppState> {
    Router::new().route("/evaluate", post(handlers::evaluate::evaluate_rule))
}

/// 命名规则管理路由
fn rule_routes() -> Router<AppState> {
    Router::new()
        .route("/rules", get(handlers::rule::list_rules))
        .route("/rules", post(handlers::rule::create_rule))
        .route("/rules/{id}", delete(handlers::rule::delete_rule))
}

/// 构建完整的 API 路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(evaluate_routes())
        .merge(rule_routes())
}

/// 兜底 404
async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("{} {}", method, uri.path()))
}

/// 组装完整应用（路由 + 认证 + 请求追踪）
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
