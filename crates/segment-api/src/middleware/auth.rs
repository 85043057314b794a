//! Bearer Token 认证中间件
//!
//! 校验 Authorization 头中的静态 Bearer Token。

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::state::AppState;

/// 认证中间件
///
/// /health 为公开路由；其余路由要求 `Authorization: Bearer <token>`。
/// 缺失或格式错误的头返回 401，Token 不匹配返回 403。
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path();

    // 公开路由列表（不需要认证）
    let public_paths = ["/health"];
    if public_paths.contains(&path) {
        return next.run(request).await;
    }

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok());

    let Some(header) = auth_header else {
        return reject(StatusCode::UNAUTHORIZED, "缺少 Authorization 头");
    };

    let mut parts = header.splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_none() {
        return reject(
            StatusCode::UNAUTHORIZED,
            "Authorization 头格式错误，应为: Bearer <token>",
        );
    }

    if token != Some(state.auth_token.as_str()) {
        return reject(StatusCode::FORBIDDEN, "Token 无效或已过期");
    }

    next.run(request).await
}

/// 生成认证失败响应
fn reject(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": false,
        "error": message,
    });

    (status, axum::Json(body)).into_response()
}
