//! API 错误类型定义
//!
//! 所有处理器共用的错误类型，统一映射为响应信封
//! `{ success: false, error, details? }`。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use rule_engine::RuleError;

/// API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 候选规则未通过校验；携带完整错误列表
    #[error("规则定义无效")]
    InvalidRule(Vec<String>),

    /// 请求体校验失败（如缺少 name）
    #[error("请求校验失败")]
    Validation(Vec<String>),

    #[error("未授权: {0}")]
    Unauthorized(String),

    #[error("禁止访问: {0}")]
    Forbidden(String),

    #[error("规则不存在: {0}")]
    RuleNotFound(String),

    #[error("路由不存在: {0}")]
    RouteNotFound(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRule(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::RuleNotFound(_) | Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 附加的细节列表（仅校验类错误携带）
    pub fn details(&self) -> Option<&[String]> {
        match self {
            Self::InvalidRule(details) | Self::Validation(details) => Some(details),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, "内部错误");
                "服务内部错误，请稍后重试".to_string()
            }
            other => other.to_string(),
        };

        let mut body = json!({
            "success": false,
            "error": message,
        });
        if let Some(details) = self.details() {
            if !details.is_empty() {
                body["details"] = json!(details);
            }
        }

        (status, axum::Json(body)).into_response()
    }
}

impl From<RuleError> for ApiError {
    fn from(err: RuleError) -> Self {
        match err {
            RuleError::Validation(errors) => Self::InvalidRule(errors),
            RuleError::Json(e) => Self::Internal(format!("规则解析失败: {e}")),
        }
    }
}

/// 服务层 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
