//! 响应 DTO 定义
//!
//! 统一响应信封与各端点的负载结构。

use chrono::{DateTime, Utc};
use serde::Serialize;

use rule_engine::{Contact, Rule};

use crate::store::SavedRule;

/// API 成功响应信封
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// 创建成功响应（附带消息）
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

/// 规则评估响应负载
#[derive(Debug, Serialize)]
pub struct EvaluateData {
    pub rule: Rule,
    pub matched_count: usize,
    pub contacts: Vec<Contact>,
}

/// 规则列表响应负载
#[derive(Debug, Serialize)]
pub struct RuleListData {
    pub count: usize,
    pub rules: Vec<SavedRule>,
}

/// 规则保存响应负载
#[derive(Debug, Serialize)]
pub struct SavedRuleData {
    pub saved: SavedRule,
}

/// 规则删除响应负载
#[derive(Debug, Serialize)]
pub struct DeletedRuleData {
    pub deleted: SavedRule,
}

/// 健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Degraded => "degraded",
        }
    }
}

/// 健康检查响应负载
#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: HealthStatus,
    pub contacts_loaded: usize,
    pub sample_contact: Option<Contact>,
    pub timestamp: DateTime<Utc>,
}
