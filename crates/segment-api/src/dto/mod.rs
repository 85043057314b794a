//! 请求 / 响应 DTO 定义

pub mod request;
pub mod response;

pub use request::CreateRuleRequest;
pub use response::{
    ApiResponse, DeletedRuleData, EvaluateData, HealthData, HealthStatus, RuleListData,
    SavedRuleData,
};
