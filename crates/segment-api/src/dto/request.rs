//! 请求 DTO 定义

use serde::Deserialize;
use serde_json::Value;

/// 保存命名规则请求
#[derive(Debug, Deserialize)]
pub struct CreateRuleRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 候选规则；保持未定型，交给引擎做完整校验
    #[serde(default)]
    pub rule: Value,
}
