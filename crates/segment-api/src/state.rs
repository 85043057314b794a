//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态。

use std::sync::Arc;

use rule_engine::RuleEngine;

use crate::store::SavedRuleStore;

/// Axum 应用共享状态
///
/// 规则引擎（注册表 + 只读数据集）与规则存储通过 Arc 在 handler 间共享。
#[derive(Clone)]
pub struct AppState {
    /// 规则引擎
    pub engine: Arc<RuleEngine>,
    /// 已保存规则存储
    pub rules: SavedRuleStore,
    /// 静态认证 Token
    pub auth_token: Arc<String>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(engine: RuleEngine, auth_token: impl Into<String>) -> Self {
        Self {
            engine: Arc::new(engine),
            rules: SavedRuleStore::new(),
            auth_token: Arc::new(auth_token.into()),
        }
    }
}
