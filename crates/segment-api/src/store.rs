//! 已保存规则的内存存储
//!
//! 进程内存储，保持插入顺序；通过 Arc 克隆在处理器间共享。
//! 进程重启后数据不保留。

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use rule_engine::Rule;

/// 已保存的命名规则
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rule: Rule,
    pub created_at: DateTime<Utc>,
}

/// 规则存储
#[derive(Clone, Default)]
pub struct SavedRuleStore {
    rules: Arc<RwLock<Vec<SavedRule>>>,
}

impl SavedRuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    /// 保存规则
    pub fn insert(&self, rule: SavedRule) {
        info!(rule_id = %rule.id, rule_name = %rule.name, "规则已保存");
        self.rules.write().push(rule);
    }

    /// 按插入顺序列出全部规则
    pub fn list(&self) -> Vec<SavedRule> {
        self.rules.read().clone()
    }

    /// 按 id 删除；不存在时返回 None
    pub fn delete(&self, id: &str) -> Option<SavedRule> {
        let mut rules = self.rules.write();
        let Some(index) = rules.iter().position(|r| r.id == id) else {
            warn!(rule_id = %id, "删除不存在的规则");
            return None;
        };

        let removed = rules.remove(index);
        info!(rule_id = %removed.id, "规则已删除");
        Some(removed)
    }
}
