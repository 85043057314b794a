//! 联系人筛选规则引擎
//!
//! 提供布尔筛选规则的两项核心能力：
//! - 未定型候选规则的递归结构校验（AND/OR 条件组）
//! - 已校验规则对只读联系人数据集的有序匹配
//!
//! 操作符注册表在启动时构造一次，以只读引用传入校验与评估流程。

pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod operators;
pub mod validator;

pub use error::{Result, RuleError};
pub use evaluator::RuleMatcher;
pub use models::{Condition, Contact, Field, Logic, Plan, Rule};
pub use operators::{Operator, OperatorRegistry};
pub use validator::RuleValidator;

use serde_json::Value;
use tracing::debug;

/// 规则引擎门面
///
/// 持有操作符注册表与只读数据集，对外暴露两个核心操作：
/// 结构校验与匹配。两者均为无副作用的纯计算，可被任意并发调用。
pub struct RuleEngine {
    registry: OperatorRegistry,
    contacts: Vec<Contact>,
}

impl RuleEngine {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            registry: OperatorRegistry::new(),
            contacts,
        }
    }

    /// 使用内置数据集构造
    pub fn with_builtin_dataset() -> Self {
        Self::new(dataset::builtin_contacts())
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// 校验候选规则，返回全部错误；空列表表示通过
    pub fn validate(&self, candidate: &Value) -> Vec<String> {
        let errors = RuleValidator::new(&self.registry).validate(candidate);
        debug!(error_count = errors.len(), "规则校验完成");
        errors
    }

    /// 校验并解析为类型化规则
    pub fn parse_rule(&self, candidate: Value) -> Result<Rule> {
        let errors = self.validate(&candidate);
        if !errors.is_empty() {
            return Err(RuleError::Validation(errors));
        }
        Rule::from_value(candidate)
    }

    /// 将已校验的规则应用到数据集，按原始顺序返回匹配的联系人
    pub fn match_contacts(&self, rule: &Rule) -> Vec<Contact> {
        RuleMatcher::new(&self.registry).match_contacts(rule, &self.contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_engine_validate_and_match() {
        let engine = RuleEngine::with_builtin_dataset();
        let candidate = json!({
            "logic": "AND",
            "conditions": [
                {"field": "country", "operator": "country-is", "value": "US"}
            ]
        });

        assert!(engine.validate(&candidate).is_empty());

        let rule = engine.parse_rule(candidate).unwrap();
        let matched = engine.match_contacts(&rule);
        assert_eq!(matched.len(), 5);
    }

    #[test]
    fn test_engine_parse_rule_carries_validation_errors() {
        let engine = RuleEngine::with_builtin_dataset();
        let candidate = json!({
            "conditions": [
                {"field": "email", "operator": "country-is", "value": "US"}
            ]
        });

        match engine.parse_rule(candidate) {
            Err(RuleError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("country-is"));
            }
            other => panic!("期望 Validation 错误，实际: {other:?}"),
        }
    }
}
