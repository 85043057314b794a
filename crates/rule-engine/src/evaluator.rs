//! 规则评估器
//!
//! 将已通过校验的规则递归应用到只读数据集，按原始顺序返回匹配子集。
//! 评估是防御性全函数：异常形态一律按「该记录不匹配」处理，扫描不中断。

use crate::models::{Condition, Contact, Logic, Rule};
use crate::operators::OperatorRegistry;

/// 规则评估器
pub struct RuleMatcher<'a> {
    registry: &'a OperatorRegistry,
}

impl<'a> RuleMatcher<'a> {
    pub fn new(registry: &'a OperatorRegistry) -> Self {
        Self { registry }
    }

    /// 对数据集做线性扫描；保持原始顺序，绝不修改数据集
    pub fn match_contacts(&self, rule: &Rule, contacts: &[Contact]) -> Vec<Contact> {
        contacts
            .iter()
            .filter(|contact| self.evaluate_rule(rule, contact))
            .cloned()
            .collect()
    }

    /// 递归评估规则节点
    ///
    /// 条件结果与子组结果按节点自身的逻辑连接符合并；
    /// 没有任何子结果的节点视为不匹配（校验后不应出现）。
    pub fn evaluate_rule(&self, rule: &Rule, contact: &Contact) -> bool {
        if rule.is_empty() {
            return false;
        }

        match rule.logic {
            // AND：全部子结果为真；OR：任一子结果为真。两者均短路。
            Logic::And => {
                rule.conditions
                    .iter()
                    .all(|cond| self.evaluate_condition(cond, contact))
                    && rule
                        .groups
                        .iter()
                        .all(|group| self.evaluate_rule(group, contact))
            }
            Logic::Or => {
                rule.conditions
                    .iter()
                    .any(|cond| self.evaluate_condition(cond, contact))
                    || rule
                        .groups
                        .iter()
                        .any(|group| self.evaluate_rule(group, contact))
            }
        }
    }

    /// 叶子条件：取出字段值后交给注册表比较
    fn evaluate_condition(&self, condition: &Condition, contact: &Contact) -> bool {
        let field_value = contact.field_value(condition.field);
        self.registry
            .apply(condition.operator, &field_value, &condition.value)
    }
}
