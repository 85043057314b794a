//! 规则校验器
//!
//! 对未定型的候选规则做递归结构校验。错误是累加的：彼此独立的缺陷
//! 会同时出现在结果列表里，嵌套位置通过 `groups[i].` 前缀定位。

use serde_json::{Map, Value};

use crate::models::{Field, Logic, Plan};
use crate::operators::{value_text, Operator, OperatorRegistry};

/// 规则校验器
pub struct RuleValidator<'a> {
    registry: &'a OperatorRegistry,
}

impl<'a> RuleValidator<'a> {
    pub fn new(registry: &'a OperatorRegistry) -> Self {
        Self { registry }
    }

    /// 校验候选规则，返回人类可读的错误列表；空列表表示通过
    pub fn validate(&self, candidate: &Value) -> Vec<String> {
        let Some(node) = candidate.as_object() else {
            return vec!["规则必须是非空的 JSON 对象".to_string()];
        };

        let mut errors = Vec::new();
        self.validate_node(node, "", &mut errors);
        errors
    }

    /// 递归校验一个规则节点；path 为错误前缀（根节点为空串）
    fn validate_node(&self, node: &Map<String, Value>, path: &str, errors: &mut Vec<String>) {
        // logic 可选；存在时必须为 AND/OR（大小写不敏感），违规不终止后续校验
        if let Some(logic) = node.get("logic") {
            if Logic::parse(&value_text(logic)).is_none() {
                errors.push(format!("{path}logic 必须为 \"AND\" 或 \"OR\""));
            }
        }

        let conditions = match node.get("conditions") {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(_) => {
                errors.push(format!("{path}conditions 必须是数组"));
                None
            }
        };

        let groups = match node.get("groups") {
            None => None,
            Some(Value::Array(items)) => Some(items),
            Some(_) => {
                errors.push(format!("{path}groups 必须是数组"));
                None
            }
        };

        let has_conditions = conditions.is_some_and(|items| !items.is_empty());
        let has_groups = groups.is_some_and(|items| !items.is_empty());

        // 空节点：不再下钻，已收集的同级错误保留
        if !has_conditions && !has_groups {
            errors.push(format!("{path}conditions 与 groups 至少要有一个非空"));
            return;
        }

        if let Some(items) = conditions {
            for (i, item) in items.iter().enumerate() {
                self.validate_condition(item, &format!("{path}conditions[{i}]"), errors);
            }
        }

        if let Some(items) = groups {
            for (i, item) in items.iter().enumerate() {
                let child_path = format!("{path}groups[{i}]");
                match item.as_object() {
                    Some(child) => self.validate_node(child, &format!("{child_path}."), errors),
                    None => errors.push(format!("{child_path}: 必须是 JSON 对象")),
                }
            }
        }
    }

    /// 校验单个叶子条件；各项缺陷彼此独立、全部上报
    fn validate_condition(&self, item: &Value, path: &str, errors: &mut Vec<String>) {
        let Some(cond) = item.as_object() else {
            errors.push(format!("{path}: 必须是 JSON 对象"));
            return;
        };

        let field = match cond.get("field") {
            None => {
                errors.push(format!("{path}: 缺少 field"));
                None
            }
            Some(value) => {
                let name = value_text(value);
                let parsed = Field::parse(&name);
                if parsed.is_none() {
                    errors.push(format!("{path}: 未知字段 \"{name}\""));
                }
                parsed
            }
        };

        let operator = match cond.get("operator") {
            None => {
                errors.push(format!("{path}: 缺少 operator"));
                None
            }
            Some(value) => {
                let name = value_text(value);
                let parsed = Operator::parse(&name);
                if parsed.is_none() {
                    errors.push(format!("{path}: 未知操作符 \"{name}\""));
                }
                parsed
            }
        };

        match cond.get("value") {
            // 只检查键的存在性：空字符串和 0 都是合法取值
            None => errors.push(format!("{path}: 缺少 value")),
            Some(value) => {
                if field == Some(Field::Plan) {
                    let text = value_text(value);
                    if Plan::parse(&text).is_none() {
                        errors.push(format!(
                            "{path}: 字段 \"plan\" 的取值 \"{text}\" 无效，允许: {}",
                            Plan::ALL.map(|p| p.as_str()).join(", ")
                        ));
                    }
                }
            }
        }

        // 字段与操作符各自合法时，再校验二者的配对关系
        if let (Some(field), Some(operator)) = (field, operator) {
            match self.registry.allowed_for(field) {
                Some(allowed) if !allowed.contains(&operator) => {
                    errors.push(format!(
                        "{path}: 操作符 \"{operator}\" 不适用于字段 \"{field}\"，允许: {}",
                        allowed
                            .iter()
                            .map(|op| op.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ));
                }
                Some(_) => {}
                // 闭集策略：没有操作符条目的字段不可用于筛选
                None => errors.push(format!("{path}: 字段 \"{field}\" 不支持筛选")),
            }
        }
    }
}
