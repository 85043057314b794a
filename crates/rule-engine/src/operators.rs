//! 操作符注册表
//!
//! 每个操作符绑定到唯一的字段类别。注册表在启动时构造一次，
//! 以只读引用传入校验与评估流程，比较函数均为纯函数。

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

use crate::models::Field;

/// 条件操作符（kebab-case 线上名称）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    // 邮箱
    EmailContains,
    EmailNotContains,

    // 国家
    CountryIs,
    CountryIsNot,

    // 注册日期
    DateBefore,
    DateAfter,

    // 购买次数
    CountEquals,
    CountGt,
    CountLt,

    // 订阅计划
    PlanIs,
    PlanIsNot,
}

impl Operator {
    pub const ALL: [Operator; 11] = [
        Operator::EmailContains,
        Operator::EmailNotContains,
        Operator::CountryIs,
        Operator::CountryIsNot,
        Operator::DateBefore,
        Operator::DateAfter,
        Operator::CountEquals,
        Operator::CountGt,
        Operator::CountLt,
        Operator::PlanIs,
        Operator::PlanIsNot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailContains => "email-contains",
            Self::EmailNotContains => "email-not-contains",
            Self::CountryIs => "country-is",
            Self::CountryIsNot => "country-is-not",
            Self::DateBefore => "date-before",
            Self::DateAfter => "date-after",
            Self::CountEquals => "count-equals",
            Self::CountGt => "count-gt",
            Self::CountLt => "count-lt",
            Self::PlanIs => "plan-is",
            Self::PlanIsNot => "plan-is-not",
        }
    }

    pub fn parse(s: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.as_str() == s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 操作符注册表
///
/// 持有字段到合法操作符集合的只读映射；没有条目的字段（id、name）
/// 不参与筛选，由校验层拒绝。
pub struct OperatorRegistry {
    field_operators: HashMap<Field, &'static [Operator]>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        let mut field_operators: HashMap<Field, &'static [Operator]> = HashMap::new();
        field_operators.insert(
            Field::Email,
            &[Operator::EmailContains, Operator::EmailNotContains][..],
        );
        field_operators.insert(
            Field::Country,
            &[Operator::CountryIs, Operator::CountryIsNot][..],
        );
        field_operators.insert(
            Field::SignupDate,
            &[Operator::DateBefore, Operator::DateAfter][..],
        );
        field_operators.insert(
            Field::PurchaseCount,
            &[Operator::CountEquals, Operator::CountGt, Operator::CountLt][..],
        );
        field_operators.insert(Field::Plan, &[Operator::PlanIs, Operator::PlanIsNot][..]);

        Self { field_operators }
    }

    /// 字段允许的操作符集合；无条目的字段返回 None
    pub fn allowed_for(&self, field: Field) -> Option<&'static [Operator]> {
        self.field_operators.get(&field).copied()
    }

    /// 应用操作符
    ///
    /// 全函数：无法解析的日期或数值按「不匹配」处理，绝不报错。
    pub fn apply(&self, operator: Operator, field_value: &Value, comparand: &Value) -> bool {
        match operator {
            Operator::EmailContains => str_contains(field_value, comparand),
            Operator::EmailNotContains => !str_contains(field_value, comparand),
            Operator::CountryIs | Operator::PlanIs => str_eq(field_value, comparand),
            Operator::CountryIsNot | Operator::PlanIsNot => !str_eq(field_value, comparand),
            Operator::DateBefore => date_cmp(field_value, comparand, |a, b| a < b),
            Operator::DateAfter => date_cmp(field_value, comparand, |a, b| a > b),
            Operator::CountEquals => {
                num_cmp(field_value, comparand, |a, b| (a - b).abs() < f64::EPSILON)
            }
            Operator::CountGt => num_cmp(field_value, comparand, |a, b| a > b),
            Operator::CountLt => num_cmp(field_value, comparand, |a, b| a < b),
        }
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// 取值的文本形态（字符串取原文，其余取 JSON 字面量）
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 大小写不敏感的子串判断
fn str_contains(field: &Value, comparand: &Value) -> bool {
    value_text(field)
        .to_lowercase()
        .contains(&value_text(comparand).to_lowercase())
}

/// 大小写不敏感的相等判断
fn str_eq(field: &Value, comparand: &Value) -> bool {
    value_text(field).to_lowercase() == value_text(comparand).to_lowercase()
}

/// 数值比较；任一侧无法按数值解析则不匹配
fn num_cmp<F>(field: &Value, comparand: &Value, cmp: F) -> bool
where
    F: Fn(f64, f64) -> bool,
{
    match (as_f64(field), as_f64(comparand)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// 日期比较（严格 < / >）；任一侧无法解析则不匹配
fn date_cmp<F>(field: &Value, comparand: &Value, cmp: F) -> bool
where
    F: Fn(NaiveDate, NaiveDate) -> bool,
{
    match (parse_date(field), parse_date(comparand)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// 解析日历日期：先尝试 RFC 3339，再尝试 yyyy-mm-dd
fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> OperatorRegistry {
        OperatorRegistry::new()
    }

    #[test]
    fn test_operator_wire_names() {
        assert_eq!(
            serde_json::to_value(Operator::EmailContains).unwrap(),
            json!("email-contains")
        );
        assert_eq!(
            serde_json::to_value(Operator::CountGt).unwrap(),
            json!("count-gt")
        );
        assert_eq!(
            serde_json::to_value(Operator::PlanIsNot).unwrap(),
            json!("plan-is-not")
        );

        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.as_str()), Some(op));
        }
        assert_eq!(Operator::parse("regex"), None);
    }

    #[test]
    fn test_email_contains_case_insensitive() {
        let r = registry();
        assert!(r.apply(
            Operator::EmailContains,
            &json!("Alice@Acme.com"),
            &json!("ACME")
        ));
        assert!(!r.apply(
            Operator::EmailContains,
            &json!("alice@acme.com"),
            &json!("globex")
        ));
        assert!(!r.apply(
            Operator::EmailNotContains,
            &json!("alice@acme.com"),
            &json!("acme")
        ));
    }

    #[test]
    fn test_country_equality_case_insensitive() {
        let r = registry();
        assert!(r.apply(Operator::CountryIs, &json!("US"), &json!("us")));
        assert!(!r.apply(Operator::CountryIs, &json!("US"), &json!("UK")));
        assert!(r.apply(Operator::CountryIsNot, &json!("US"), &json!("UK")));
    }

    #[test]
    fn test_plan_equality_case_insensitive() {
        let r = registry();
        assert!(r.apply(Operator::PlanIs, &json!("pro"), &json!("PRO")));
        assert!(!r.apply(Operator::PlanIsNot, &json!("pro"), &json!("Pro")));
    }

    #[test]
    fn test_date_comparison_strict() {
        let r = registry();
        assert!(r.apply(
            Operator::DateBefore,
            &json!("2022-03-15"),
            &json!("2023-01-01")
        ));
        assert!(r.apply(
            Operator::DateAfter,
            &json!("2023-01-01"),
            &json!("2022-03-15")
        ));
        // 严格比较：相等日期两个方向都不匹配
        assert!(!r.apply(
            Operator::DateBefore,
            &json!("2022-03-15"),
            &json!("2022-03-15")
        ));
        assert!(!r.apply(
            Operator::DateAfter,
            &json!("2022-03-15"),
            &json!("2022-03-15")
        ));
    }

    #[test]
    fn test_date_accepts_rfc3339() {
        let r = registry();
        assert!(r.apply(
            Operator::DateBefore,
            &json!("2022-03-15T10:00:00Z"),
            &json!("2023-01-01")
        ));
    }

    #[test]
    fn test_invalid_date_never_matches() {
        let r = registry();
        assert!(!r.apply(
            Operator::DateBefore,
            &json!("not-a-date"),
            &json!("2023-01-01")
        ));
        assert!(!r.apply(
            Operator::DateAfter,
            &json!("2022-03-15"),
            &json!("soon")
        ));
        assert!(!r.apply(Operator::DateBefore, &json!(42), &json!("2023-01-01")));
    }

    #[test]
    fn test_numeric_comparisons() {
        let r = registry();
        assert!(r.apply(Operator::CountEquals, &json!(12), &json!(12)));
        assert!(r.apply(Operator::CountGt, &json!(12), &json!(10)));
        assert!(r.apply(Operator::CountLt, &json!(3), &json!(10)));
        assert!(!r.apply(Operator::CountGt, &json!(10), &json!(10)));
    }

    #[test]
    fn test_numeric_string_coercion() {
        let r = registry();
        assert!(r.apply(Operator::CountEquals, &json!(12), &json!("12")));
        assert!(r.apply(Operator::CountGt, &json!("20"), &json!(10)));
    }

    #[test]
    fn test_non_numeric_never_matches() {
        let r = registry();
        assert!(!r.apply(Operator::CountGt, &json!(12), &json!("many")));
        assert!(!r.apply(Operator::CountEquals, &json!("abc"), &json!("abc")));
    }

    #[test]
    fn test_allowed_for_table() {
        let r = registry();
        assert_eq!(
            r.allowed_for(Field::Email),
            Some(&[Operator::EmailContains, Operator::EmailNotContains][..])
        );
        assert_eq!(
            r.allowed_for(Field::PurchaseCount),
            Some(&[Operator::CountEquals, Operator::CountGt, Operator::CountLt][..])
        );
        assert_eq!(
            r.allowed_for(Field::Plan),
            Some(&[Operator::PlanIs, Operator::PlanIsNot][..])
        );
        // id / name 没有操作符条目
        assert_eq!(r.allowed_for(Field::Id), None);
        assert_eq!(r.allowed_for(Field::Name), None);
    }
}
