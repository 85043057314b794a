//! 联系人筛选领域模型

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::Result;
use crate::operators::Operator;

/// 订阅计划（闭集枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Starter,
    Pro,
    Enterprise,
}

impl Plan {
    pub const ALL: [Plan; 4] = [Plan::Free, Plan::Starter, Plan::Pro, Plan::Enterprise];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Starter => "starter",
            Self::Pro => "pro",
            Self::Enterprise => "enterprise",
        }
    }

    /// 大小写不敏感解析
    pub fn parse(s: &str) -> Option<Plan> {
        match s.to_ascii_lowercase().as_str() {
            "free" => Some(Self::Free),
            "starter" => Some(Self::Starter),
            "pro" => Some(Self::Pro),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 联系人记录
///
/// 数据集在启动时加载一次，进程生命周期内只读，没有增删改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub country: String,
    /// ISO-8601 日期（yyyy-mm-dd）；固定格式下字典序即时间序
    pub signup_date: String,
    pub purchase_count: u32,
    pub plan: Plan,
}

impl Contact {
    /// 取出条件引用的字段值
    pub fn field_value(&self, field: Field) -> Value {
        match field {
            Field::Id => Value::String(self.id.clone()),
            Field::Name => Value::String(self.name.clone()),
            Field::Email => Value::String(self.email.clone()),
            Field::Country => Value::String(self.country.clone()),
            Field::SignupDate => Value::String(self.signup_date.clone()),
            Field::PurchaseCount => Value::from(self.purchase_count),
            Field::Plan => Value::String(self.plan.as_str().to_string()),
        }
    }
}

/// 记录字段名（线上格式为 camelCase，与数据集一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    Name,
    Email,
    Country,
    SignupDate,
    PurchaseCount,
    Plan,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Name,
        Field::Email,
        Field::Country,
        Field::SignupDate,
        Field::PurchaseCount,
        Field::Plan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Country => "country",
            Self::SignupDate => "signupDate",
            Self::PurchaseCount => "purchaseCount",
            Self::Plan => "plan",
        }
    }

    /// 按线上字段名精确匹配（大小写敏感）
    pub fn parse(s: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 逻辑连接符；输入大小写不敏感，缺省为 AND
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    pub fn parse(s: &str) -> Option<Logic> {
        match s.to_ascii_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Logic {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Logic {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Logic::parse(&s).ok_or_else(|| {
            serde::de::Error::custom(format!("logic 必须为 \"AND\" 或 \"OR\"，当前为 \"{s}\""))
        })
    }
}

/// 叶子条件：字段 / 操作符 / 比较值
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub field: Field,
    pub operator: Operator,
    pub value: Value,
}

impl Condition {
    pub fn new(field: Field, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }
}

/// 规则节点
///
/// 递归形态为规范形态：一个节点由逻辑连接符、若干叶子条件和若干子组构成；
/// 扁平规则是 `groups` 为空的退化情形。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    #[serde(default)]
    pub logic: Logic,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub groups: Vec<Rule>,
}

impl Rule {
    pub fn and(conditions: Vec<Condition>) -> Rule {
        Rule {
            logic: Logic::And,
            conditions,
            groups: Vec::new(),
        }
    }

    pub fn or(conditions: Vec<Condition>) -> Rule {
        Rule {
            logic: Logic::Or,
            conditions,
            groups: Vec::new(),
        }
    }

    /// 将已通过校验的候选规则解析为类型化规则树
    pub fn from_value(value: Value) -> Result<Rule> {
        Ok(serde_json::from_value(value)?)
    }

    /// 没有任何条件与子组的空节点
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.groups.is_empty()
    }
}
