//! 规则引擎集成测试
//!
//! 覆盖从未定型候选规则到匹配结果的完整链路。

use rule_engine::{RuleEngine, RuleError};
use serde_json::json;

fn match_ids(engine: &RuleEngine, candidate: serde_json::Value) -> Vec<String> {
    let rule = engine.parse_rule(candidate).unwrap();
    engine
        .match_contacts(&rule)
        .into_iter()
        .map(|c| c.id)
        .collect()
}

#[test]
fn test_country_filter_matches_exact_id_set() {
    let engine = RuleEngine::with_builtin_dataset();
    let ids = match_ids(
        &engine,
        json!({
            "logic": "AND",
            "conditions": [
                {"field": "country", "operator": "country-is", "value": "US"}
            ]
        }),
    );
    assert_eq!(ids, ["c001", "c004", "c006", "c008", "c015"]);
}

#[test]
fn test_default_logic_is_and() {
    let engine = RuleEngine::with_builtin_dataset();
    // 未给出 logic 时默认 AND
    let ids = match_ids(
        &engine,
        json!({
            "conditions": [
                {"field": "purchaseCount", "operator": "count-gt", "value": 10},
                {"field": "plan", "operator": "plan-is", "value": "pro"}
            ]
        }),
    );
    assert_eq!(ids, ["c001", "c009", "c011", "c013"]);
}

#[test]
fn test_or_logic_with_date_and_plan() {
    let engine = RuleEngine::with_builtin_dataset();
    let ids = match_ids(
        &engine,
        json!({
            "logic": "OR",
            "conditions": [
                {"field": "signupDate", "operator": "date-before", "value": "2021-01-01"},
                {"field": "plan", "operator": "plan-is", "value": "enterprise"}
            ]
        }),
    );
    assert_eq!(ids, ["c003", "c006", "c008", "c014"]);
}

#[test]
fn test_recursive_group_rule() {
    let engine = RuleEngine::with_builtin_dataset();
    let ids = match_ids(
        &engine,
        json!({
            "logic": "AND",
            "conditions": [
                {"field": "country", "operator": "country-is", "value": "US"}
            ],
            "groups": [
                {
                    "logic": "OR",
                    "conditions": [
                        {"field": "plan", "operator": "plan-is", "value": "enterprise"},
                        {"field": "purchaseCount", "operator": "count-gt", "value": 10}
                    ]
                }
            ]
        }),
    );
    assert_eq!(ids, ["c001", "c006", "c008"]);
}

#[test]
fn test_email_contains_filter() {
    let engine = RuleEngine::with_builtin_dataset();
    let ids = match_ids(
        &engine,
        json!({
            "conditions": [
                {"field": "email", "operator": "email-contains", "value": "acme"}
            ]
        }),
    );
    assert_eq!(ids, ["c001", "c011"]);
}

#[test]
fn test_plan_value_case_insensitive_end_to_end() {
    let engine = RuleEngine::with_builtin_dataset();
    let ids = match_ids(
        &engine,
        json!({
            "conditions": [
                {"field": "plan", "operator": "plan-is", "value": "PRO"}
            ]
        }),
    );
    assert_eq!(ids, ["c001", "c009", "c011", "c013"]);
}

#[test]
fn test_unknown_operator_rejected_by_name() {
    let engine = RuleEngine::with_builtin_dataset();
    let errors = engine.validate(&json!({
        "conditions": [
            {"field": "email", "operator": "fuzzy-match", "value": "acme"}
        ]
    }));
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("fuzzy-match"));
}

#[test]
fn test_operator_field_mismatch_rejected() {
    let engine = RuleEngine::with_builtin_dataset();
    let errors = engine.validate(&json!({
        "conditions": [
            {"field": "email", "operator": "country-is", "value": "US"}
        ]
    }));
    assert!(!errors.is_empty());
    assert!(errors[0].contains("不适用于"));

    match engine.parse_rule(json!({
        "conditions": [
            {"field": "email", "operator": "country-is", "value": "US"}
        ]
    })) {
        Err(RuleError::Validation(_)) => {}
        other => panic!("期望 Validation 错误，实际: {other:?}"),
    }
}

#[test]
fn test_empty_rule_rejected_and_matches_nothing() {
    let engine = RuleEngine::with_builtin_dataset();
    let errors = engine.validate(&json!({"conditions": []}));
    assert!(!errors.is_empty());

    // 防御路径：绕过校验直接评估空规则也不会有任何匹配
    let rule = rule_engine::Rule {
        logic: rule_engine::Logic::And,
        conditions: Vec::new(),
        groups: Vec::new(),
    };
    assert!(engine.match_contacts(&rule).is_empty());
}

#[test]
fn test_repeated_evaluation_is_stable() {
    let engine = RuleEngine::with_builtin_dataset();
    let candidate = json!({
        "logic": "OR",
        "conditions": [
            {"field": "plan", "operator": "plan-is", "value": "starter"},
            {"field": "purchaseCount", "operator": "count-lt", "value": 3}
        ]
    });

    let rule = engine.parse_rule(candidate).unwrap();
    let first: Vec<String> = engine
        .match_contacts(&rule)
        .into_iter()
        .map(|c| c.id)
        .collect();
    let second: Vec<String> = engine
        .match_contacts(&rule)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(first, second);
}
