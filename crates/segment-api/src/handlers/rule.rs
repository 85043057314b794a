//! 命名规则管理处理器
//!
//! 规则的保存、列表与删除。标识符与时间戳由本层分配，核心引擎无感知。

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use rule_engine::Rule;

use crate::{
    dto::{ApiResponse, CreateRuleRequest, DeletedRuleData, RuleListData, SavedRuleData},
    error::{ApiError, Result},
    state::AppState,
    store::SavedRule,
};

/// 保存命名规则
///
/// POST /rules
pub async fn create_rule(
    State(state): State<AppState>,
    Json(req): Json<CreateRuleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SavedRuleData>>)> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation(vec!["缺少 name".to_string()]));
    }

    let errors = state.engine.validate(&req.rule);
    if !errors.is_empty() {
        return Err(ApiError::InvalidRule(errors));
    }

    let rule = Rule::from_value(req.rule).map_err(ApiError::from)?;
    let saved = SavedRule {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        description: req.description,
        rule,
        created_at: Utc::now(),
    };
    state.rules.insert(saved.clone());

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            SavedRuleData { saved },
            "规则保存成功",
        )),
    ))
}

/// 列出全部已保存规则
///
/// GET /rules
pub async fn list_rules(State(state): State<AppState>) -> Json<ApiResponse<RuleListData>> {
    let rules = state.rules.list();
    Json(ApiResponse::success(RuleListData {
        count: rules.len(),
        rules,
    }))
}

/// 按 id 删除已保存规则
///
/// DELETE /rules/{id}
pub async fn delete_rule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedRuleData>>> {
    let deleted = state
        .rules
        .delete(&id)
        .ok_or_else(|| ApiError::RuleNotFound(id.clone()))?;

    Ok(Json(ApiResponse::success_with_message(
        DeletedRuleData { deleted },
        "规则删除成功",
    )))
}
