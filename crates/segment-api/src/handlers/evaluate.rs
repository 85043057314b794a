//! 规则评估处理器

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use rule_engine::Rule;

use crate::{
    dto::{ApiResponse, EvaluateData},
    error::{ApiError, Result},
    state::AppState,
};

/// 对数据集评估临时规则
///
/// POST /evaluate
pub async fn evaluate_rule(
    State(state): State<AppState>,
    Json(candidate): Json<Value>,
) -> Result<Json<ApiResponse<EvaluateData>>> {
    let errors = state.engine.validate(&candidate);
    if !errors.is_empty() {
        return Err(ApiError::InvalidRule(errors));
    }

    let rule = Rule::from_value(candidate).map_err(ApiError::from)?;
    let contacts = state.engine.match_contacts(&rule);
    let matched_count = contacts.len();

    info!(matched_count, "规则评估完成");

    Ok(Json(ApiResponse::success_with_message(
        EvaluateData {
            rule,
            matched_count,
            contacts,
        },
        format!("匹配到 {matched_count} 个联系人"),
    )))
}
