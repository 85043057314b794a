//! 健康检查处理器

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;

use crate::{
    dto::{ApiResponse, HealthData, HealthStatus},
    state::AppState,
};

/// 健康检查
///
/// GET /health（公开路由）。数据集为空时报告 degraded 并返回 503。
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthData>>) {
    let contacts = state.engine.contacts();
    let sample_contact = contacts.first().cloned();

    let status = if sample_contact.is_some() {
        HealthStatus::Ok
    } else {
        HealthStatus::Degraded
    };
    let http_status = match status {
        HealthStatus::Ok => StatusCode::OK,
        HealthStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
    };

    let data = HealthData {
        status,
        contacts_loaded: contacts.len(),
        sample_contact,
        timestamp: Utc::now(),
    };

    (
        http_status,
        Json(ApiResponse::success_with_message(
            data,
            format!("服务状态: {}", status.as_str()),
        )),
    )
}
