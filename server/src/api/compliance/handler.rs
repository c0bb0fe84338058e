//! Compliance Policy API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use std::collections::HashMap;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{
    CompliancePolicy, CompliancePolicyCreate, CompliancePolicyUpdate, CompliancePolicyWithStatus,
    EmployeeCompliance,
};
use crate::db::repository::compliance;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Create a policy (admin)
pub async fn create_policy(
    State(state): State<ServerState>,
    Json(payload): Json<CompliancePolicyCreate>,
) -> AppResult<Json<CompliancePolicy>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    let policy = compliance::create_policy(state.pool(), payload).await?;
    tracing::info!(policy_id = policy.id, "Compliance policy created");
    Ok(Json(policy))
}

/// List all policies (admin)
pub async fn list_policies(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<CompliancePolicy>>> {
    let policies = compliance::find_all_policies(state.pool()).await?;
    Ok(Json(policies))
}

/// Get one policy (admin)
pub async fn get_policy(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CompliancePolicy>> {
    let policy = compliance::get_policy(state.pool(), id).await?;
    Ok(Json(policy))
}

/// Update a policy (admin, partial)
pub async fn update_policy(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CompliancePolicyUpdate>,
) -> AppResult<Json<CompliancePolicy>> {
    if let Some(title) = &payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    let policy = compliance::update_policy(state.pool(), id, payload).await?;
    Ok(Json(policy))
}

/// Delete a policy (admin)
pub async fn delete_policy(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    compliance::delete_policy(state.pool(), id).await?;
    Ok(Json(serde_json::json!({
        "message": "Policy deleted successfully"
    })))
}

/// Who has acknowledged a policy (admin)
pub async fn list_acknowledgements(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<EmployeeCompliance>>> {
    // 404 优先于空列表
    compliance::get_policy(state.pool(), id).await?;
    let acks = compliance::acknowledgements_for_policy(state.pool(), id).await?;
    Ok(Json(acks))
}

/// Active policies with the caller's acknowledgement status
pub async fn my_policies(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<CompliancePolicyWithStatus>>> {
    let employee_id = user.require_linked_employee()?;

    let policies = compliance::find_active_policies(state.pool()).await?;
    let acks = compliance::acknowledgements_for_employee(state.pool(), employee_id).await?;
    let ack_map: HashMap<i64, &EmployeeCompliance> =
        acks.iter().map(|a| (a.policy_id, a)).collect();

    let result = policies
        .into_iter()
        .map(|p| {
            let ack = ack_map.get(&p.id);
            CompliancePolicyWithStatus {
                id: p.id,
                title: p.title,
                code: p.code,
                description: p.description,
                effective_date: p.effective_date,
                is_active: p.is_active,
                is_acknowledged: ack.is_some(),
                acknowledged_at: ack.map(|a| a.acknowledged_at),
            }
        })
        .collect();

    Ok(Json(result))
}

/// Acknowledge an active policy
///
/// 幂等: 重复签收保留最初的时间戳。
pub async fn acknowledge(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<EmployeeCompliance>> {
    let employee_id = user.require_linked_employee()?;

    let policy = compliance::find_policy_by_id(state.pool(), id).await?;
    match policy {
        Some(p) if p.is_active => {}
        _ => {
            return Err(AppError::not_found(
                "Policy does not exist or is no longer active",
            ));
        }
    }

    let ack = compliance::acknowledge(state.pool(), employee_id, id).await?;
    Ok(Json(ack))
}
