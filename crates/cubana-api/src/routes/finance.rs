//! Finance endpoints: ledgers, recent movements, manual operations

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Local;
use rust_decimal::Decimal;
use serde::Deserialize;

use cubana_client::FinanceOperationInput;
use cubana_core::{
    check_movement_deletable, filter_movements, recent, CoreError, FinancialStatus, Movement,
    MovementKind,
};

use crate::{ApiError, AppState};

/// Raw financial status as reported by the upstream
pub async fn api_financial_status(
    State(state): State<AppState>,
) -> Result<Json<FinancialStatus>, ApiError> {
    Ok(Json(state.upstream.financial_status().await?))
}

#[derive(Debug, Deserialize)]
pub struct RecentParams {
    /// Movement kind filter: entrada, remesa or recarga
    #[serde(rename = "type")]
    pub kind: Option<MovementKind>,
    /// Province id filter
    pub province: Option<String>,
}

/// Most recent movements across provinces, filtered and truncated
pub async fn api_recent_movements(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Vec<Movement>>, ApiError> {
    let movements = state.upstream.finance_operations().await?;
    let filtered = filter_movements(&movements, params.kind, params.province.as_deref());
    let limit = state.config.pagination.recent_limit;
    Ok(Json(recent(filtered, limit)))
}

#[derive(Debug, Deserialize)]
pub struct MovementPayload {
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub amount: Decimal,
    #[serde(rename = "provinceId")]
    pub province_id: String,
}

/// Record a manual movement on a province ledger
pub async fn api_add_movement(
    State(state): State<AppState>,
    Json(payload): Json<MovementPayload>,
) -> Result<Json<Movement>, ApiError> {
    if payload.amount == Decimal::ZERO {
        return Err(CoreError::ValidationError {
            message: "amount must not be zero".to_string(),
        }
        .into());
    }
    let input = FinanceOperationInput {
        kind: payload.kind,
        amount: payload.amount,
        province_id: payload.province_id.clone(),
    };
    let movement = state.upstream.add_finance_operation(&input).await?;
    log::info!(
        "Recorded {} of {} on province {}",
        payload.kind,
        payload.amount,
        payload.province_id
    );
    Ok(Json(movement))
}

/// Delete a manual movement
///
/// Eligibility is checked against today's ledger before the upstream
/// call: only same-day movements without a linked operation qualify,
/// with "today" taken in the server's local timezone.
pub async fn api_delete_movement(
    State(state): State<AppState>,
    Path((province, id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let status = state.upstream.financial_status().await?;
    let movement = status
        .by_province
        .iter()
        .filter(|entry| entry.province.id == province)
        .flat_map(|entry| entry.movements.iter())
        .find(|m| m.id == id)
        .ok_or_else(|| ApiError::NotFound {
            resource: format!("movement {}", id),
        })?;

    check_movement_deletable(movement, &Local::now())?;

    state.upstream.delete_finance_operation(&province, &id).await?;
    log::info!("Deleted movement {} from province {}", id, province);
    Ok(Json(serde_json::json!({ "deleted": id })))
}
