//! Operation endpoints: historic listing, cost quotes, confirmations

use axum::extract::{Path, Query, State};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cubana_core::{
    paginate, remesa_cost, search_operations, sort_desc, ConfirmationRequest, Operation, Page,
    Recarga, Remesa,
};

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct HistoricParams {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_page")]
    pub page: usize,
}

fn default_page() -> usize {
    1
}

/// Historic view of a province: remesas and recargas combined,
/// searched, sorted newest first and windowed into pages
pub async fn api_historic(
    State(state): State<AppState>,
    Path(province): Path<String>,
    Query(params): Query<HistoricParams>,
) -> Result<Json<Page<Operation>>, ApiError> {
    let remesas = state.upstream.remesas_by_province(&province).await?;
    let recargas = state.upstream.recargas_by_province(&province).await?;

    let mut rows: Vec<Operation> = remesas.iter().map(Operation::from).collect();
    rows.extend(recargas.iter().map(Operation::from));

    let mut rows = search_operations(&rows, &params.q);
    sort_desc(&mut rows);

    let page_size = state.config.pagination.page_size;
    Ok(Json(paginate(&rows, params.page, page_size)))
}

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub amount: Decimal,
    pub cost: Decimal,
}

/// Proposed service cost for a remesa amount
///
/// The proposal is editable on the create form; this endpoint only
/// computes the default.
pub async fn api_remesa_quote(
    Query(params): Query<QuoteParams>,
) -> Result<Json<QuoteResponse>, ApiError> {
    if params.amount <= Decimal::ZERO {
        return Err(ApiError::BadRequest {
            message: "amount must be positive".to_string(),
        });
    }
    Ok(Json(QuoteResponse {
        amount: params.amount,
        cost: remesa_cost(params.amount),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ConfirmPayload {
    pub confirmation: String,
}

/// Confirm a pending remesa
///
/// The current status is fetched first so a row that already reached
/// `Realizado` is rejected without touching the upstream.
pub async fn api_confirm_remesa(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ConfirmPayload>,
) -> Result<Json<Remesa>, ApiError> {
    let current = state.upstream.remesa(&id).await?;
    let request = ConfirmationRequest::new(&id, current.status, &payload.confirmation)?;
    let updated = state
        .upstream
        .confirm_remesa(&request.operation_id, &request.confirmation)
        .await?;
    log::info!("Confirmed remesa {}", id);
    Ok(Json(updated))
}

/// Confirm a pending recarga
pub async fn api_confirm_recarga(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ConfirmPayload>,
) -> Result<Json<Recarga>, ApiError> {
    let current = state.upstream.recarga(&id).await?;
    let request = ConfirmationRequest::new(&id, current.status, &payload.confirmation)?;
    let updated = state
        .upstream
        .confirm_recarga(&request.operation_id, &request.confirmation)
        .await?;
    log::info!("Confirmed recarga {}", id);
    Ok(Json(updated))
}

/// Delete a remesa
pub async fn api_delete_remesa(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.upstream.delete_remesa(&id).await?;
    log::info!("Deleted remesa {}", id);
    Ok(Json(serde_json::json!({ "deleted": id })))
}
