//! Dashboard endpoints
//!
//! The admin dashboard aggregates the upstream financial status; the
//! worker dashboard partitions a province's operations into pending rows
//! and confirmed counts.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use cubana_core::{partition, summarize, FinancialSummary, WorkerDashboard};

use crate::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct AdminDashboard {
    #[serde(flatten)]
    pub summary: FinancialSummary,
    pub client_count: u64,
}

/// Admin summary: totals per province, movement counts by kind and the
/// registered client count
pub async fn api_admin_dashboard(
    State(state): State<AppState>,
) -> Result<Json<AdminDashboard>, ApiError> {
    let status = state.upstream.financial_status().await?;
    for entry in &status.by_province {
        if !entry.is_consistent() {
            log::warn!(
                "Ledger total for {} does not match its movements",
                entry.province.name
            );
        }
    }
    let client_count = state.upstream.clients_count().await?;
    Ok(Json(AdminDashboard {
        summary: summarize(&status),
        client_count,
    }))
}

/// Worker dashboard for one province
pub async fn api_worker_dashboard(
    State(state): State<AppState>,
    Path(province): Path<String>,
) -> Result<Json<WorkerDashboard>, ApiError> {
    let remesas = state.upstream.remesas_by_province(&province).await?;
    let recargas = state.upstream.recargas_by_province(&province).await?;
    Ok(Json(partition(remesas, recargas)))
}
