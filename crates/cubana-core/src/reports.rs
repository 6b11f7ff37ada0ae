//! View structures served to the back-office front end

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::{ProvinceRef, Recarga, Remesa};

/// Movement counts grouped by kind across all provinces
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OperationCounts {
    pub entradas: usize,
    pub remesas: usize,
    pub recargas: usize,
    pub total_movements: usize,
}

/// Per-province summary card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceSummary {
    pub province: ProvinceRef,
    pub total: Decimal,
    pub total_display: String,
    pub movement_count: usize,
}

/// Admin dashboard summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Balance across all provinces ("total en caja")
    pub total: Decimal,
    pub total_display: String,
    pub by_province: Vec<ProvinceSummary>,
    pub operation_counts: OperationCounts,
}

/// Worker dashboard: pending rows in full, confirmed as counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerDashboard {
    pub pending_remesas: Vec<Remesa>,
    pub pending_recargas: Vec<Recarga>,
    pub confirmed_remesas: usize,
    pub confirmed_recargas: usize,
}

impl WorkerDashboard {
    /// Whether anything still awaits confirmation
    pub fn has_pending(&self) -> bool {
        !self.pending_remesas.is_empty() || !self.pending_recargas.is_empty()
    }
}
