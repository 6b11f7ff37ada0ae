//! Finance endpoints: the province ledgers and manual movements

use rust_decimal::Decimal;
use serde::Serialize;

use cubana_core::{FinancialStatus, Movement, MovementKind};

use super::error::ClientResult;
use super::ApiClient;

/// Payload for recording a manual movement on a province ledger
#[derive(Debug, Clone, Serialize)]
pub struct FinanceOperationInput {
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub amount: Decimal,
    #[serde(rename = "provinceId")]
    pub province_id: String,
}

impl ApiClient {
    /// Full financial status: per-province ledgers plus the grand total
    pub async fn financial_status(&self) -> ClientResult<FinancialStatus> {
        self.get("/finance/status").await
    }

    /// Flat listing of movements across provinces, newest data first
    pub async fn finance_operations(&self) -> ClientResult<Vec<Movement>> {
        self.get("/finance/operations").await
    }

    pub async fn add_finance_operation(
        &self,
        input: &FinanceOperationInput,
    ) -> ClientResult<Movement> {
        self.post("/finance/operation", input).await
    }

    /// Delete a manual movement from a province ledger
    ///
    /// The upstream enforces the eligibility rules; callers check them
    /// first to fail with a precise message.
    pub async fn delete_finance_operation(
        &self,
        province_id: &str,
        movement_id: &str,
    ) -> ClientResult<()> {
        self.delete(&format!("/finance/operation/{}/{}", province_id, movement_id))
            .await
    }
}
