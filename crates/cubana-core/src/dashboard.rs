//! Worker dashboard derivation and the confirmation workflow

use super::error::{CoreError, CoreResult};
use super::models::{Recarga, Remesa};
use super::reports::WorkerDashboard;
use super::types::OperationStatus;

/// Split the worker's province operations into pending and confirmed
///
/// The two statuses are exhaustive, so every row lands in exactly one
/// bucket: pending rows are kept in full for the confirmation table,
/// confirmed rows are only counted.
pub fn partition(remesas: Vec<Remesa>, recargas: Vec<Recarga>) -> WorkerDashboard {
    let (pending_remesas, confirmed_remesas): (Vec<_>, Vec<_>) = remesas
        .into_iter()
        .partition(|r| r.status == OperationStatus::Pendiente);
    let (pending_recargas, confirmed_recargas): (Vec<_>, Vec<_>) = recargas
        .into_iter()
        .partition(|r| r.status == OperationStatus::Pendiente);

    WorkerDashboard {
        pending_remesas,
        pending_recargas,
        confirmed_remesas: confirmed_remesas.len(),
        confirmed_recargas: confirmed_recargas.len(),
    }
}

/// Validated confirmation ready to submit upstream
///
/// Construction is the client-side guard: whitespace-only text is rejected
/// before any API call, and a row that already reached `Realizado` cannot
/// be confirmed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest {
    pub operation_id: String,
    pub confirmation: String,
}

impl ConfirmationRequest {
    pub fn new(operation_id: &str, status: OperationStatus, text: &str) -> CoreResult<Self> {
        if status == OperationStatus::Realizado {
            return Err(CoreError::AlreadyConfirmed {
                id: operation_id.to_string(),
            });
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyConfirmation);
        }
        Ok(Self {
            operation_id: operation_id.to_string(),
            confirmation: trimmed.to_string(),
        })
    }
}

impl WorkerDashboard {
    /// Local update after a successful remesa confirmation
    ///
    /// Mirrors the fallback path used when the refresh after a confirm
    /// fails: drop the row from the pending bucket and bump the count.
    pub fn confirm_remesa_locally(&mut self, id: &str) {
        let before = self.pending_remesas.len();
        self.pending_remesas.retain(|r| r.id != id);
        if self.pending_remesas.len() < before {
            self.confirmed_remesas += 1;
        } else {
            log::warn!("confirmed remesa {} was not in the pending bucket", id);
        }
    }

    /// Local update after a successful recarga confirmation
    pub fn confirm_recarga_locally(&mut self, id: &str) {
        let before = self.pending_recargas.len();
        self.pending_recargas.retain(|r| r.id != id);
        if self.pending_recargas.len() < before {
            self.confirmed_recargas += 1;
        } else {
            log::warn!("confirmed recarga {} was not in the pending bucket", id);
        }
    }
}
