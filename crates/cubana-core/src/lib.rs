//! Domain models and dashboard derivation logic
//!
//! Everything in this crate is a pure, synchronous derivation over data
//! fetched from the upstream Cubana Express API: aggregation for the admin
//! summary, pending/confirmed partitioning for the worker dashboard, the
//! shared search/sort/pagination pipeline, and the client-side business
//! rules (remesa cost proposal, same-day deletion eligibility).

pub mod dashboard;
pub mod error;
pub mod listview;
pub mod models;
pub mod reports;
pub mod rules;
pub mod summary;
pub mod types;

pub use dashboard::{partition, ConfirmationRequest};
pub use error::{CoreError, CoreResult, ErrorCode, ErrorSeverity};
pub use listview::{
    filter_movements, matches_query, paginate, recent, search_by, search_operations, sort_desc,
    Dated, Page, PageState,
};
pub use models::{
    Beneficiary, Bono, Client, ClientRef, FinancialStatus, Movement, Oferta, Operation, Province,
    ProvinceRef, ProvinceStatus, Recarga, Recipient, Remesa, User, WorkerRef,
};
pub use reports::{FinancialSummary, OperationCounts, ProvinceSummary, WorkerDashboard};
pub use rules::{check_movement_deletable, movement_deletable, remesa_cost};
pub use summary::summarize;
pub use types::{MovementKind, OperationKind, OperationStatus, Role};
