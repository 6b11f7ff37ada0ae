//! HTTP API for the Cubana Express back-office
//!
//! Routes are organized into modules:
//! - routes::auth: Login, logout, current session
//! - routes::dashboard: Admin summary and worker dashboards
//! - routes::operations: Historic search/pagination, confirmations
//! - routes::finance: Province ledgers, manual movements

pub mod error;
pub mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use cubana_client::ApiClient;
use cubana_config::Config;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub upstream: ApiClient,
    pub config: Arc<Config>,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::auth::{api_login, api_logout, api_session};
    use routes::dashboard::{api_admin_dashboard, api_worker_dashboard};
    use routes::finance::{
        api_add_movement, api_delete_movement, api_financial_status, api_recent_movements,
    };
    use routes::operations::{
        api_confirm_recarga, api_confirm_remesa, api_delete_remesa, api_historic, api_remesa_quote,
    };

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/auth/login", post(api_login))
        .route("/api/auth/logout", post(api_logout))
        .route("/api/auth/session", get(api_session))
        .route("/api/dashboard/admin", get(api_admin_dashboard))
        .route("/api/dashboard/worker/:province", get(api_worker_dashboard))
        .route("/api/operations/historic/:province", get(api_historic))
        .route("/api/remesas/quote", get(api_remesa_quote))
        .route("/api/remesas/:id/confirm", post(api_confirm_remesa))
        .route("/api/remesas/:id", delete(api_delete_remesa))
        .route("/api/recargas/:id/confirm", post(api_confirm_recarga))
        .route("/api/finance/status", get(api_financial_status))
        .route("/api/finance/recent", get(api_recent_movements))
        .route("/api/finance/operation", post(api_add_movement))
        .route(
            "/api/finance/operation/:province/:id",
            delete(api_delete_movement),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address, and serves until
/// the process is stopped.
pub async fn start_server(config: Config, upstream: ApiClient) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        upstream,
        config: Arc::new(config),
    };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    eprintln!("[INFO] Starting Cubana back-office on http://{}", addr);
    eprintln!("[INFO] Available routes:");
    eprintln!("[INFO]   - /api/auth/* (Session management)");
    eprintln!("[INFO]   - /api/dashboard/admin (Financial summary)");
    eprintln!("[INFO]   - /api/dashboard/worker/:province (Pending operations)");
    eprintln!("[INFO]   - /api/operations/historic/:province (Search and pagination)");
    eprintln!("[INFO]   - /api/finance/* (Ledgers and movements)");

    match axum::serve(listener, router).await {
        Ok(_) => eprintln!("[INFO] Server stopped gracefully"),
        Err(e) => eprintln!("[ERROR] Server error: {}", e),
    }
    Ok(())
}
