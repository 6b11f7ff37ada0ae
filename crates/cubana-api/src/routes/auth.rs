//! Session endpoints
//!
//! Login proxies the upstream authentication and persists the session so
//! the service stays authenticated across restarts.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use cubana_core::User;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Authenticate against the upstream and establish the session
pub async fn api_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = state.upstream.login(&payload.email, &payload.password).await?;
    Ok(Json(SessionResponse {
        authenticated: true,
        user: Some(user),
    }))
}

/// Drop the session
pub async fn api_logout(State(state): State<AppState>) -> Result<Json<SessionResponse>, ApiError> {
    state.upstream.logout().await?;
    Ok(Json(SessionResponse {
        authenticated: false,
        user: None,
    }))
}

/// Current session, if any
pub async fn api_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let user = state.upstream.session().user().await;
    Json(SessionResponse {
        authenticated: user.is_some(),
        user,
    })
}
