//! Error types for cubana-api
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl
//! maps each error to a status code and a JSON body of the shape
//! `{"code": ..., "message": ...}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use cubana_client::ClientError;
use cubana_core::{CoreError, ErrorCode};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Upstream(#[from] ClientError),

    #[error(transparent)]
    Domain(#[from] CoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(e) => match e {
                ClientError::Network { .. } => StatusCode::BAD_GATEWAY,
                ClientError::Api { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                ClientError::SessionExpired { .. } | ClientError::NoSession => {
                    StatusCode::UNAUTHORIZED
                }
                ClientError::Decode { .. } => StatusCode::BAD_GATEWAY,
            },
            ApiError::Domain(e) => match e.code() {
                ErrorCode::EmptyConfirmation
                | ErrorCode::AlreadyConfirmed
                | ErrorCode::NotDeletable
                | ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }

    fn code(&self) -> String {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND".to_string(),
            ApiError::BadRequest { .. } => "BAD_REQUEST".to_string(),
            ApiError::Unauthorized => "UNAUTHORIZED".to_string(),
            ApiError::Upstream(e) => e.code().to_string(),
            ApiError::Domain(e) => e.code().to_string(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Upstream(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected: {}", self);
        }
        let body = json!({
            "code": self.code(),
            "message": self.message(),
        });
        (status, Json(body)).into_response()
    }
}
