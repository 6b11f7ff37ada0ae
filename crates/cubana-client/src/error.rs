//! Error taxonomy for upstream API calls
//!
//! Every failure is mapped to one of a small set of tagged kinds so the
//! HTTP layer can pick a status code and a user-facing message without
//! string matching.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body shape of the upstream API
///
/// `redirect`/`expired` are set when the session is no longer valid and
/// the operator must be sent back to the login screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default)]
    pub expired: bool,
}

/// Error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientErrorCode {
    /// Connectivity failure
    NetworkError,
    /// Upstream rejected the request with a business/validation message
    ApiError,
    /// Persisted session is no longer valid upstream
    SessionExpired,
    /// Response body could not be decoded
    DecodeError,
    /// No stored session token
    NoSession,
}

impl std::fmt::Display for ClientErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientErrorCode::NetworkError => write!(f, "NETWORK_ERROR"),
            ClientErrorCode::ApiError => write!(f, "API_ERROR"),
            ClientErrorCode::SessionExpired => write!(f, "SESSION_EXPIRED"),
            ClientErrorCode::DecodeError => write!(f, "DECODE_ERROR"),
            ClientErrorCode::NoSession => write!(f, "NO_SESSION"),
        }
    }
}

/// Error type for upstream API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("Session expired, redirect to {redirect}")]
    SessionExpired { redirect: String, expired: bool },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("No authentication token available")]
    NoSession,
}

impl ClientError {
    /// Get the error code
    pub fn code(&self) -> ClientErrorCode {
        match self {
            ClientError::Network { .. } => ClientErrorCode::NetworkError,
            ClientError::Api { .. } => ClientErrorCode::ApiError,
            ClientError::SessionExpired { .. } => ClientErrorCode::SessionExpired,
            ClientError::Decode { .. } => ClientErrorCode::DecodeError,
            ClientError::NoSession => ClientErrorCode::NoSession,
        }
    }

    /// Message shown to the operator, in the language of the screens
    ///
    /// API errors are surfaced verbatim; the other kinds get the generic
    /// texts the original screens used.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network { .. } => {
                "Error de conexión. Verifica tu conexión a internet.".to_string()
            }
            ClientError::Api { message } => message.clone(),
            ClientError::SessionExpired { expired, .. } => {
                if *expired {
                    "Tu sesión ha expirado. Por favor inicia sesión nuevamente.".to_string()
                } else {
                    "Tu sesión ha finalizado. Por favor inicia sesión nuevamente.".to_string()
                }
            }
            ClientError::Decode { .. } => "Respuesta inesperada del servidor.".to_string(),
            ClientError::NoSession => "No hay token de autenticación".to_string(),
        }
    }
}

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
