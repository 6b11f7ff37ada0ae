//! Typed client for the upstream Cubana Express REST API
//!
//! Wraps `reqwest` with bearer-token injection from the shared [`Session`]
//! and maps every failure mode to a [`ClientError`]: connectivity problems,
//! business errors reported by the upstream, expired sessions (which also
//! clear the local session), and undecodable responses.

pub mod catalog;
pub mod directory;
pub mod error;
pub mod finance;
pub mod operations;
pub mod session;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use cubana_core::User;

pub use catalog::OfertaInput;
pub use directory::{ClientInput, ProvinceInput, UserInput};
pub use error::{ApiErrorBody, ClientError, ClientErrorCode, ClientResult};
pub use finance::FinanceOperationInput;
pub use operations::{RecargaInput, RemesaInput};
pub use session::{AuthState, FileTokenStore, MemoryTokenStore, Session, TokenStore};

/// Credentials for `POST /auth/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Client for the upstream API
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<Session>,
}

impl ApiClient {
    /// Build a client against the given base URL (no trailing slash)
    pub fn new(base_url: &str, timeout: Duration, session: Arc<Session>) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request builder with the bearer token attached
    async fn authed(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let token = self.session.token().await.ok_or(ClientError::NoSession)?;
        Ok(self
            .http
            .request(method, self.url(path))
            .bearer_auth(token))
    }

    /// Send a request and decode a JSON body
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await.map_err(|e| ClientError::Network {
            message: format!("Request failed: {}", e),
        })?;
        let response = self.check(response).await?;
        response.json::<T>().await.map_err(|e| ClientError::Decode {
            message: format!("Failed to decode response body: {}", e),
        })
    }

    /// Send a request and ignore the body
    async fn send_unit(&self, builder: RequestBuilder) -> ClientResult<()> {
        let response = builder.send().await.map_err(|e| ClientError::Network {
            message: format!("Request failed: {}", e),
        })?;
        self.check(response).await?;
        Ok(())
    }

    /// Turn a non-success response into the matching error
    ///
    /// Any rejection of the token clears the local session so the next
    /// call surfaces `NoSession` instead of replaying it.
    async fn check(&self, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .json::<ApiErrorBody>()
            .await
            .unwrap_or_else(|_| ApiErrorBody {
                message: format!("Error {}", status.as_u16()),
                redirect: None,
                expired: false,
            });
        if let Some((redirect, expired)) = session_rejection(status, &body) {
            log::warn!("Upstream rejected the session token, clearing session");
            if let Err(e) = self.session.clear().await {
                log::warn!("Failed to clear session: {}", e);
            }
            return Err(ClientError::SessionExpired { redirect, expired });
        }
        Err(ClientError::Api {
            message: body.message,
        })
    }

    // ==================== Verb helpers ====================

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let builder = self.authed(Method::GET, path).await?;
        self.send(builder).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let builder = self.authed(Method::POST, path).await?.json(body);
        self.send(builder).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let builder = self.authed(Method::PUT, path).await?.json(body);
        self.send(builder).await
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let builder = self.authed(Method::PATCH, path).await?.json(body);
        self.send(builder).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        let builder = self.authed(Method::DELETE, path).await?;
        self.send_unit(builder).await
    }

    // ==================== Auth ====================

    /// Log in and establish the session
    ///
    /// The only call made without a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let builder = self.http.post(self.url("/auth/login")).json(&request);
        let response: LoginResponse = self.send(builder).await?;
        let user = response.user.clone();
        self.session
            .establish(AuthState {
                token: response.token,
                user: response.user,
            })
            .await?;
        log::info!("Logged in as {} ({})", user.name, user.role);
        Ok(user)
    }

    /// Drop the session locally
    pub async fn logout(&self) -> ClientResult<()> {
        self.session.clear().await
    }
}

/// Decide whether an error response means the token was rejected
///
/// Either the body carries a `redirect`, or the status is a plain 401
/// without one; both invalidate the stored session.
fn session_rejection(status: StatusCode, body: &ApiErrorBody) -> Option<(String, bool)> {
    if let Some(redirect) = &body.redirect {
        return Some((redirect.clone(), body.expired));
    }
    if status == StatusCode::UNAUTHORIZED {
        return Some(("/login".to_string(), body.expired));
    }
    None
}
