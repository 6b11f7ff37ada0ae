//! Session state and token persistence
//!
//! The session holds the authenticated user and token in memory; a
//! `TokenStore` persists them across restarts. Stores are swappable so
//! tests run against an in-memory one while the binary uses a JSON file.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use cubana_core::{Role, User};

use super::error::{ClientError, ClientResult};

/// Authenticated session as persisted by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthState {
    pub token: String,
    pub user: User,
}

/// Persistence port for the session
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Load the persisted session, if any
    async fn load(&self) -> ClientResult<Option<AuthState>>;
    /// Persist the session
    async fn save(&self, state: &AuthState) -> ClientResult<()>;
    /// Remove any persisted session
    async fn clear(&self) -> ClientResult<()>;
}

/// In-memory store, used in tests
#[derive(Default)]
pub struct MemoryTokenStore {
    state: Mutex<Option<AuthState>>,
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> ClientResult<Option<AuthState>> {
        Ok(self.state.lock().await.clone())
    }

    async fn save(&self, state: &AuthState) -> ClientResult<()> {
        *self.state.lock().await = Some(state.clone());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        *self.state.lock().await = None;
        Ok(())
    }
}

/// JSON file store
///
/// A corrupt or unreadable file is treated as "no session": it is logged,
/// removed, and the caller sees `None` rather than an error.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> ClientResult<Option<AuthState>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClientError::Network {
                    message: format!("Failed to read session file: {}", e),
                })
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                log::warn!("Discarding invalid session file {:?}: {}", self.path, e);
                let _ = tokio::fs::remove_file(&self.path).await;
                Ok(None)
            }
        }
    }

    async fn save(&self, state: &AuthState) -> ClientResult<()> {
        let raw = serde_json::to_string_pretty(state).map_err(|e| ClientError::Decode {
            message: format!("Failed to serialize session: {}", e),
        })?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| ClientError::Network {
                message: format!("Failed to write session file: {}", e),
            })
    }

    async fn clear(&self) -> ClientResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Network {
                message: format!("Failed to remove session file: {}", e),
            }),
        }
    }
}

/// Live session shared across the service
pub struct Session {
    state: RwLock<Option<AuthState>>,
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            state: RwLock::new(None),
            store,
        }
    }

    /// Restore the persisted session into memory, if there is one
    pub async fn restore(&self) -> ClientResult<bool> {
        let loaded = self.store.load().await?;
        let found = loaded.is_some();
        *self.state.write().await = loaded;
        Ok(found)
    }

    /// Establish a fresh session and persist it
    pub async fn establish(&self, state: AuthState) -> ClientResult<()> {
        self.store.save(&state).await?;
        *self.state.write().await = Some(state);
        Ok(())
    }

    /// Drop the session from memory and from the store
    pub async fn clear(&self) -> ClientResult<()> {
        *self.state.write().await = None;
        self.store.clear().await
    }

    /// Current bearer token, if authenticated
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.as_ref().map(|s| s.token.clone())
    }

    /// Current user, if authenticated
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.as_ref().map(|s| s.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_some()
    }

    pub async fn has_role(&self, role: Role) -> bool {
        self.state
            .read()
            .await
            .as_ref()
            .map(|s| s.user.role == role)
            .unwrap_or(false)
    }

    /// Permission check derived from the role
    pub async fn has_permission(&self, permission: &str) -> bool {
        self.state
            .read()
            .await
            .as_ref()
            .map(|s| role_permissions(s.user.role).contains(&permission))
            .unwrap_or(false)
    }
}

/// Permissions granted to each role
pub fn role_permissions(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &[
            "view_remittances",
            "view_clients",
            "view_packages",
            "manage_users",
            "manage_provinces",
            "manage_finances",
        ],
        Role::Worker => &["view_remittances", "view_clients", "view_packages"],
        Role::Client => &["view_own_remittances", "view_own_packages"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            role,
            province: None,
        }
    }

    fn state(role: Role) -> AuthState {
        AuthState {
            token: "tok-123".to_string(),
            user: user(role),
        }
    }

    #[tokio::test]
    async fn test_establish_and_restore() {
        let store = Arc::new(MemoryTokenStore::default());
        let session = Session::new(store.clone());
        session.establish(state(Role::Admin)).await.unwrap();
        assert!(session.is_authenticated().await);

        // A second session over the same store picks the state back up
        let restored = Session::new(store);
        assert!(restored.restore().await.unwrap());
        assert_eq!(restored.token().await.as_deref(), Some("tok-123"));
        assert_eq!(restored.user().await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn test_clear_removes_persisted_state() {
        let store = Arc::new(MemoryTokenStore::default());
        let session = Session::new(store.clone());
        session.establish(state(Role::Worker)).await.unwrap();
        session.clear().await.unwrap();
        assert!(!session.is_authenticated().await);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_without_persisted_state() {
        let session = Session::new(Arc::new(MemoryTokenStore::default()));
        assert!(!session.restore().await.unwrap());
        assert!(session.token().await.is_none());
    }

    #[tokio::test]
    async fn test_role_and_permission_checks() {
        let session = Session::new(Arc::new(MemoryTokenStore::default()));
        session.establish(state(Role::Worker)).await.unwrap();
        assert!(session.has_role(Role::Worker).await);
        assert!(!session.has_role(Role::Admin).await);
        assert!(session.has_permission("view_remittances").await);
        assert!(!session.has_permission("manage_finances").await);
    }

    #[test]
    fn test_admin_permissions_cover_worker_permissions() {
        let admin = role_permissions(Role::Admin);
        for p in role_permissions(Role::Worker) {
            assert!(admin.contains(p));
        }
    }
}
