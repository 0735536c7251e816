//! Session store: the current bearer token and role, mirrored to durable storage.
//!
//! This module owns:
//!   - the in-memory session (single writer: only `login`/`logout` mutate it)
//!   - the durable record, one JSON document `{ jwt, role }` under a fixed key
//!
//! Opening the store rehydrates from storage. A missing or corrupt record means
//! "logged out", never an error.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::api::QuestionApi;
use crate::config::ClientConfig;
use crate::domain::Session;
use crate::error::{ApiError, ApiResult};

/// Durable slot holding the serialized session.
pub trait SessionStorage: Send + Sync {
    /// Raw stored text, or None when nothing is stored or it cannot be read.
    fn load(&self) -> Option<String>;
    fn save(&self, raw: &str) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// One file per key inside a directory: `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self { path: dir.as_ref().join(format!("{}.json", key)) }
    }

    pub fn from_config(cfg: &ClientConfig) -> Self {
        Self::new(&cfg.session_dir, &cfg.session_key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(s) => Some(s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(target: "session", path = %self.path.display(), error = %e, "Unreadable session file");
                None
            }
        }
    }

    fn save(&self, raw: &str) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::from(e)),
        }
    }
}

/// Process-local storage, handy for tests and one-shot tools.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn with(raw: impl Into<String>) -> Self {
        Self { slot: Mutex::new(Some(raw.into())) }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.lock().clone()
    }

    fn save(&self, raw: &str) -> ApiResult<()> {
        *self.lock() = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        *self.lock() = None;
        Ok(())
    }
}

#[derive(Clone)]
pub struct SessionStore {
    api: QuestionApi,
    storage: Arc<dyn SessionStorage>,
    current: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// Build the store and rehydrate from storage. The returned store is ready.
    #[instrument(level = "info", skip_all)]
    pub fn open(api: QuestionApi, storage: Arc<dyn SessionStorage>) -> Self {
        let restored = storage.load().and_then(|raw| match serde_json::from_str::<Session>(&raw) {
            Ok(s) => Some(s),
            Err(e) => {
                warn!(target: "session", error = %e, "Ignoring corrupt stored session");
                None
            }
        });

        match &restored {
            Some(s) => info!(target: "session", role = %s.role, "Session restored"),
            None => info!(target: "session", "No stored session"),
        }

        Self {
            api,
            storage,
            current: Arc::new(RwLock::new(restored)),
        }
    }

    /// Authenticate and, on success, replace the session in memory and in storage.
    /// Rejection and transport failure both return false and leave the prior session as is.
    #[instrument(level = "info", skip(self, password), fields(%user_name))]
    pub async fn login(&self, user_name: &str, password: &str) -> bool {
        let session = match self.api.authenticate(user_name, password).await {
            Ok(s) => s,
            Err(e) => {
                warn!(target: "session", error = %e, "Login failed");
                return false;
            }
        };

        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.storage.save(&raw) {
                    error!(target: "session", error = %e, "Failed to persist session; keeping it in memory only");
                }
            }
            Err(e) => error!(target: "session", error = %e, "Failed to serialize session"),
        }

        info!(target: "session", role = %session.role, "Logged in");
        *self.current.write().await = Some(session);
        true
    }

    /// Drop the session everywhere. No remote call.
    #[instrument(level = "info", skip(self))]
    pub async fn logout(&self) {
        *self.current.write().await = None;
        if let Err(e) = self.storage.clear() {
            error!(target: "session", error = %e, "Failed to clear stored session");
        }
        info!(target: "session", "Logged out");
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.jwt.clone())
    }

    pub async fn role(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|s| s.role.clone())
    }

    pub async fn is_logged_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    pub fn api(&self) -> &QuestionApi {
        &self.api
    }
}
