//! Session store collaborator used by the flash bridge.
//!
//! The adapter never persists sessions itself. It reads the current
//! request's session through [`SessionStore`] and deletes flash keys once
//! they have been handed to a render. [`MemorySessionStore`] is a
//! cookie-keyed in-process implementation for tests and demos.

use std::collections::HashMap;
use std::sync::Mutex;

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use inertia_types::Props;

/// Key/value data held in one session.
pub type SessionData = Props;

/// Cookie carrying the session identifier by default.
pub const DEFAULT_SESSION_COOKIE: &str = "session_id";

/// A session store failed.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct SessionError(pub String);

/// Access to the session belonging to an incoming request.
///
/// Implementations locate the session from the request headers (usually a
/// cookie). A request without a session yields empty [`SessionData`].
pub trait SessionStore: Send + Sync {
    /// Load the session data for the request.
    fn get(&self, headers: &HeaderMap) -> Result<SessionData, SessionError>;

    /// Remove `key` from the request's session.
    fn delete(&self, headers: &HeaderMap, key: &str) -> Result<(), SessionError>;

    /// Remove and return `key` if it is present and not null.
    ///
    /// A null value is left in place. The default reads then deletes in two
    /// steps; stores serving concurrent requests for one session should
    /// override it so a value can only be taken once.
    fn take(&self, headers: &HeaderMap, key: &str) -> Result<Option<serde_json::Value>, SessionError> {
        match self.get(headers)?.remove(key) {
            Some(value) if !value.is_null() => {
                self.delete(headers, key)?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }
}

/// In-memory sessions keyed by the value of a cookie.
///
/// Sessions live until [`remove`](Self::remove) is called; nothing expires
/// them.
#[derive(Debug)]
pub struct MemorySessionStore {
    cookie_name: String,
    sessions: Mutex<HashMap<String, SessionData>>,
}

impl MemorySessionStore {
    /// Create a store reading the session id from [`DEFAULT_SESSION_COOKIE`].
    pub fn new() -> Self {
        Self::with_cookie_name(DEFAULT_SESSION_COOKIE)
    }

    /// Create a store reading the session id from `cookie_name`.
    pub fn with_cookie_name(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Name of the cookie carrying the session id.
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Start an empty session and return its id.
    pub fn create(&self) -> Result<String, SessionError> {
        let id = uuid::Uuid::new_v4().to_string();
        self.lock()?.insert(id.clone(), SessionData::new());
        Ok(id)
    }

    /// Store `value` under `key` in session `id`, creating it if needed.
    pub fn set(
        &self,
        id: &str,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Result<(), SessionError> {
        self.lock()?
            .entry(id.to_owned())
            .or_default()
            .insert(key.into(), value.into());
        Ok(())
    }

    /// Drop session `id`, returning whether it existed.
    pub fn remove(&self, id: &str) -> Result<bool, SessionError> {
        Ok(self.lock()?.remove(id).is_some())
    }

    /// Read a single value from session `id`.
    pub fn get_value(&self, id: &str, key: &str) -> Result<Option<serde_json::Value>, SessionError> {
        Ok(self
            .lock()?
            .get(id)
            .and_then(|data| data.get(key))
            .cloned())
    }

    /// Extract the session id from the request's `Cookie` headers.
    pub fn session_id(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.cookie_name)
            .map(|(_, value)| value.to_owned())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, SessionData>>, SessionError> {
        self.sessions
            .lock()
            .map_err(|e| SessionError(format!("session map lock poisoned: {e}")))
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, headers: &HeaderMap) -> Result<SessionData, SessionError> {
        let Some(id) = self.session_id(headers) else {
            return Ok(SessionData::new());
        };
        Ok(self.lock()?.get(&id).cloned().unwrap_or_default())
    }

    fn delete(&self, headers: &HeaderMap, key: &str) -> Result<(), SessionError> {
        let Some(id) = self.session_id(headers) else {
            return Ok(());
        };
        if let Some(data) = self.lock()?.get_mut(&id) {
            data.remove(key);
        }
        Ok(())
    }

    fn take(&self, headers: &HeaderMap, key: &str) -> Result<Option<serde_json::Value>, SessionError> {
        let Some(id) = self.session_id(headers) else {
            return Ok(None);
        };
        let mut sessions = self.lock()?;
        let Some(data) = sessions.get_mut(&id) else {
            return Ok(None);
        };
        if data.get(key).is_some_and(|value| !value.is_null()) {
            Ok(data.remove(key))
        } else {
            Ok(None)
        }
    }
}
