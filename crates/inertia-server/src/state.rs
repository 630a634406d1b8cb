//! Shared application state for the demo server.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::FromRef;
use inertia_axum::{Inertia, MemorySessionStore};
use serde::Serialize;
use tokio::sync::RwLock;

/// A user record shown by the demo pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Numeric identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// In-memory user directory.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<BTreeMap<u64, User>>,
    next_id: AtomicU64,
}

impl UserStore {
    /// Add a user and return it.
    pub async fn create(&self, name: String) -> User {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        let user = User { id, name };
        self.users.write().await.insert(id, user.clone());
        user
    }

    /// All users ordered by id.
    pub async fn list(&self) -> Vec<User> {
        self.users.read().await.values().cloned().collect()
    }

    /// A single user.
    pub async fn get(&self, id: u64) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    /// Remove a user, returning whether it existed.
    pub async fn remove(&self, id: u64) -> bool {
        self.users.write().await.remove(&id).is_some()
    }
}

/// Shared state for the Axum application.
///
/// The adapter is reachable from handlers through
/// [`InertiaContext`](inertia_axum::InertiaContext) via the derived
/// [`FromRef`] implementation.
#[derive(Clone, FromRef)]
pub struct AppState {
    /// The Inertia adapter.
    pub inertia: Arc<Inertia>,
    /// Session store read by the flash bridge and written by handlers.
    pub sessions: Arc<MemorySessionStore>,
    /// Demo data.
    pub users: Arc<UserStore>,
}
