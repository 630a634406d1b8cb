//! The adapter object wired into the host application.
//!
//! [`Inertia`] owns the configuration and the server-wide shared state. It is
//! constructed once during setup, wrapped in [`Arc`], and placed in the
//! router state. Handlers reach it through the
//! [`InertiaContext`](crate::InertiaContext) extractor; the middleware reach
//! it through `from_fn_with_state`.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use axum::Router;
use axum::middleware;
use minijinja::functions::Function;
use minijinja::value::{FunctionArgs, FunctionResult};

use crate::config::InertiaConfig;
use crate::flash::flash_bridge;
use crate::routes::RouteTable;
use crate::session::SessionStore;
use crate::shared::SharedState;
use crate::version::version_gate;

/// Inertia protocol adapter.
pub struct Inertia {
    config: InertiaConfig,
    shared: RwLock<SharedState>,
    pub(crate) sessions: Option<Arc<dyn SessionStore>>,
    pub(crate) routes: Option<Arc<dyn RouteTable>>,
}

impl Inertia {
    /// Create an adapter with no session store and no route table.
    pub fn new(config: InertiaConfig) -> Self {
        Self {
            config,
            shared: RwLock::new(SharedState::new()),
            sessions: None,
            routes: None,
        }
    }

    /// Read flash data from `store`.
    #[must_use]
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(store);
        self
    }

    /// Attach the route table projected into every page.
    #[must_use]
    pub fn with_route_table(mut self, table: Arc<dyn RouteTable>) -> Self {
        self.routes = Some(table);
        self
    }

    /// Adapter configuration.
    pub const fn config(&self) -> &InertiaConfig {
        &self.config
    }

    /// Current asset version.
    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Make `key` visible as a prop in every subsequent render.
    ///
    /// The last write for a key wins.
    pub fn share(&self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.shared
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .props
            .insert(key.into(), value.into());
    }

    /// Register a helper callable from the root template as `key(...)`.
    pub fn share_func<F, Rv, Args>(&self, key: impl Into<String>, function: F)
    where
        F: Function<Rv, Args>,
        Rv: FunctionResult,
        Args: for<'a> FunctionArgs<'a>,
    {
        self.shared
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .functions
            .insert(key.into(), minijinja::Value::from_function(function));
    }

    /// A copy of the current shared state.
    pub fn shared(&self) -> SharedState {
        self.read_shared().clone()
    }

    pub(crate) fn read_shared(&self) -> RwLockReadGuard<'_, SharedState> {
        self.shared.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install the version gate and flash bridge on `router`.
    ///
    /// The version gate is the outer layer: a stale client is turned away
    /// before its flash data is consumed.
    pub fn apply<S>(self: &Arc<Self>, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router
            .layer(middleware::from_fn_with_state(Arc::clone(self), flash_bridge))
            .layer(middleware::from_fn_with_state(Arc::clone(self), version_gate))
    }
}

impl std::fmt::Debug for Inertia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inertia")
            .field("config", &self.config)
            .field("has_session_store", &self.sessions.is_some())
            .field("has_route_table", &self.routes.is_some())
            .finish_non_exhaustive()
    }
}
