//! One-shot flash data carried across a redirect.
//!
//! A handler that redirects after a mutation stores a message in the session
//! under one of the configured flash keys. On the next request the bridge
//! moves that value into the shared prop layer of the request and deletes it
//! from the session, so it is shown by exactly one render.
//!
//! The values are attached to the request's [`RequestScope`], not to the
//! process-wide shared props, so one user's flash can never appear in
//! another user's page.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use inertia_types::Props;
use tracing::{debug, warn};

use crate::error::InertiaError;
use crate::inertia::Inertia;
use crate::scope::{self, RequestScope};
use crate::session::SessionStore;

/// Middleware moving flash values from the session into the request scope.
///
/// A no-op when no session store is configured.
pub async fn flash_bridge(
    State(inertia): State<Arc<Inertia>>,
    mut request: Request,
    next: Next,
) -> Result<Response, InertiaError> {
    if let Some(store) = &inertia.sessions {
        let flashed = take_flashed(store.as_ref(), &inertia.config().flash_keys, &request)
            .inspect_err(|e| warn!(error = %e, "failed to read flash data"))?;

        if !flashed.is_empty() {
            debug!(keys = ?flashed.keys().collect::<Vec<_>>(), "flash data consumed");
            scope::update(request.extensions_mut(), |current: &RequestScope| {
                current.with_flashed(flashed)
            });
        }
    }

    Ok(next.run(request).await)
}

/// Take every non-null flash key out of the session.
fn take_flashed(
    store: &dyn SessionStore,
    keys: &[String],
    request: &Request,
) -> Result<Props, InertiaError> {
    let mut flashed = Props::new();

    for key in keys {
        if let Some(value) = store.take(request.headers(), key)? {
            flashed.insert(key.clone(), value);
        }
    }

    Ok(flashed)
}
