//! Asset-version negotiation.
//!
//! An Inertia client reports the asset version it booted with in
//! `X-Inertia-Version`. When a GET navigation arrives with a different
//! version, the client's bundle is stale: instead of answering with JSON it
//! cannot interpret correctly, the gate answers `409` with
//! `X-Inertia-Location`, and the client performs a full browser visit that
//! loads the new assets.
//!
//! Non-Inertia requests and non-GET requests always pass through; a form
//! submission is never bounced purely because the assets changed.

use std::sync::Arc;

use axum::extract::{OriginalUri, Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;
use inertia_types::headers::X_INERTIA_VERSION;
use tracing::debug;

use crate::error::InertiaError;
use crate::inertia::Inertia;
use crate::location::location;
use crate::request::{is_inertia_request, original_url};

/// Middleware answering stale Inertia GETs with a version conflict.
pub async fn version_gate(
    State(inertia): State<Arc<Inertia>>,
    request: Request,
    next: Next,
) -> Result<Response, InertiaError> {
    if !is_inertia_request(request.headers()) {
        return Ok(next.run(request).await);
    }

    if request.method() == Method::GET {
        let client_version = request
            .headers()
            .get(X_INERTIA_VERSION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if client_version != inertia.version() {
            let url = original_url(request.uri(), request.extensions().get::<OriginalUri>());
            let target = format!("{}{url}", inertia.config().url);
            debug!(
                client_version,
                server_version = inertia.version(),
                location = %target,
                "asset version conflict"
            );
            return location(&target);
        }
    }

    Ok(next.run(request).await)
}
