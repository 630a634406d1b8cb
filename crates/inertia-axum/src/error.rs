//! Error types for the Inertia adapter.
//!
//! [`InertiaError`] unifies every way a render (or a middleware step) can
//! fail. It converts into a generic 500 response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation; the
//! protocol's 409 responses are successful results and never pass through
//! this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::session::SessionError;

/// Errors that can occur while rendering an Inertia response.
#[derive(Debug, thiserror::Error)]
pub enum InertiaError {
    /// A value folded into a prop map did not serialize to a JSON object.
    #[error("invalid context shape for {slot}: expected a JSON object, found {found}")]
    InvalidContextShape {
        /// Which slot held the value (e.g. `handler props`).
        slot: &'static str,
        /// The JSON kind that was found instead.
        found: &'static str,
    },

    /// JSON encoding of the page or a prop value failed.
    #[error("JSON encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The root template could not be found or parsed.
    #[error("root template could not be resolved: {0}")]
    TemplateResolution(#[source] minijinja::Error),

    /// The root template failed while executing.
    #[error("root template execution failed: {0}")]
    TemplateExecution(#[source] minijinja::Error),

    /// The session store failed while reading or clearing flash data.
    #[error("session store error: {0}")]
    Session(#[from] SessionError),

    /// A value could not be used as an HTTP header.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

impl IntoResponse for InertiaError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "inertia render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
