//! Forced full-page visits.

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use inertia_types::headers::X_INERTIA_LOCATION;

use crate::error::InertiaError;

/// A `409 Conflict` telling the client router to visit `target` with a full
/// browser navigation.
///
/// Used by the version gate and by handlers whose outcome cannot be shown as
/// a page update (e.g. after a destructive action, or to leave the SPA).
pub fn location(target: &str) -> Result<Response, InertiaError> {
    let value = HeaderValue::from_str(target)
        .map_err(|e| InertiaError::InvalidHeader(format!("{target:?}: {e}")))?;

    let mut response = StatusCode::CONFLICT.into_response();
    response
        .headers_mut()
        .insert(HeaderName::from_static(X_INERTIA_LOCATION), value);
    Ok(response)
}
