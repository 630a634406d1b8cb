//! Axum extractor handing the render entry point to handlers.
//!
//! ```rust,ignore
//! async fn show(inertia: InertiaContext, Path(id): Path<u64>) -> Result<Response, InertiaError> {
//!     inertia.render("Users/Show", &json!({ "user": load_user(id) }))
//! }
//! ```

use std::collections::BTreeMap;
use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts, RawPathParams};
use axum::http::request::Parts;
use axum::response::Response;
use serde::Serialize;

use crate::error::InertiaError;
use crate::inertia::Inertia;
use crate::location::location;
use crate::request::RequestInfo;
use crate::scope::RequestScope;

/// Everything a handler needs to render an Inertia response.
///
/// Extracted from the request parts. The adapter itself comes from router
/// state, so the state type must provide `Arc<Inertia>` via [`FromRef`].
#[derive(Debug, Clone)]
pub struct InertiaContext {
    inertia: Arc<Inertia>,
    request: RequestInfo,
    scope: RequestScope,
}

impl InertiaContext {
    /// Render `component` with `props` merged over the shared and scoped
    /// layers.
    pub fn render<T>(&self, component: &str, props: &T) -> Result<Response, InertiaError>
    where
        T: Serialize + ?Sized,
    {
        self.inertia
            .render(&self.request, &self.scope, component, props)
    }

    /// Add a prop to this request's scope before rendering.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.scope = self.scope.with_prop(key, value);
        self
    }

    /// Add template-only data to this request's scope before rendering.
    #[must_use]
    pub fn with_view_data(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.scope = self.scope.with_view_data(key, value);
        self
    }

    /// Force the client to visit `target` with a full page load.
    pub fn location(&self, target: &str) -> Result<Response, InertiaError> {
        location(target)
    }

    /// The adapter.
    pub const fn inertia(&self) -> &Arc<Inertia> {
        &self.inertia
    }

    /// The request being rendered.
    pub const fn request(&self) -> &RequestInfo {
        &self.request
    }

    /// The request's accumulated scope.
    pub const fn scope(&self) -> &RequestScope {
        &self.scope
    }
}

impl<S> FromRequestParts<S> for InertiaContext
where
    Arc<Inertia>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params: BTreeMap<String, String> = RawPathParams::from_request_parts(parts, state)
            .await
            .map(|raw| {
                raw.iter()
                    .map(|(name, value)| (name.to_owned(), value.to_owned()))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            inertia: Arc::<Inertia>::from_ref(state),
            request: RequestInfo::from_parts(parts, params),
            scope: parts.extensions.get::<RequestScope>().cloned().unwrap_or_default(),
        })
    }
}
