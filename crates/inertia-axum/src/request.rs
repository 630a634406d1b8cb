//! The render-time view of an incoming request.

use std::collections::BTreeMap;

use axum::extract::OriginalUri;
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Uri};
use inertia_types::headers::X_INERTIA;

/// What the page builder needs to know about the current request.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    /// HTTP method.
    pub method: Method,
    /// Path and query as originally received by the server.
    pub url: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Matched route parameters.
    pub params: BTreeMap<String, String>,
}

impl RequestInfo {
    /// Describe a request with no headers and no route parameters.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            params: BTreeMap::new(),
        }
    }

    /// Build from request parts. Route parameters are supplied by the caller.
    pub fn from_parts(parts: &Parts, params: BTreeMap<String, String>) -> Self {
        Self {
            method: parts.method.clone(),
            url: original_url(&parts.uri, parts.extensions.get::<OriginalUri>()),
            headers: parts.headers.clone(),
            params,
        }
    }

    /// Add a header. Used by hosts and tests that build requests by hand.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Add a route parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Whether the client speaks the Inertia protocol.
    pub fn is_inertia(&self) -> bool {
        is_inertia_request(&self.headers)
    }
}

/// `X-Inertia` is present with a non-empty value.
pub fn is_inertia_request(headers: &HeaderMap) -> bool {
    headers
        .get(X_INERTIA)
        .is_some_and(|value| !value.as_bytes().is_empty())
}

/// Path and query of the request before any router nesting stripped a prefix.
pub fn original_url(uri: &Uri, original: Option<&OriginalUri>) -> String {
    let uri = original.map_or(uri, |o| &o.0);
    uri.path_and_query()
        .map_or_else(|| uri.path().to_owned(), |pq| pq.as_str().to_owned())
}
