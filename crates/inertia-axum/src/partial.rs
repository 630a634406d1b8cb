//! Partial-reload filtering.
//!
//! A partial reload asks the server to re-render the current component with
//! only some of its props. The client names the component it is reloading in
//! `X-Inertia-Partial-Component` and the wanted keys in
//! `X-Inertia-Partial-Data`. The filter only applies when the named component
//! is the one being rendered; a stale or mismatched request gets every prop.

use std::collections::BTreeSet;

use axum::http::HeaderMap;
use inertia_types::headers::{X_INERTIA_PARTIAL_COMPONENT, X_INERTIA_PARTIAL_DATA};

/// The set of prop keys a render is restricted to.
///
/// `None` means no filtering. An active filter with an empty set lets no
/// prop through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialFilter {
    only: Option<BTreeSet<String>>,
}

impl PartialFilter {
    /// Derive the filter for rendering `component` from request headers.
    pub fn from_headers(headers: &HeaderMap, component: &str) -> Self {
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

        let (Some(data), Some(target)) = (
            header(X_INERTIA_PARTIAL_DATA),
            header(X_INERTIA_PARTIAL_COMPONENT),
        ) else {
            return Self::default();
        };

        if target != component {
            return Self::default();
        }

        Self {
            only: Some(
                data.split(',')
                    .map(str::trim)
                    .filter(|key| !key.is_empty())
                    .map(str::to_owned)
                    .collect(),
            ),
        }
    }

    /// Whether the filter restricts anything.
    pub const fn is_active(&self) -> bool {
        self.only.is_some()
    }

    /// Whether `key` passes the filter.
    pub fn allows(&self, key: &str) -> bool {
        self.only.as_ref().is_none_or(|only| only.contains(key))
    }

    /// The requested keys, or `None` when inactive.
    pub const fn keys(&self) -> Option<&BTreeSet<String>> {
        self.only.as_ref()
    }
}
