//! Route table projection for client-side URL generation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One registered route as exposed to the client.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RouteInfo {
    /// HTTP method (e.g. `GET`).
    pub method: String,
    /// Route path pattern in the host router's syntax (e.g. `/users/{id}`).
    pub path: String,
    /// Optional route name used for reverse lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
}

impl RouteInfo {
    /// Create an unnamed route entry.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            name: None,
        }
    }

    /// Give the route a name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
