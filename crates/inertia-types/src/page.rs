//! The page object: what the client-side router mounts for a navigation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::props::Props;
use crate::route::RouteInfo;

/// The canonical result of one navigation.
///
/// Serialized as the JSON body of Inertia responses and embedded into the
/// root document on first load. `props` already reflects the shared,
/// request-scoped and handler layers after partial-reload filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Page {
    /// Client-side component to mount (e.g. `Users/Show`).
    pub component: String,
    /// Merged props handed to the component.
    #[ts(type = "Record<string, unknown>")]
    pub props: Props,
    /// The request URL as originally received (path and query).
    pub url: String,
    /// The server's current asset version.
    pub version: String,
    /// Route table projection for client-side URL generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub routes: Option<Vec<RouteInfo>>,
}

impl Page {
    /// Create a page with no route table attached.
    pub fn new(
        component: impl Into<String>,
        props: Props,
        url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            props,
            url: url.into(),
            version: version.into(),
            routes: None,
        }
    }

    /// Attach a route table projection.
    #[must_use]
    pub fn with_routes(mut self, routes: Vec<RouteInfo>) -> Self {
        self.routes = Some(routes);
        self
    }
}
