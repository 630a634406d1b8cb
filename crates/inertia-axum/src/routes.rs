//! Route table collaborator.
//!
//! Axum does not expose the routes registered on a [`Router`](axum::Router),
//! so the application describes them through [`RouteTable`]. When a table is
//! attached to the adapter, every page carries its projection so the client
//! can build URLs for named routes.

use inertia_types::RouteInfo;

/// Source of the route list attached to each page.
pub trait RouteTable: Send + Sync {
    /// List the routes the client may generate URLs for.
    fn list_routes(&self) -> Vec<RouteInfo>;
}

/// A fixed route list filled in while the router is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticRoutes {
    routes: Vec<RouteInfo>,
}

impl StaticRoutes {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Add a named route.
    #[must_use]
    pub fn route(
        mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.routes.push(RouteInfo::new(method, path).named(name));
        self
    }
}

impl FromIterator<RouteInfo> for StaticRoutes {
    fn from_iter<T: IntoIterator<Item = RouteInfo>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl RouteTable for StaticRoutes {
    fn list_routes(&self) -> Vec<RouteInfo> {
        self.routes.clone()
    }
}
