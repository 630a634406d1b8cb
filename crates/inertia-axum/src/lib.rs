//! Inertia page protocol adapter for Axum.
//!
//! Lets a conventional server-rendered Axum application drive an Inertia
//! client-side router. The first visit receives a full HTML document with
//! the page object embedded; subsequent navigations carry `X-Inertia` and
//! receive the page object as JSON.
//!
//! # Components
//!
//! - [`Inertia`] -- configuration plus server-wide shared props and template
//!   helpers
//! - [`RequestScope`] -- per-request props and view-data added by upstream
//!   handlers
//! - [`Inertia::render`] / [`InertiaContext::render`] -- page building and
//!   JSON/HTML response writing
//! - [`version_gate`] -- forces a full reload for clients on stale assets
//! - [`flash_bridge`] -- moves one-shot session values into the next render
//! - [`location`] -- explicit full-page redirect
//!
//! # Wiring
//!
//! ```rust,ignore
//! let inertia = Arc::new(Inertia::new(InertiaConfig::new("https://app.test", "v1")));
//! let router = Router::new().route("/", get(home));
//! let router = inertia.apply(router).with_state(inertia);
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod flash;
pub mod inertia;
pub mod location;
pub mod partial;
pub mod render;
pub mod request;
pub mod routes;
pub mod scope;
pub mod session;
pub mod shared;
mod template;
pub mod version;

// Re-export primary types for convenience.
pub use config::{InertiaConfig, TemplateSource};
pub use error::InertiaError;
pub use extract::InertiaContext;
pub use flash::flash_bridge;
pub use inertia::Inertia;
pub use inertia_types::{Page, Props, RouteInfo};
pub use location::location;
pub use partial::PartialFilter;
pub use request::RequestInfo;
pub use routes::{RouteTable, StaticRoutes};
pub use scope::RequestScope;
pub use session::{MemorySessionStore, SessionData, SessionError, SessionStore};
pub use shared::SharedState;
pub use version::version_gate;
