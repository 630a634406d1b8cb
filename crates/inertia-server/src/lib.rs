//! Demo host for the Inertia adapter.
//!
//! A small user directory served as Inertia pages. It exercises every part
//! of the adapter: shared props and template helpers, request-scoped props
//! and view data, partial reloads, the asset version gate, flash messages
//! carried across a redirect, and forced full-page visits.

pub mod config;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{ConfigError, ServerConfig};
pub use router::{build_router, build_state, route_table};
pub use server::{ServerError, start_server};
pub use state::{AppState, User, UserStore};
