//! Axum router construction for the demo server.

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use inertia_axum::{Inertia, MemorySessionStore, StaticRoutes};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::{AppState, UserStore};

/// Routes exposed to the client for URL generation.
pub fn route_table() -> StaticRoutes {
    StaticRoutes::new()
        .route("GET", "/", "home")
        .route("GET", "/users", "users.index")
        .route("POST", "/users", "users.store")
        .route("GET", "/users/{id}", "users.show")
        .route("DELETE", "/users/{id}", "users.destroy")
}

/// Build the adapter and application state from configuration.
///
/// Shares the application name with every page and registers the `asset`
/// template helper, which appends the asset version to a build path.
pub fn build_state(config: &ServerConfig) -> AppState {
    let sessions = Arc::new(MemorySessionStore::with_cookie_name(&config.session_cookie));

    let inertia = Inertia::new(config.inertia())
        .with_session_store(sessions.clone())
        .with_route_table(Arc::new(route_table()));

    inertia.share("app_name", "Inertia Axum Demo");
    let version = config.asset_version.clone();
    inertia.share_func("asset", move |path: String| {
        format!("/build/{path}?v={version}")
    });

    AppState {
        inertia: Arc::new(inertia),
        sessions,
        users: Arc::new(UserStore::default()),
    }
}

/// Build the complete Axum router for the demo server.
///
/// Layers, outermost first:
/// - HTTP tracing
/// - version gate and flash bridge (see [`Inertia::apply`])
/// - request context (current path prop, CSRF view data)
pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(handlers::home))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/{id}",
            get(handlers::show_user).delete(handlers::delete_user),
        )
        .layer(middleware::from_fn(handlers::request_context));

    state
        .inertia
        .apply(router)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
