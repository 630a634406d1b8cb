//! Page handlers for the demo server.
//!
//! | Method | Path | Behavior |
//! |--------|------|----------|
//! | `GET` | `/` | `Home` page |
//! | `GET` | `/users` | `Users/Index` page |
//! | `GET` | `/users/{id}` | `Users/Show` page |
//! | `POST` | `/users` | Create, flash a message, redirect to `/users` |
//! | `DELETE` | `/users/{id}` | Delete, then force a full visit to `/users` |

use axum::extract::{Path, Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use inertia_axum::{InertiaContext, InertiaError, scope};
use serde_json::json;
use tracing::info;

use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, serde::Deserialize)]
pub struct CreateUserRequest {
    /// Display name of the new user.
    pub name: String,
}

// ---------------------------------------------------------------------------
// Request scope
// ---------------------------------------------------------------------------

/// Add per-request render data before any page handler runs.
///
/// The CSRF token only reaches the root document; the current path is
/// exposed to the client as a prop.
pub async fn request_context(mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    scope::with_prop(&mut request, "current_path", path);
    scope::with_view_data(&mut request, "csrf_token", uuid::Uuid::new_v4().to_string());
    next.run(request).await
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// `GET /`
pub async fn home(inertia: InertiaContext) -> Result<Response, InertiaError> {
    inertia.render("Home", &json!({ "greeting": "Welcome" }))
}

/// `GET /users`
pub async fn list_users(
    State(state): State<AppState>,
    inertia: InertiaContext,
) -> Result<Response, InertiaError> {
    let users = state.users.list().await;
    inertia.render("Users/Index", &json!({ "users": users }))
}

/// `GET /users/{id}`
pub async fn show_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    inertia: InertiaContext,
) -> Result<Response, InertiaError> {
    match state.users.get(id).await {
        Some(user) => inertia.render("Users/Show", &json!({ "user": user })),
        None => inertia.render("Users/Missing", &json!({ "id": id })),
    }
}

// ---------------------------------------------------------------------------
// Mutations
// ---------------------------------------------------------------------------

/// `POST /users`
///
/// Stores the flash message in the caller's session (starting one if
/// needed) and answers `303 See Other` so the client follows with a GET.
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateUserRequest>,
) -> Result<Response, InertiaError> {
    let user = state.users.create(body.name).await;
    info!(user_id = user.id, "user created");

    let (session, started) = match state.sessions.session_id(&headers) {
        Some(id) => (id, false),
        None => (state.sessions.create()?, true),
    };
    state
        .sessions
        .set(&session, "flash", format!("Created {}.", user.name))?;

    let mut response = Redirect::to("/users").into_response();
    if started {
        let cookie = format!(
            "{}={session}; Path=/; HttpOnly; SameSite=Lax",
            state.sessions.cookie_name()
        );
        let value = HeaderValue::from_str(&cookie)
            .map_err(|e| InertiaError::InvalidHeader(format!("{cookie:?}: {e}")))?;
        response.headers_mut().insert(SET_COOKIE, value);
    }
    Ok(response)
}

/// `DELETE /users/{id}`
///
/// The result cannot be shown as an update of the current page, so the
/// client is sent on a full visit to the index.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    inertia: InertiaContext,
) -> Result<Response, InertiaError> {
    if state.users.remove(id).await {
        info!(user_id = id, "user deleted");
    }
    let target = format!("{}/users", inertia.inertia().config().url);
    inertia.location(&target)
}
