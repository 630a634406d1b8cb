//! Protocol tests driving a full Axum router.
//!
//! Tests use the `Router` directly via `tower::ServiceExt` without starting
//! a TCP server, so they exercise middleware ordering, extraction and the
//! response contract end to end.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use inertia_axum::{
    Inertia, InertiaConfig, InertiaContext, InertiaError, MemorySessionStore, Page, StaticRoutes,
    scope,
};
use serde_json::{Value, json};
use tower::ServiceExt;

const ROOT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>{{ title }}</title></head>
<body><div id="app" data-page="{{ marshal(page) }}"></div></body>
</html>"#;

fn make_inertia(sessions: Option<Arc<MemorySessionStore>>) -> Arc<Inertia> {
    let config = InertiaConfig::new("http://localhost:8080", "v2")
        .with_inline_template("app.html", ROOT_TEMPLATE);
    let mut inertia = Inertia::new(config).with_route_table(Arc::new(
        StaticRoutes::new()
            .route("GET", "/", "home")
            .route("GET", "/users/{id}", "users.show"),
    ));
    if let Some(store) = sessions {
        inertia = inertia.with_session_store(store);
    }
    inertia.share("a", 1);
    inertia.share("b", 2);
    inertia.share("x", "shared");
    Arc::new(inertia)
}

async fn add_request_props(mut request: Request<Body>, next: Next) -> Response {
    scope::with_prop(&mut request, "c", 3);
    scope::with_view_data(&mut request, "title", "Inertia Test");
    next.run(request).await
}

async fn home(inertia: InertiaContext) -> Result<Response, InertiaError> {
    inertia.render("Home", &())
}

async fn show_user(inertia: InertiaContext) -> Result<Response, InertiaError> {
    inertia.render("Users/Show", &json!({ "x": "handler", "user": { "name": "Ada" } }))
}

async fn partial_target(inertia: InertiaContext) -> Result<Response, InertiaError> {
    inertia.render("X", &())
}

async fn inspect(inertia: InertiaContext) -> Result<Response, InertiaError> {
    let request = inertia.request();
    let props = json!({
        "method": request.method.as_str(),
        "id": request.params.get("id"),
        "scoped_c": inertia.scope().props().get("c"),
    });
    inertia.render("Inspect", &props)
}

async fn destroy(inertia: InertiaContext) -> Result<Response, InertiaError> {
    inertia.location("http://localhost:8080/goodbye")
}

fn build_router(inertia: &Arc<Inertia>) -> Router {
    let router = Router::new()
        .route("/", get(home))
        .route("/users/{id}", get(show_user).post(show_user))
        .route("/x", get(partial_target))
        .route("/inspect/{id}", post(inspect))
        .route("/destroy", post(destroy))
        .layer(middleware::from_fn(add_request_props));
    inertia.apply(router).with_state(Arc::clone(inertia))
}

fn inertia_get(uri: &str) -> axum::http::request::Builder {
    Request::get(uri)
        .header("X-Inertia", "true")
        .header("X-Inertia-Version", "v2")
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_to_page(body: Body) -> Page {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}

// =========================================================================
// Render mode
// =========================================================================

#[tokio::test]
async fn test_first_visit_returns_html_document() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "content-type"), Some("text/html"));
    assert!(header(&response, "x-inertia").is_none());

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("<title>Inertia Test</title>"));
    assert!(html.contains("data-page=\""));
    assert!(html.contains("&quot;component&quot;:&quot;Home&quot;"));
}

#[tokio::test]
async fn test_inertia_visit_returns_json_page() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(inertia_get("/users/7?tab=posts").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header(&response, "content-type"), Some("application/json"));
    assert_eq!(header(&response, "x-inertia"), Some("true"));
    assert_eq!(header(&response, "vary"), Some("Accept"));

    let page = body_to_page(response.into_body()).await;
    assert_eq!(page.component, "Users/Show");
    assert_eq!(page.url, "/users/7?tab=posts");
    assert_eq!(page.version, "v2");
    assert_eq!(page.props["a"], json!(1));
    assert_eq!(page.props["b"], json!(2));
    assert_eq!(page.props["c"], json!(3));
    assert_eq!(page.props["user"]["name"], "Ada");
    assert_eq!(page.props["params"], json!({ "id": "7" }));
    assert_eq!(page.routes.map(|r| r.len()), Some(2));
}

#[tokio::test]
async fn test_view_data_not_in_json_page() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(inertia_get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    assert!(!page.props.contains_key("title"));
}

#[tokio::test]
async fn test_handler_props_win_over_shared() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(inertia_get("/users/1").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    assert_eq!(page.props["x"], json!("handler"));
}

// =========================================================================
// Partial reloads
// =========================================================================

#[tokio::test]
async fn test_partial_reload_filters_props() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            inertia_get("/x")
                .header("X-Inertia-Partial-Component", "X")
                .header("X-Inertia-Partial-Data", "a,c")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    let props: Value = serde_json::to_value(&page.props).unwrap();
    assert_eq!(props, json!({ "a": 1, "c": 3 }));
}

#[tokio::test]
async fn test_partial_reload_with_only_separators_sends_no_props() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            inertia_get("/x")
                .header("X-Inertia-Partial-Component", "X")
                .header("X-Inertia-Partial-Data", ",")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    assert!(page.props.is_empty(), "unexpected props {:?}", page.props);
}

#[tokio::test]
async fn test_partial_reload_for_other_component_not_filtered() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            inertia_get("/x")
                .header("X-Inertia-Partial-Component", "Elsewhere")
                .header("X-Inertia-Partial-Data", "a,c")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    for key in ["a", "b", "c", "x", "params"] {
        assert!(page.props.contains_key(key), "expected prop {key}");
    }
}

// =========================================================================
// Version gate
// =========================================================================

#[tokio::test]
async fn test_stale_get_gets_version_conflict() {
    let inertia = make_inertia(None);
    let reached = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&reached);

    let router = Router::new().route(
        "/users/{id}",
        get(move |inertia: InertiaContext| {
            let flag = Arc::clone(&flag);
            async move {
                flag.store(true, Ordering::SeqCst);
                inertia.render("Users/Show", &())
            }
        }),
    );
    let router = inertia.apply(router).with_state(Arc::clone(&inertia));

    let response = router
        .oneshot(
            Request::get("/users/7?tab=posts")
                .header("X-Inertia", "true")
                .header("X-Inertia-Version", "v1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        header(&response, "x-inertia-location"),
        Some("http://localhost:8080/users/7?tab=posts")
    );
    assert!(!reached.load(Ordering::SeqCst), "handler must not run");
}

#[tokio::test]
async fn test_missing_version_header_is_stale() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            Request::get("/")
                .header("X-Inertia", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_stale_post_passes_through() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/users/7")
                .header("X-Inertia", "true")
                .header("X-Inertia-Version", "v1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_to_page(response.into_body()).await;
    assert_eq!(page.component, "Users/Show");
}

#[tokio::test]
async fn test_plain_request_never_gated() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            Request::get("/")
                .header("X-Inertia-Version", "ancient")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =========================================================================
// Flash bridge
// =========================================================================

#[tokio::test]
async fn test_flash_shown_exactly_once() {
    let store = Arc::new(MemorySessionStore::new());
    let session = store.create().unwrap();
    store.set(&session, "flash", "saved").unwrap();
    let inertia = make_inertia(Some(Arc::clone(&store)));
    let cookie = format!("session_id={session}");

    let first = build_router(&inertia)
        .oneshot(inertia_get("/").header("Cookie", &cookie).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let page = body_to_page(first.into_body()).await;
    assert_eq!(page.props["flash"], json!("saved"));
    assert_eq!(store.get_value(&session, "flash").unwrap(), None);

    let second = build_router(&inertia)
        .oneshot(inertia_get("/").header("Cookie", &cookie).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let page = body_to_page(second.into_body()).await;
    assert!(!page.props.contains_key("flash"));
}

#[tokio::test]
async fn test_flash_not_visible_to_other_sessions() {
    let store = Arc::new(MemorySessionStore::new());
    let mine = store.create().unwrap();
    let theirs = store.create().unwrap();
    store.set(&mine, "message", "welcome back").unwrap();
    let inertia = make_inertia(Some(Arc::clone(&store)));

    let response = build_router(&inertia)
        .oneshot(
            inertia_get("/")
                .header("Cookie", format!("session_id={theirs}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let page = body_to_page(response.into_body()).await;
    assert!(!page.props.contains_key("message"));
    assert_eq!(
        store.get_value(&mine, "message").unwrap(),
        Some(json!("welcome back"))
    );
}

#[tokio::test]
async fn test_stale_client_keeps_flash() {
    let store = Arc::new(MemorySessionStore::new());
    let session = store.create().unwrap();
    store.set(&session, "flash", "saved").unwrap();
    let inertia = make_inertia(Some(Arc::clone(&store)));

    let response = build_router(&inertia)
        .oneshot(
            Request::get("/")
                .header("X-Inertia", "true")
                .header("X-Inertia-Version", "v1")
                .header("Cookie", format!("session_id={session}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(store.get_value(&session, "flash").unwrap(), Some(json!("saved")));
}

#[tokio::test]
async fn test_null_flash_left_in_session() {
    let store = Arc::new(MemorySessionStore::new());
    let session = store.create().unwrap();
    store.set(&session, "flash", Value::Null).unwrap();
    let inertia = make_inertia(Some(Arc::clone(&store)));

    let response = build_router(&inertia)
        .oneshot(
            inertia_get("/")
                .header("Cookie", format!("session_id={session}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    assert!(!page.props.contains_key("flash"));
    assert_eq!(store.get_value(&session, "flash").unwrap(), Some(Value::Null));
}

#[tokio::test]
async fn test_configured_flash_keys_replace_defaults() {
    let store = Arc::new(MemorySessionStore::new());
    let session = store.create().unwrap();
    store.set(&session, "notice", "custom").unwrap();
    store.set(&session, "flash", "default key").unwrap();

    let config = InertiaConfig::new("http://localhost:8080", "v2")
        .with_inline_template("app.html", ROOT_TEMPLATE)
        .with_flash_keys(["notice"]);
    let sessions = Arc::clone(&store);
    let inertia = Arc::new(Inertia::new(config).with_session_store(sessions));

    let response = build_router(&inertia)
        .oneshot(
            inertia_get("/")
                .header("Cookie", format!("session_id={session}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    assert_eq!(page.props["notice"], json!("custom"));
    assert!(!page.props.contains_key("flash"));
    assert_eq!(store.get_value(&session, "notice").unwrap(), None);
    assert_eq!(
        store.get_value(&session, "flash").unwrap(),
        Some(json!("default key"))
    );
}

// =========================================================================
// Handler context
// =========================================================================

#[tokio::test]
async fn test_context_exposes_request_and_scope() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/inspect/42")
                .header("X-Inertia", "true")
                .header("X-Inertia-Version", "v2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let page = body_to_page(response.into_body()).await;
    assert_eq!(page.props["method"], json!("POST"));
    assert_eq!(page.props["id"], json!("42"));
    assert_eq!(page.props["scoped_c"], json!(3));
}

// =========================================================================
// Explicit location
// =========================================================================

#[tokio::test]
async fn test_location_helper_forces_visit() {
    let router = build_router(&make_inertia(None));

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/destroy")
                .header("X-Inertia", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        header(&response, "x-inertia-location"),
        Some("http://localhost:8080/goodbye")
    );
}

// =========================================================================
// Failures
// =========================================================================

#[tokio::test]
async fn test_template_failure_is_server_error() {
    let inertia = Arc::new(Inertia::new(
        InertiaConfig::new("", "v2").with_inline_template("app.html", "{{ missing_helper() }}"),
    ));
    let router = inertia
        .apply(Router::new().route("/", get(home)))
        .with_state(Arc::clone(&inertia));

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
