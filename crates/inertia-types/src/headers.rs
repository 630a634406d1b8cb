//! Header names used by the Inertia protocol.
//!
//! All names are lowercase so they can be handed directly to
//! `http::HeaderName::from_static`.

/// Request: presence flags an Inertia-aware client. Response: always `true`
/// on JSON page responses.
pub const X_INERTIA: &str = "x-inertia";

/// Request: the asset version the client currently has loaded.
pub const X_INERTIA_VERSION: &str = "x-inertia-version";

/// Request: comma-separated prop keys requested by a partial reload.
pub const X_INERTIA_PARTIAL_DATA: &str = "x-inertia-partial-data";

/// Request: component a partial reload targets.
pub const X_INERTIA_PARTIAL_COMPONENT: &str = "x-inertia-partial-component";

/// Response: URL the client must perform a full browser visit to.
pub const X_INERTIA_LOCATION: &str = "x-inertia-location";

/// Reserved prop key holding the matched route parameters.
pub const PARAMS_PROP: &str = "params";

/// Reserved view-data key holding the page object in HTML mode.
pub const PAGE_VIEW_KEY: &str = "page";
