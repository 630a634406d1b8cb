//! Page building and response writing.
//!
//! # Prop layers
//!
//! Props are merged in three layers, each overriding the one before:
//!
//! 1. shared props (plus this request's flash values)
//! 2. request-scoped props added by upstream handlers
//! 3. props supplied by the rendering handler
//!
//! The partial-reload filter applies to each key regardless of its layer.
//! The reserved `params` prop (matched route parameters) is added last and
//! passes through the same filter.
//!
//! # Response mode
//!
//! A request carrying `X-Inertia` receives the page as JSON. Any other
//! request receives the root HTML document with the page embedded in its
//! view-data under `page`.

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, VARY};
use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use inertia_types::headers::{PAGE_VIEW_KEY, PARAMS_PROP, X_INERTIA};
use inertia_types::{Page, Props, merge_layer};
use serde::Serialize;
use tracing::debug;

use crate::error::InertiaError;
use crate::inertia::Inertia;
use crate::partial::PartialFilter;
use crate::request::RequestInfo;
use crate::scope::{RequestScope, props_from};
use crate::template::render_root;

impl Inertia {
    /// Render `component` for `request`.
    ///
    /// `props` must serialize to a JSON object (or `null` for no props).
    /// Returns the JSON page for Inertia requests and the root document
    /// otherwise. Any failure aborts the whole render.
    pub fn render<T>(
        &self,
        request: &RequestInfo,
        scope: &RequestScope,
        component: &str,
        props: &T,
    ) -> Result<Response, InertiaError>
    where
        T: Serialize + ?Sized,
    {
        let handler_props = props_from(props, "handler props")?;
        let page = self.build_page(request, scope, component, &handler_props);

        if request.is_inertia() {
            return json_response(&page);
        }

        let mut view_data: serde_json::Map<String, serde_json::Value> = scope
            .view_data()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        view_data.insert(PAGE_VIEW_KEY.to_owned(), serde_json::to_value(&page)?);

        let helpers = self.read_shared().functions.clone();
        let html = render_root(
            &self.config().template_source,
            &self.config().root_template,
            &helpers,
            &view_data,
        )?;

        Ok(html_response(html))
    }

    /// Merge every prop layer for `component` into a [`Page`].
    pub fn build_page(
        &self,
        request: &RequestInfo,
        scope: &RequestScope,
        component: &str,
        handler_props: &Props,
    ) -> Page {
        let filter = PartialFilter::from_headers(&request.headers, component);
        if filter.is_active() {
            debug!(component, keys = ?filter.keys(), "partial reload");
        }

        let mut props = Props::new();
        {
            let shared = self.read_shared();
            merge_layer(&mut props, shared.props(), filter.keys());
        }
        merge_layer(&mut props, scope.flashed(), filter.keys());
        merge_layer(&mut props, scope.props(), filter.keys());
        merge_layer(&mut props, handler_props, filter.keys());

        if filter.allows(PARAMS_PROP) {
            let params: serde_json::Map<String, serde_json::Value> = request
                .params
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect();
            props.insert(PARAMS_PROP.to_owned(), serde_json::Value::Object(params));
        }

        let page = Page::new(component, props, request.url.as_str(), self.version());
        match &self.routes {
            Some(table) => page.with_routes(table.list_routes()),
            None => page,
        }
    }
}

/// JSON page response with the protocol's negotiation headers.
fn json_response(page: &Page) -> Result<Response, InertiaError> {
    let body = serde_json::to_vec(page)?;

    let mut response = Body::from(body).into_response();
    let headers = response.headers_mut();
    headers.insert(VARY, HeaderValue::from_static("Accept"));
    headers.insert(HeaderName::from_static(X_INERTIA), HeaderValue::from_static("true"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(response)
}

fn html_response(html: String) -> Response {
    ([(CONTENT_TYPE, HeaderValue::from_static("text/html"))], html).into_response()
}
