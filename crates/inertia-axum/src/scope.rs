//! Per-request render context accumulated by upstream handlers.
//!
//! A [`RequestScope`] carries props and view-data added before the final
//! handler renders. It lives in the extensions of a single request and is
//! never reachable from another request.
//!
//! Every `with_*` call returns a fresh copy. Two scopes derived from the
//! same parent are independent: additions made to one are never observed by
//! the other.

use axum::extract::Request;
use axum::http::Extensions;
use inertia_types::Props;
use serde::Serialize;

use crate::error::InertiaError;

/// Props and view-data added to the current request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestScope {
    props: Props,
    view_data: Props,
    flashed: Props,
}

impl RequestScope {
    /// An empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this scope with `key` added to the prop overlay.
    #[must_use]
    pub fn with_prop(&self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        let mut next = self.clone();
        next.props.insert(key.into(), value.into());
        next
    }

    /// Return a copy of this scope with `key` added to the view-data.
    ///
    /// View-data only reaches the root template, never the JSON page.
    #[must_use]
    pub fn with_view_data(
        &self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        let mut next = self.clone();
        next.view_data.insert(key.into(), value.into());
        next
    }

    /// Return a copy with every field of `value` added to the prop overlay.
    ///
    /// `value` must serialize to a JSON object.
    pub fn with_props<T>(&self, value: &T) -> Result<Self, InertiaError>
    where
        T: Serialize + ?Sized,
    {
        let extra = props_from(value, "request props")?;
        let mut next = self.clone();
        next.props.extend(extra);
        Ok(next)
    }

    pub(crate) fn with_flashed(&self, flashed: Props) -> Self {
        let mut next = self.clone();
        next.flashed.extend(flashed);
        next
    }

    /// Props added for this request.
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Template-only data added for this request.
    pub const fn view_data(&self) -> &Props {
        &self.view_data
    }

    /// Flash values taken from the session for this request.
    pub const fn flashed(&self) -> &Props {
        &self.flashed
    }
}

/// Add a prop to the scope of `request`.
///
/// For use in middleware running before the rendering handler.
pub fn with_prop(
    request: &mut Request,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
) {
    update(request.extensions_mut(), |scope| scope.with_prop(key, value));
}

/// Add template-only data to the scope of `request`.
pub fn with_view_data(
    request: &mut Request,
    key: impl Into<String>,
    value: impl Into<serde_json::Value>,
) {
    update(request.extensions_mut(), |scope| scope.with_view_data(key, value));
}

/// Replace the scope in `extensions` with the one derived by `derive`.
pub(crate) fn update<F>(extensions: &mut Extensions, derive: F)
where
    F: FnOnce(&RequestScope) -> RequestScope,
{
    let current = extensions.remove::<RequestScope>().unwrap_or_default();
    extensions.insert(derive(&current));
}

/// Serialize `value` and require a JSON object.
///
/// `null` (e.g. `()` or `None`) is accepted as "no props".
pub(crate) fn props_from<T>(value: &T, slot: &'static str) -> Result<Props, InertiaError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
        serde_json::Value::Null => Ok(Props::new()),
        other => Err(InertiaError::InvalidContextShape {
            slot,
            found: json_kind(&other),
        }),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
