//! Server-wide props and template helpers.

use std::collections::BTreeMap;

use inertia_types::Props;

/// Props and helper functions visible to every render.
///
/// Owned by [`Inertia`](crate::Inertia) behind a read-write lock.
#[derive(Debug, Clone)]
pub struct SharedState {
    pub(crate) props: Props,
    pub(crate) functions: BTreeMap<String, minijinja::Value>,
}

impl SharedState {
    /// Shared state holding only the built-in `marshal` helper.
    pub fn new() -> Self {
        let mut functions = BTreeMap::new();
        functions.insert(
            String::from("marshal"),
            minijinja::Value::from_function(marshal),
        );
        Self {
            props: Props::new(),
            functions,
        }
    }

    /// Shared props.
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Names of the registered template helpers.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a template value to a JSON string.
///
/// The result is a plain string, so HTML auto-escaping still applies and the
/// output is safe inside a quoted attribute such as `data-page="..."`.
fn marshal(value: minijinja::Value) -> Result<String, minijinja::Error> {
    serde_json::to_string(&value).map_err(|e| {
        minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            format!("marshal failed: {e}"),
        )
    })
}
