//! Root document rendering via `minijinja`.
//!
//! The environment is rebuilt for every HTML render, so helpers registered
//! after startup and template edits on disk are picked up without a restart.
//! HTML renders only happen on first load, which keeps this off the hot path
//! of client-side navigation.

use std::collections::BTreeMap;

use minijinja::Environment;

use crate::config::TemplateSource;
use crate::error::InertiaError;

/// Render the root template `name` from `source` against `view_data`.
///
/// `helpers` become template globals, so a function value is callable as
/// `{{ name(args) }}`.
pub(crate) fn render_root(
    source: &TemplateSource,
    name: &str,
    helpers: &BTreeMap<String, minijinja::Value>,
    view_data: &serde_json::Map<String, serde_json::Value>,
) -> Result<String, InertiaError> {
    let mut env = Environment::new();

    match source {
        TemplateSource::Directory(dir) => env.set_loader(minijinja::path_loader(dir)),
        TemplateSource::Inline(text) => env
            .add_template_owned(name.to_owned(), text.clone())
            .map_err(InertiaError::TemplateResolution)?,
    }

    for (helper, function) in helpers {
        env.add_global(helper.clone(), function.clone());
    }

    env.get_template(name)
        .map_err(InertiaError::TemplateResolution)?
        .render(view_data)
        .map_err(InertiaError::TemplateExecution)
}
