//! Adapter configuration.
//!
//! [`InertiaConfig`] carries everything the adapter needs to know about the
//! host application: the public base URL (used to build version-conflict
//! locations), the current asset version, where the root document template
//! lives, and which session keys are treated as one-shot flash data.

use std::path::PathBuf;

/// Session keys moved into the shared layer by the flash bridge by default.
pub const DEFAULT_FLASH_KEYS: [&str; 2] = ["flash", "message"];

/// Where the root document template is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates are read from this directory on every render.
    Directory(PathBuf),
    /// The root template is compiled from an in-memory source string.
    Inline(String),
}

/// Configuration for an [`Inertia`](crate::Inertia) adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InertiaConfig {
    /// Public base URL of the application (e.g. `https://app.example.com`).
    ///
    /// Prefixed to the request URL in `X-Inertia-Location` on a version
    /// conflict. May be empty to emit a relative location.
    pub url: String,
    /// Current asset version. Clients reporting a different version on GET
    /// are forced into a full page visit.
    pub version: String,
    /// Name of the root document template (e.g. `app.html`).
    pub root_template: String,
    /// Where the root template is loaded from.
    pub template_source: TemplateSource,
    /// Session keys consumed by the flash bridge.
    pub flash_keys: Vec<String>,
}

impl InertiaConfig {
    /// Create a configuration that loads `app.html` from `templates/`.
    pub fn new(url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            version: version.into(),
            root_template: String::from("app.html"),
            template_source: TemplateSource::Directory(PathBuf::from("templates")),
            flash_keys: DEFAULT_FLASH_KEYS.iter().map(|k| (*k).to_owned()).collect(),
        }
    }

    /// Load the root template `root_template` from `dir`.
    #[must_use]
    pub fn with_template_dir(
        mut self,
        dir: impl Into<PathBuf>,
        root_template: impl Into<String>,
    ) -> Self {
        self.template_source = TemplateSource::Directory(dir.into());
        self.root_template = root_template.into();
        self
    }

    /// Compile the root template from an in-memory source.
    ///
    /// The name still matters: its extension selects the auto-escape mode,
    /// so HTML documents should use a `.html` name.
    #[must_use]
    pub fn with_inline_template(
        mut self,
        root_template: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        self.template_source = TemplateSource::Inline(source.into());
        self.root_template = root_template.into();
        self
    }

    /// Replace the set of session keys treated as flash data.
    #[must_use]
    pub fn with_flash_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.flash_keys = keys.into_iter().map(Into::into).collect();
        self
    }
}
