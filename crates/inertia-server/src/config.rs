//! Configuration for the demo server.
//!
//! All configuration is loaded from environment variables. Every variable
//! has a default, so the server starts with no environment at all.

use inertia_axum::InertiaConfig;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// The environment variable name.
        name: &'static str,
        /// Why parsing failed.
        reason: String,
    },
}

/// Complete server configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
    /// Public base URL used in version-conflict locations.
    pub app_url: String,
    /// Current asset version.
    pub asset_version: String,
    /// Directory holding the root template.
    pub templates_dir: String,
    /// Root template file name.
    pub root_template: String,
    /// Cookie carrying the session id.
    pub session_cookie: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- listen port (default `8080`)
    /// - `INERTIA_URL` -- public base URL (default `http://localhost:{PORT}`)
    /// - `INERTIA_VERSION` -- asset version (default `1`)
    /// - `TEMPLATES_DIR` -- template directory (default `templates`)
    /// - `INERTIA_ROOT_TEMPLATE` -- root template name (default `app.html`)
    /// - `SESSION_COOKIE` -- session cookie name (default `session_id`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_owned());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_owned())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: "PORT",
                reason: e.to_string(),
            })?;

        let app_url =
            std::env::var("INERTIA_URL").unwrap_or_else(|_| format!("http://localhost:{port}"));
        let asset_version = std::env::var("INERTIA_VERSION").unwrap_or_else(|_| "1".to_owned());
        let templates_dir =
            std::env::var("TEMPLATES_DIR").unwrap_or_else(|_| "templates".to_owned());
        let root_template =
            std::env::var("INERTIA_ROOT_TEMPLATE").unwrap_or_else(|_| "app.html".to_owned());
        let session_cookie =
            std::env::var("SESSION_COOKIE").unwrap_or_else(|_| "session_id".to_owned());

        Ok(Self {
            host,
            port,
            app_url: app_url.trim_end_matches('/').to_owned(),
            asset_version,
            templates_dir,
            root_template,
            session_cookie,
        })
    }

    /// The adapter configuration derived from this server configuration.
    pub fn inertia(&self) -> InertiaConfig {
        InertiaConfig::new(&self.app_url, &self.asset_version)
            .with_template_dir(&self.templates_dir, &self.root_template)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            app_url: String::from("http://localhost:8080"),
            asset_version: String::from("1"),
            templates_dir: String::from("templates"),
            root_template: String::from("app.html"),
            session_cookie: String::from("session_id"),
        }
    }
}
