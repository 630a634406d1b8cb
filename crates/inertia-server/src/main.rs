//! Entry point for the Inertia demo server.

use inertia_server::{ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize logging, load configuration, and serve until terminated.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("inertia-server starting");

    let config = ServerConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        app_url = config.app_url,
        asset_version = config.asset_version,
        templates_dir = config.templates_dir,
        "configuration loaded"
    );

    start_server(&config).await?;

    info!("inertia-server stopped");
    Ok(())
}
