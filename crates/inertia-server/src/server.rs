//! Listener setup for the demo server.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;
use crate::router::{build_router, build_state};

/// Build the adapter and router from `config`, then serve on
/// `host:port` until the process exits.
///
/// # Errors
///
/// [`ServerError::Bind`] for an unparsable address or a port already in
/// use, [`ServerError::Serve`] if the accept loop fails.
pub async fn start_server(config: &ServerConfig) -> Result<(), ServerError> {
    let raw = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = raw
        .parse()
        .map_err(|e| ServerError::Bind(format!("{raw} is not a socket address: {e}")))?;

    let router = build_router(build_state(config));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(format!("{addr}: {e}")))?;

    info!(%addr, app_url = config.app_url, "server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Serve(e.to_string()))?;

    Ok(())
}

/// Why the demo server stopped.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listen address was invalid or could not be bound.
    #[error("cannot listen: {0}")]
    Bind(String),

    /// The accept loop returned an I/O error.
    #[error("server failed: {0}")]
    Serve(String),
}
