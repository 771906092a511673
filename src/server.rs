//! HTTP server wiring.

use crate::assets::serve_embedded;
use crate::config::ServerConfig;
use crate::error::RelayError;
use crate::process::{PROCESS_PATH, process_route};
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Build the application router.
///
/// `/process` goes to the echo endpoint. Everything else is looked up in
/// the site directory, then among the embedded assets.
pub fn router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).fallback(get(serve_embedded));

    Router::new()
        .route(PROCESS_PATH, process_route())
        .fallback_service(site)
}

/// Bind to the configured address and serve until the process exits.
pub async fn serve(config: &ServerConfig) -> Result<(), RelayError> {
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| RelayError::Bind {
            addr: config.addr,
            source,
        })?;

    tracing::info!(
        addr = %config.addr,
        site_dir = %config.site_dir.display(),
        "listening on http://{}",
        config.addr
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}
