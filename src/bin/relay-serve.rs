//! Serve the input relay page and its `/process` endpoint.
//!
//! Usage:
//!   relay-serve [--addr 0.0.0.0:8080] [--site-dir dist]
//!   relay-serve --export <DIR>
//!
//! Files in the site directory override the assets compiled into the
//! binary. `--export` writes the compiled-in assets to DIR and exits.

use clap::Parser;
use input_relay::{ServerConfig, export_assets, serve};
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();

    if let Some(dir) = &config.export {
        match export_assets(dir) {
            Ok(written) => {
                println!("Exported {} files to {}", written.len(), dir.display());
                return;
            }
            Err(e) => {
                eprintln!("Error exporting files: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = serve(&config).await {
        eprintln!("Server error: {}", e);
        process::exit(1);
    }
}
