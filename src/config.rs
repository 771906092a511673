//! Command-line configuration for `relay-serve`.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default directory searched for page assets before the embedded copies.
pub const DEFAULT_SITE_DIR: &str = "dist";

/// Serve the input relay page and its `/process` endpoint.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "relay-serve", version, about)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Directory whose files take precedence over the embedded assets
    /// (typically the wasm-pack output of the page).
    #[arg(long, default_value = DEFAULT_SITE_DIR)]
    pub site_dir: PathBuf,

    /// Export the embedded assets to DIR and exit.
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            export: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["relay-serve"]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.site_dir, PathBuf::from("dist"));
        assert!(config.export.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::try_parse_from([
            "relay-serve",
            "--addr",
            "127.0.0.1:3000",
            "--site-dir",
            "wasm-ui/pkg",
        ])
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.site_dir, PathBuf::from("wasm-ui/pkg"));
    }

    #[test]
    fn test_export_takes_directory() {
        let config = ServerConfig::try_parse_from(["relay-serve", "--export", "out"]).unwrap();
        assert_eq!(config.export, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_export_requires_value() {
        assert!(ServerConfig::try_parse_from(["relay-serve", "--export"]).is_err());
    }

    #[test]
    fn test_rejects_bad_addr() {
        assert!(ServerConfig::try_parse_from(["relay-serve", "--addr", "nowhere"]).is_err());
    }
}
