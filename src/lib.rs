//! # input-relay
//!
//! Server half of a one-page text relay. The page (the `wasm-ui` crate)
//! posts the contents of a text area to `/process` as `text/plain` and
//! shows whatever comes back. This crate answers that request by echoing
//! the body, and hosts the page itself.
//!
//! ## Example
//!
//! ```
//! use input_relay::{ServerConfig, assets};
//!
//! let config = ServerConfig::default();
//! assert_eq!(config.addr.port(), 8080);
//!
//! // "/" resolves to the embedded HTML shell when the site dir has no index
//! assert_eq!(assets::lookup("/").unwrap().path, "index.html");
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod process;
pub mod server;

pub use assets::{EmbeddedAsset, embedded_paths, export_assets};
pub use config::ServerConfig;
pub use error::RelayError;
pub use process::{PROCESS_PATH, TEXT_PLAIN, process, process_route};
pub use server::{router, serve};
