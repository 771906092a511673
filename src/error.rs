//! Error types for the relay server.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exporting assets or running the server.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A filesystem operation on `path` failed.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The server stopped with an error after it started.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

impl RelayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RelayError::Io {
            path: path.into(),
            source,
        }
    }
}
