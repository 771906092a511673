//! Page assets compiled into the server binary.
//!
//! Two directories are embedded: `static/` (the HTML shell and stylesheet)
//! and `dist/` (the wasm-pack output of the `wasm-ui` crate). Build the page
//! into `dist/` before a release build and the binary is self-contained.
//! A file in `dist/` shadows a `static/` file of the same name.
//!
//! Debug builds read both directories from disk at runtime instead.

use crate::error::RelayError;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "static/"]
struct Shell;

#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
struct Bundle;

/// A file compiled into the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedAsset {
    /// Path relative to the site root, using `/` separators.
    pub path: String,
    pub contents: Cow<'static, [u8]>,
}

/// File served for the site root.
pub const INDEX: &str = "index.html";

/// Turn a request path into a site-relative asset path.
///
/// Leading slashes are dropped and `/` maps to [`INDEX`]. Returns `None`
/// for paths that try to leave the site root.
pub fn normalize_path(request_path: &str) -> Option<String> {
    let mut parts = Vec::new();
    for part in request_path.split('/') {
        match part {
            "" | "." => {}
            ".." => return None,
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return Some(INDEX.to_string());
    }
    Some(parts.join("/"))
}

/// Site-relative paths of every embedded asset, sorted.
pub fn embedded_paths() -> BTreeSet<String> {
    Bundle::iter()
        .chain(Shell::iter())
        .map(Cow::into_owned)
        .collect()
}

/// Find an embedded asset by request path.
pub fn lookup(request_path: &str) -> Option<EmbeddedAsset> {
    let path = normalize_path(request_path)?;
    let file = Bundle::get(&path).or_else(|| Shell::get(&path))?;
    Some(EmbeddedAsset {
        path,
        contents: file.data,
    })
}

/// Content type for a file name, by extension.
pub fn content_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Serve an embedded asset, or `404` if there is none for the path.
pub async fn serve_embedded(uri: Uri) -> Response {
    match lookup(uri.path()) {
        Some(asset) => {
            tracing::debug!(path = %asset.path, "serving embedded asset");
            (
                [(header::CONTENT_TYPE, content_type(&asset.path))],
                asset.contents,
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}

/// Write every embedded asset under `dir`, creating directories as needed.
///
/// Returns the paths written, in the order of [`embedded_paths`].
pub fn export_assets(dir: &Path) -> Result<Vec<PathBuf>, RelayError> {
    fs::create_dir_all(dir).map_err(|e| RelayError::io(dir, e))?;

    let paths = embedded_paths();
    let mut written = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(asset) = lookup(&path) else {
            continue;
        };
        let dest = dest_path(dir, &asset.path);
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| RelayError::io(parent, e))?;
        }
        fs::write(&dest, &asset.contents).map_err(|e| RelayError::io(&dest, e))?;
        tracing::debug!(path = %dest.display(), "exported asset");
        written.push(dest);
    }
    Ok(written)
}

fn dest_path(dir: &Path, asset_path: &str) -> PathBuf {
    let mut dest = dir.to_path_buf();
    for component in Path::new(asset_path).components() {
        if let Component::Normal(part) = component {
            dest.push(part);
        }
    }
    dest
}
