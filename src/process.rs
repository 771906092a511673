//! The `/process` endpoint.
//!
//! Accepts a `POST` with a plain-text body and answers with the same bytes
//! as `text/plain`. The page treats the answer as opaque text, so this is
//! the only contract the two halves share.

use axum::body::Bytes;
use axum::extract::DefaultBodyLimit;
use axum::extract::rejection::BytesRejection;
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{MethodRouter, any};

/// Path the page posts to.
pub const PROCESS_PATH: &str = "/process";

/// Content type of both the request and the response.
pub const TEXT_PLAIN: &str = "text/plain";

/// The `/process` route, with axum's default request body limit lifted.
///
/// The text area is unbounded, so the echo must be too.
pub fn process_route() -> MethodRouter {
    any(process).layer(DefaultBodyLimit::disable())
}

/// Handle a request to `/process`.
///
/// - `POST`: echo the body back with `Content-Type: text/plain`
/// - any other method: `405 Method Not Allowed`
/// - unreadable body: `400 Bad Request`
pub async fn process(method: Method, body: Result<Bytes, BytesRejection>) -> Response {
    if method != Method::POST {
        tracing::debug!(%method, "rejecting non-POST request to {}", PROCESS_PATH);
        return (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response();
    }

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "failed to read request body");
            return (StatusCode::BAD_REQUEST, "Failed to read request body").into_response();
        }
    };

    tracing::info!(bytes = body.len(), "processed request");
    ([(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}
