//! The request the page sends to the server.

use gloo::net::http::Request;

/// Path the page posts to.
pub const PROCESS_PATH: &str = "/process";

/// Content type of the request body.
pub const TEXT_PLAIN: &str = "text/plain";

/// A `POST /process` carrying the input text verbatim.
///
/// The body is not encoded in any way: `a&b=c` goes out as those five
/// characters with `Content-Type: text/plain`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessRequest {
    body: String,
}

impl ProcessRequest {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn path(&self) -> &'static str {
        PROCESS_PATH
    }

    pub fn content_type(&self) -> &'static str {
        TEXT_PLAIN
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Send the request and read the whole response body as text.
    ///
    /// The status code is not inspected; an error page's body comes back
    /// the same as a success.
    pub async fn send(&self) -> Result<String, gloo::net::Error> {
        let response = Request::post(self.path())
            .header("Content-Type", self.content_type())
            .body(self.body().to_owned())?
            .send()
            .await?;
        response.text().await
    }
}
