//! Web UI for input-relay
//!
//! A Yew page that posts the contents of a text area to the server's
//! `/process` endpoint and shows the plain-text reply.

mod app;
mod components;
mod relay;

use app::App;
use wasm_bindgen::prelude::*;

/// Mount the page once the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
