//! Clipboard access via navigator.clipboard

use async_trait::async_trait;
use number_lens_common::session::Clipboard;
use number_lens_common::{Error, Result};
use wasm_bindgen::prelude::*;

use crate::browser::console_error;

#[wasm_bindgen(module = "/js/clipboard.js")]
extern "C" {
    #[wasm_bindgen(js_name = "writeClipboardText", catch)]
    async fn write_clipboard_text_js(text: &str) -> std::result::Result<JsValue, JsValue>;
}

pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        write_clipboard_text_js(text)
            .await
            .map(|_| ())
            .map_err(|e| {
                console_error(&format!("clipboard write failed: {:?}", e));
                Error::Clipboard
            })
    }
}
