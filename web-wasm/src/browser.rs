//! ブラウザAPIのアダプタ
//!
//! - `WebFile`: `web_sys::File`をコントローラのファイルとして扱う
//! - `FileReaderPreview`: FileReaderでData URLを読む
//! - `GlooTimer`: setTimeoutベースの待機

use async_trait::async_trait;
use futures::channel::oneshot;
use gloo::timers::future::TimeoutFuture;
use number_lens_common::session::{PreviewReader, Timer};
use number_lens_common::{Error, ImageFile, Result};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

/// ブラウザで選択されたファイル
#[derive(Clone, Debug)]
pub struct WebFile(pub File);

impl ImageFile for WebFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}

/// JSの例外をメッセージ付きのエラーに変換
///
/// `TypeError: Failed to fetch`などは`message`をそのまま使う。
pub fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}

/// ブラウザのコンソールにエラーを出す
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub struct FileReaderPreview;

#[async_trait(?Send)]
impl PreviewReader<WebFile> for FileReaderPreview {
    async fn read_data_url(&self, file: &WebFile) -> Result<String> {
        let reader = FileReader::new().map_err(js_error)?;
        let (tx, rx) = oneshot::channel::<()>();

        // 成功・失敗どちらでも発火するloadendで完了を待つ
        let mut tx = Some(tx);
        let on_load_end = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| {
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
        });
        reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));
        reader.read_as_data_url(&file.0).map_err(js_error)?;

        let finished = rx.await;
        reader.set_onloadend(None);
        drop(on_load_end);
        finished.map_err(|_| Error::Transport("file read was interrupted".into()))?;

        reader
            .result()
            .map_err(js_error)?
            .as_string()
            .ok_or_else(|| Error::Transport(format!("failed to read {}", file.0.name())))
    }
}

pub struct GlooTimer;

#[async_trait(?Send)]
impl Timer for GlooTimer {
    async fn sleep(&self, duration: Duration) {
        TimeoutFuture::new(timeout_millis(duration)).await;
    }
}

/// setTimeoutに渡すミリ秒（u32に収まらない場合は切り詰め）
fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(Duration::from_secs(2)), 2000);
        assert_eq!(timeout_millis(Duration::from_millis(0)), 0);
        assert_eq!(timeout_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(bytes: &[u8], name: &str, media_type: &str) -> WebFile {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = FilePropertyBag::new();
        options.set_type(media_type);
        let file = File::new_with_u8_array_sequence_and_options(&parts, name, &options)
            .expect("File construction failed");
        WebFile(file)
    }

    #[wasm_bindgen_test]
    fn wasm_web_file_reports_name_and_type() {
        let file = make_file(b"png", "meter.png", "image/png");
        assert_eq!(file.name(), "meter.png");
        assert_eq!(file.media_type(), "image/png");
    }

    #[wasm_bindgen_test]
    async fn wasm_preview_reads_data_url() {
        let file = make_file(b"abc", "meter.png", "image/png");
        let url = FileReaderPreview.read_data_url(&file).await.expect("read failed");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }
}
