//! バックエンド連携（`POST /api/process`）
//!
//! 画像を`file`フィールドに入れたmultipartで1回だけ送信し、
//! ステータスに関わらずボディをJSONとして解釈する。

use async_trait::async_trait;
use number_lens_common::session::Collaborator;
use number_lens_common::{decode_process_response, ProcessData, Result, Settings};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, Response};

use crate::browser::{console_error, js_error, WebFile};

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

/// fetch APIで画像を送信するバックエンド
pub struct FetchBackend {
    url: String,
}

impl FetchBackend {
    /// 同一オリジンの処理エンドポイントを使う
    pub fn new(settings: &Settings) -> Self {
        Self {
            url: settings.process_path.clone(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl Collaborator<WebFile> for FetchBackend {
    async fn submit(&self, file: &WebFile) -> Result<ProcessData> {
        let (status, body) = post_file(self.url(), &file.0).await.map_err(|e| {
            let error = js_error(e);
            console_error(&format!("request to {} failed: {}", self.url(), error));
            error
        })?;

        decode_process_response(status, &body)
    }
}

/// multipartで送信し、(ステータス, ボディ)を返す
async fn post_file(url: &str, file: &File) -> std::result::Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_uses_process_path() {
        let backend = FetchBackend::new(&Settings::default());
        assert_eq!(backend.url(), "/api/process");
    }

    #[test]
    fn test_backend_custom_path() {
        let settings = Settings {
            process_path: "/v2/extract".to_string(),
            ..Default::default()
        };
        assert_eq!(FetchBackend::new(&settings).url(), "/v2/extract");
    }
}
