//! バックエンドとのワイヤ型
//!
//! - `POST /api/process` 成功時: `{ "success": true, "data": { "numbers": [...], "raw_text": "..." } }`
//! - 失敗時: `{ "error": "..." }`
//! - `GET /api/health`: `{ "status": "ok" }`

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// 非2xxで`error`フィールドがない場合のメッセージ
pub const PROCESS_FAILED: &str = "Failed to process image";

/// 検出された数値1件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// 画像から読み取ったままのテキスト
    pub raw: String,
    /// 正規化後のテキスト
    pub normalized: String,
}

impl ResultItem {
    pub fn new(raw: impl Into<String>, normalized: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            normalized: normalized.into(),
        }
    }
}

/// 処理結果（レスポンスの`data`部分）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub numbers: Vec<ResultItem>,

    /// 画像全体の認識テキスト（任意）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}

#[derive(Deserialize)]
struct ProcessBody {
    #[serde(default)]
    data: Option<ProcessData>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<ResultItem>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ResultItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `/api/process`のレスポンスを解釈する
///
/// ステータスに関わらずボディはJSONとしてパースする。
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンスボディ
///
/// # Returns
/// * `Ok(ProcessData)` - 2xx（`data`欠落時は空の結果）
/// * `Err(Error::Application)` - 非2xx
/// * `Err(Error::Transport)` - ボディがJSONとして不正
pub fn decode_process_response(status: u16, body: &str) -> Result<ProcessData> {
    let parsed: ProcessBody = serde_json::from_str(body)?;

    if !(200..300).contains(&status) {
        let message = parsed
            .error
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(PROCESS_FAILED);
        return Err(Error::Application(message.to_string()));
    }

    Ok(parsed.data.unwrap_or_default())
}

/// `/api/health`のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
