use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumberLensError {
    /// 画面と同じ文言をそのまま出す
    #[error(transparent)]
    Lens(#[from] number_lens_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("エンドポイントが設定されていません。`number-lens config --set-endpoint URL` で設定してください")]
    MissingEndpoint,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("サーバーが異常を返しました: {0}")]
    Unhealthy(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NumberLensError>;
