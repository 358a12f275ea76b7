//! エラー型定義
//!
//! 画面のエラーバナーは1枠のみなので、各バリアントの`Display`が
//! そのままユーザーに表示されるメッセージになる。

use thiserror::Error;

/// バナーに表示するエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// ドロップされたファイルが対応形式ではない
    #[error("Invalid file type. Please select PNG, JPG, JPEG, or WEBP.")]
    InvalidFileType,

    /// ファイル未選択のまま処理を開始した
    #[error("Please select a file first.")]
    NoFileSelected,

    /// バックエンドが非2xxで返したエラー（`error`フィールドの内容）
    #[error("{0}")]
    Application(String),

    /// 通信失敗・レスポンスのパース失敗
    #[error("{0}")]
    Transport(String),

    /// クリップボードへの書き込み失敗
    #[error("Failed to copy to clipboard")]
    Clipboard,
}

/// エラーの分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Application,
    Transport,
    Clipboard,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidFileType | Error::NoFileSelected => ErrorKind::Validation,
            Error::Application(_) => ErrorKind::Application,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Clipboard => ErrorKind::Clipboard,
        }
    }

    /// ネットワークに到達する前に検出されるエラーか
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
