//! ローカルファイルを画像ハンドルとして扱う

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use number_lens_common::session::PreviewReader;
use number_lens_common::{media_type_for, Error, ImageFile};
use std::path::{Path, PathBuf};

use crate::error::{NumberLensError, Result};

/// ディスク上の画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    path: PathBuf,
    name: String,
    media_type: String,
}

impl LocalImage {
    /// パスからハンドルを作る
    ///
    /// MIMEタイプは拡張子から推定し、不明な場合は空文字（ブラウザと同じ扱い）。
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NumberLensError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let media_type = media_type_for(&name).unwrap_or_default().to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            media_type,
        })
    }

    /// ファイルの中身を読む
    pub async fn read_bytes(&self) -> number_lens_common::Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| Error::Transport(format!("{}: {}", self.path.display(), e)))
    }
}

impl ImageFile for LocalImage {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

/// ファイルをData URLとして読むプレビュー
pub struct FsPreviewReader;

#[async_trait(?Send)]
impl PreviewReader<LocalImage> for FsPreviewReader {
    async fn read_data_url(&self, file: &LocalImage) -> number_lens_common::Result<String> {
        let bytes = file.read_bytes().await?;
        Ok(data_url(&file.media_type, &bytes))
    }
}

/// `data:<type>;base64,<payload>`形式に変換
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    let media_type = if media_type.is_empty() {
        "application/octet-stream"
    } else {
        media_type
    };
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}
