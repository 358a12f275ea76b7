use crate::error::{NumberLensError, Result};
use number_lens_common::Settings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "NUMBER_LENS_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// バックエンドのベースURL（例: http://localhost:5000）
    pub endpoint: Option<String>,
    /// コントローラ設定（パス・タイムアウト等）
    pub settings: Settings,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| NumberLensError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("number-lens").join("config.json"))
    }

    /// 使用するエンドポイントを決める
    ///
    /// # Arguments
    /// * `cli` - `--endpoint`で渡された値
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル
    pub fn resolve_endpoint(&self, cli: Option<&str>) -> Result<String> {
        if let Some(endpoint) = cli {
            return Ok(endpoint.to_string());
        }

        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                return Ok(endpoint);
            }
        }

        self.endpoint.clone().ok_or(NumberLensError::MissingEndpoint)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.endpoint = Some(endpoint);
        self.save()
    }
}
