use serde::{Deserialize, Serialize};
use std::time::Duration;

/// コントローラの動作設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 画像処理エンドポイントのパス
    pub process_path: String,
    /// ヘルスチェックのパス
    pub health_path: String,
    /// 「Copied!」表示を戻すまでの時間（ミリ秒）
    pub copy_feedback_ms: u64,
    /// リクエストのタイムアウト（秒）
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            process_path: "/api/process".into(),
            health_path: "/api/health".into(),
            copy_feedback_ms: 2000,
            timeout_seconds: 60,
        }
    }
}

impl Settings {
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// ベースURLとパスを連結
    pub fn process_url(&self, base: &str) -> String {
        join_url(base, &self.process_path)
    }

    pub fn health_url(&self, base: &str) -> String {
        join_url(base, &self.health_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.process_path, "/api/process");
        assert_eq!(settings.copy_feedback(), Duration::from_secs(2));
        assert_eq!(settings.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"copy_feedback_ms": 500}"#).unwrap();
        assert_eq!(settings.copy_feedback_ms, 500);
        assert_eq!(settings.health_path, "/api/health");
    }

    #[test]
    fn test_urls() {
        let settings = Settings::default();
        assert_eq!(settings.process_url("http://localhost:5000"), "http://localhost:5000/api/process");
        assert_eq!(settings.process_url("http://localhost:5000/"), "http://localhost:5000/api/process");
        assert_eq!(settings.health_url("http://h"), "http://h/api/health");
    }
}
