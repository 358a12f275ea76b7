//! reqwestによるバックエンド連携

use async_trait::async_trait;
use number_lens_common::session::Collaborator;
use number_lens_common::{decode_process_response, Error, HealthStatus, ImageFile, ProcessData, Settings};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{NumberLensError, Result};
use crate::local::LocalImage;

/// multipartのフィールド名
pub const FILE_FIELD: &str = "file";

/// `POST {endpoint}/api/process`へ画像を送るバックエンド
pub struct HttpBackend {
    client: Client,
    process_url: String,
    health_url: String,
}

impl HttpBackend {
    /// # Arguments
    /// * `endpoint` - ベースURL（例: `http://localhost:5000`）
    /// * `settings` - パスとタイムアウト
    pub fn new(endpoint: &str, settings: &Settings) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            process_url: settings.process_url(endpoint),
            health_url: settings.health_url(endpoint),
        })
    }

    pub fn process_url(&self) -> &str {
        &self.process_url
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthStatus> {
        debug!(url = %self.health_url, "health check");
        let resp = self.client.get(&self.health_url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(NumberLensError::Unhealthy(format!("HTTP {}", status.as_u16())));
        }

        let health: HealthStatus = serde_json::from_str(&body)?;
        if !health.is_ok() {
            return Err(NumberLensError::Unhealthy(health.status));
        }
        Ok(health)
    }

    async fn post_file(&self, file: &LocalImage, bytes: Vec<u8>) -> reqwest::Result<(u16, String)> {
        let mut part = Part::bytes(bytes).file_name(file.name());
        let media_type = file.media_type();
        if !media_type.is_empty() {
            part = part.mime_str(&media_type)?;
        }
        let form = Form::new().part(FILE_FIELD, part);

        let resp = self.client.post(&self.process_url).multipart(form).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl Collaborator<LocalImage> for HttpBackend {
    async fn submit(&self, file: &LocalImage) -> number_lens_common::Result<ProcessData> {
        let bytes = file.read_bytes().await?;

        debug!(url = %self.process_url, file = %file.name(), size = bytes.len(), "submitting image");
        let (status, body) = self.post_file(file, bytes).await.map_err(|e| {
            warn!(url = %self.process_url, error = %e, "request failed");
            Error::Transport(e.to_string())
        })?;
        debug!(status, "response received");

        decode_process_response(status, &body)
    }
}
