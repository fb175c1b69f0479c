//! 抽出サービス連携モジュール
//!
//! 画像をBase64で抽出サービス（OCR）へPOSTし、
//! 返ってきたテキストから盤リストJSONを取り出す。

use crate::config::Config;
use crate::error::{PanelBoardError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use panel_board_common::{parse_extraction_response, ExtractionResult};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// 抽出サービスへのリクエスト
#[derive(Serialize)]
struct ExtractionRequest {
    image_base64: String,
}

/// 抽出サービスのHTTPクライアント
#[derive(Debug, Clone)]
pub struct ExtractionClient {
    http: reqwest::Client,
    url: String,
}

impl ExtractionClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PanelBoardError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.extraction_url()?,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// 画像を送信してレスポンス本文をそのまま返す
    pub async fn fetch_raw(&self, image: &[u8]) -> Result<String> {
        let request = ExtractionRequest {
            image_base64: encode_image(image),
        };

        debug!(bytes = image.len(), "抽出サービスへ送信");

        let response = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PanelBoardError::ExternalCall(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PanelBoardError::ExternalCall(e.to_string()))?;

        if !status.is_success() {
            return Err(PanelBoardError::ExternalCall(format!(
                "status {}: {}",
                status,
                text.trim()
            )));
        }

        info!(status = %status, chars = text.len(), "抽出サービス応答");
        Ok(text)
    }

    /// 画像を送信して盤リストを取得
    pub async fn extract(&self, image: &[u8]) -> Result<ExtractionResult> {
        let raw = self.fetch_raw(image).await?;
        let result = parse_extraction_response(&raw)?;
        debug!(odd = result.odd.len(), even = result.even.len(), "抽出結果");
        Ok(result)
    }
}

/// 標準Base64（パディングあり）
pub fn encode_image(image: &[u8]) -> String {
    STANDARD.encode(image)
}
