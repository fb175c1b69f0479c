use crate::error::{PanelBoardError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 抽出サービスURLを上書きする環境変数
pub const EXTRACTION_URL_ENV: &str = "POWER_AUTOMATE_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 抽出サービス（OCR）のURL
    pub extraction_url: Option<String>,
    pub bind_address: String,
    pub port: u16,
    /// アップロード画像の一時保存先
    pub upload_dir: PathBuf,
    /// 抽出サービス呼び出しのタイムアウト
    pub timeout_seconds: u64,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extraction_url: None,
            bind_address: "0.0.0.0".into(),
            port: 5000,
            upload_dir: PathBuf::from("uploads"),
            timeout_seconds: 120,
            max_upload_bytes: 20 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PanelBoardError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("panel-board").join("config.json"))
    }

    pub fn extraction_url(&self) -> Result<String> {
        // 環境変数を優先
        resolve_extraction_url(std::env::var(EXTRACTION_URL_ENV).ok(), self.extraction_url.as_deref())
    }

    pub fn set_extraction_url(&mut self, url: String) -> Result<()> {
        self.extraction_url = Some(url);
        self.save()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn resolve_extraction_url(env_value: Option<String>, stored: Option<&str>) -> Result<String> {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| stored.filter(|v| !v.trim().is_empty()).map(str::to_string))
        .ok_or(PanelBoardError::MissingExtractionUrl)
}
