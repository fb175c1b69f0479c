//! 埋め込み画像
//!
//! 拡張子は png / jpg / jpeg のみ許可する（大文字小文字は区別しない）

use crate::error::{Error, Result};
use std::path::Path;

/// 許可する画像拡張子
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// 画像形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// 拡張子から判定（先頭の "." は任意）
    pub fn from_extension(extension: &str) -> Result<Self> {
        let ext = extension.trim_start_matches('.').to_ascii_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(Error::UnsupportedFormat(if ext.is_empty() {
                "(no extension)".to_string()
            } else {
                ext
            }));
        }

        Ok(if ext == "png" {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        })
    }
}

/// 画像データ（バイト配列 + 元ファイルの拡張子）
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub data: Vec<u8>,
    pub extension: String,
}

impl ImageAsset {
    pub fn new(data: Vec<u8>, extension: impl Into<String>) -> Self {
        Self {
            data,
            extension: extension.into(),
        }
    }

    /// ファイルから読み込み（拡張子はパスから取得）
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::new(data, extension_of(path)))
    }

    /// 拡張子が許可リストにあるか検証
    pub fn format(&self) -> Result<ImageFormat> {
        ImageFormat::from_extension(&self.extension)
    }
}

/// パスの拡張子（なければ空文字）
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default()
}
