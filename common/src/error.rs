//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 抽出サービスのレスポンスに `{` `}` がない
    #[error("{0}")]
    Parse(String),

    /// 許可されていない画像拡張子
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// 画像データ自体が壊れている・判別できない
    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    /// Excelの書き出し失敗
    #[error("Excel generation failed: {0}")]
    Excel(String),
}

impl Error {
    /// クライアント入力に起因するエラーか（HTTP 400相当）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Parse(_) | Error::UnsupportedFormat(_) | Error::InvalidImage(_)
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
