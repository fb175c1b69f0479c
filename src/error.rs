use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelBoardError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Extraction service URL is not configured. Set POWER_AUTOMATE_URL or run `panel-board config --set-url URL`")]
    MissingExtractionUrl,

    #[error("No image file uploaded.")]
    MissingFile,

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Extraction service call failed: {0}")]
    ExternalCall(String),

    #[error("Excel generation failed: {0}")]
    ExcelGeneration(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] panel_board_common::Error),
}

impl PanelBoardError {
    /// クライアント入力に起因するエラーか（HTTP 400）
    pub fn is_client_error(&self) -> bool {
        match self {
            PanelBoardError::MissingFile | PanelBoardError::Multipart(_) => true,
            PanelBoardError::Common(e) => e.is_client_error(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PanelBoardError>;
