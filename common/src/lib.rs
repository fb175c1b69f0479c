//! Panel Board Common Library
//!
//! サーバーとCLIで共有される型・レスポンスパーサー・Excel生成

pub mod types;
pub mod image;
pub mod layout;
pub mod error;
pub mod parser;
pub mod export;

pub use types::{ExtractionResult, PanelEntry, ReportRow};
pub use image::{ImageAsset, ImageFormat, ALLOWED_EXTENSIONS};
pub use layout::{REPORT_FILE_NAME, SHEET_NAME, XLSX_MIME_TYPE};
pub use error::{Error, Result};
pub use parser::{extract_json, parse_extraction_response};

#[cfg(feature = "excel")]
pub use export::excel_core::generate_report_buffer;
