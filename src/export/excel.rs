//! Excel生成（サーバー・CLI共通のラッパー）
//!
//! 本体は panel_board_common::export::excel_core

use crate::error::{PanelBoardError, Result};
use panel_board_common::{generate_report_buffer, ExtractionResult, ImageAsset};
use std::path::Path;

/// 非同期コンテキストからExcelバッファを生成（ブロッキングスレッドで実行）
pub async fn render_report(result: ExtractionResult, image: ImageAsset) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || generate_report_buffer(&result, &image))
        .await
        .map_err(|e| PanelBoardError::ExcelGeneration(format!("worker task failed: {}", e)))?
        .map_err(PanelBoardError::from)
}

/// Excelを生成してファイルに保存
pub fn generate_excel(
    result: &ExtractionResult,
    image: &ImageAsset,
    output_path: &Path,
) -> Result<()> {
    let buffer = generate_report_buffer(result, image)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;

    Ok(())
}
