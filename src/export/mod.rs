pub mod excel;

use crate::error::{PanelBoardError, Result};
use crate::extractor::ExtractionClient;
use panel_board_common::{parse_extraction_response, ImageAsset, REPORT_FILE_NAME};
use std::path::{Path, PathBuf};
use tracing::info;

/// 出力先がディレクトリ（または拡張子なし）ならファイル名を付与
pub fn output_path_for_report(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(REPORT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

fn load_image(image_path: &Path) -> Result<ImageAsset> {
    if !image_path.exists() {
        return Err(PanelBoardError::FileNotFound(image_path.display().to_string()));
    }
    let image = ImageAsset::from_path(image_path)?;
    // 読み込み直後に拡張子を検証
    image.format()?;
    Ok(image)
}

/// 保存済みの抽出サービス応答（テキスト/JSON）と画像からExcelを生成
pub fn export_from_response(input: &Path, image_path: &Path, output: &Path) -> Result<PathBuf> {
    if !input.exists() {
        return Err(PanelBoardError::FileNotFound(input.display().to_string()));
    }

    let raw = std::fs::read_to_string(input)?;
    let result = parse_extraction_response(&raw)?;
    let image = load_image(image_path)?;

    let output_path = output_path_for_report(output);
    excel::generate_excel(&result, &image, &output_path)?;
    info!(path = %output_path.display(), rows = result.row_count(), "Excel出力");

    Ok(output_path)
}

/// 画像を抽出サービスに送ってExcelを生成
pub async fn extract_and_export(
    client: &ExtractionClient,
    image_path: &Path,
    output: &Path,
) -> Result<PathBuf> {
    let image = load_image(image_path)?;
    let result = client.extract(&image.data).await?;

    let output_path = output_path_for_report(output);
    let buffer = excel::render_report(result, image).await?;
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(&output_path, buffer).await?;
    info!(path = %output_path.display(), "Excel出力");

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_for_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        assert_eq!(output_path_for_report(dir.path()), dir.path().join(REPORT_FILE_NAME));
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(
            output_path_for_report(Path::new("out/reports")),
            PathBuf::from("out/reports").join(REPORT_FILE_NAME)
        );
    }

    #[test]
    fn test_output_path_with_file_name() {
        assert_eq!(
            output_path_for_report(Path::new("listing.xlsx")),
            PathBuf::from("listing.xlsx")
        );
    }
}
