//! 盤リストExcel生成（共通ライブラリ）
//!
//! layout.rs の定義を使用して、左側に盤番号・盤名称の表（A〜D列）、
//! 右側のマージ領域（E1:H25）に元画像を配置したシートを1枚生成する

use crate::error::{Error, Result};
use crate::image::ImageAsset;
use crate::layout::{
    image_offset_px, COLUMNS, IMAGE_COL_WIDTH, IMAGE_FIRST_COL, IMAGE_FIRST_ROW,
    IMAGE_HEIGHT_PX, IMAGE_LAST_COL, IMAGE_LAST_ROW, IMAGE_ROW_HEIGHT, IMAGE_WIDTH_PX,
    SHEET_NAME,
};
use crate::types::ExtractionResult;
use rust_xlsxwriter::*;

fn excel_error(context: &'static str) -> impl Fn(XlsxError) -> Error {
    move |e| Error::Excel(format!("{}: {}", context, e))
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `result` - 抽出結果（奇数列・偶数列）
/// * `image` - 埋め込む元画像
///
/// # Errors
/// * `Error::UnsupportedFormat` - 画像の拡張子が png / jpg / jpeg 以外
/// * `Error::InvalidImage` - 画像データを読み込めない
/// * `Error::Excel` - シート操作・書き出しの失敗
pub fn generate_report_buffer(result: &ExtractionResult, image: &ImageAsset) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::VerticalCenter);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(excel_error("シート名設定エラー"))?;

    // ヘッダー行と列幅
    for (col, spec) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, spec.width)
            .map_err(excel_error("列幅設定エラー"))?;
        worksheet
            .write_string_with_format(0, col, spec.header, &header_format)
            .map_err(excel_error("ヘッダー書き込みエラー"))?;
    }

    // データ行（2行目から）
    for (i, row) in result.rows().iter().enumerate() {
        let excel_row = i as u32 + 1;
        for (col, value) in row.cells().iter().enumerate() {
            worksheet
                .write_string(excel_row, col as u16, *value)
                .map_err(excel_error("セル書き込みエラー"))?;
        }
    }

    // 画像の拡張子チェック（不可ならExcelは生成しない）
    image.format()?;

    // 画像領域の確保
    worksheet
        .set_column_width(IMAGE_FIRST_COL, IMAGE_COL_WIDTH)
        .map_err(excel_error("列幅設定エラー"))?;
    for r in IMAGE_FIRST_ROW..=IMAGE_LAST_ROW {
        worksheet
            .set_row_height(r, IMAGE_ROW_HEIGHT)
            .map_err(excel_error("行高さ設定エラー"))?;
    }

    worksheet
        .merge_range(
            IMAGE_FIRST_ROW,
            IMAGE_FIRST_COL,
            IMAGE_LAST_ROW,
            IMAGE_LAST_COL,
            "",
            &Format::new(),
        )
        .map_err(excel_error("セルマージエラー"))?;

    // 画像埋め込み（固定サイズ 400x300）
    let picture = Image::new_from_buffer(&image.data)
        .map_err(|e| Error::InvalidImage(e.to_string()))?
        .set_scale_to_size(IMAGE_WIDTH_PX, IMAGE_HEIGHT_PX, false)
        .set_object_movement(ObjectMovement::MoveButDontSizeWithCells);

    let (x_offset, y_offset) = image_offset_px();
    worksheet
        .insert_image_with_offset(IMAGE_FIRST_ROW, IMAGE_FIRST_COL, &picture, x_offset, y_offset)
        .map_err(excel_error("画像埋め込みエラー"))?;

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(excel_error("Excel保存エラー"))
}
