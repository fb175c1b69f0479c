//! レイアウト設定モジュール
//!
//! 盤リストExcelのシート名・列定義・画像領域の定数

// ============================================
// 表（A〜D列）
// ============================================

/// シート名
pub const SHEET_NAME: &str = "PanelBoard";

/// ダウンロード時のファイル名
pub const REPORT_FILE_NAME: &str = "Panel_Board_Listing.xlsx";

/// xlsxのMIMEタイプ
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 列定義
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub header: &'static str,
    /// Excel列幅（文字数単位）
    pub width: f64,
}

pub const COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec { header: "Panel No (Odd)", width: 18.0 },
    ColumnSpec { header: "Panel Name (Odd)", width: 40.0 },
    ColumnSpec { header: "Panel No (Even)", width: 18.0 },
    ColumnSpec { header: "Panel Name (Even)", width: 40.0 },
];

// ============================================
// 画像領域（E1:H25 マージ）
// ============================================

/// E列（0始まり）
pub const IMAGE_FIRST_COL: u16 = 4;
/// H列
pub const IMAGE_LAST_COL: u16 = 7;
/// 1行目
pub const IMAGE_FIRST_ROW: u32 = 0;
/// 25行目
pub const IMAGE_LAST_ROW: u32 = 24;

/// E列の幅
pub const IMAGE_COL_WIDTH: f64 = 50.0;
/// 画像領域の行高さ（pt）
pub const IMAGE_ROW_HEIGHT: f64 = 25.0;

/// 画像の表示サイズ（px）
pub const IMAGE_WIDTH_PX: u32 = 400;
pub const IMAGE_HEIGHT_PX: u32 = 300;

/// マージ領域の左上から半列・半行だけ内側に配置
pub const IMAGE_INSET_RATIO: f64 = 0.5;

// ============================================
// 変換係数
// ============================================

/// pt → px変換 (96dpi基準)
pub const PT_TO_PX: f64 = 96.0 / 72.0;

/// Excel列幅（文字数）→ px（Calibri 11 の最大桁幅 7px + 余白 5px）
pub fn excel_width_to_px(width: f64) -> u32 {
    if width < 1.0 {
        (width * 12.0).round() as u32
    } else {
        (width * 7.0 + 5.0).round() as u32
    }
}

/// 画像の挿入オフセット（px）
pub fn image_offset_px() -> (u32, u32) {
    let x = excel_width_to_px(IMAGE_COL_WIDTH) as f64 * IMAGE_INSET_RATIO;
    let y = IMAGE_ROW_HEIGHT * PT_TO_PX * IMAGE_INSET_RATIO;
    (x.round() as u32, y.round() as u32)
}
