//! `POST /upload` ハンドラ
//!
//! 処理の流れ:
//! 1. multipart から `image` フィールドを取得
//! 2. 拡張子チェック（png / jpg / jpeg）
//! 3. 一時ファイルに保存（スコープを抜けると削除）
//! 4. 抽出サービス呼び出し → JSON抽出
//! 5. Excel生成して添付ファイルとして返す

use super::AppState;
use crate::error::{PanelBoardError, Result};
use crate::export::excel::render_report;
use crate::storage::TempUpload;
use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
};
use panel_board_common::image::extension_of;
use panel_board_common::{ImageAsset, ImageFormat, REPORT_FILE_NAME, XLSX_MIME_TYPE};
use std::path::Path;
use tracing::info;

/// 画像を受け取るフォームフィールド名
pub const IMAGE_FIELD: &str = "image";

struct UploadedFile {
    file_name: String,
    data: Vec<u8>,
}

async fn read_image_field(multipart: &mut Multipart) -> Result<UploadedFile> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?.to_vec();

        // ファイル未選択のまま送信されたフォーム
        if file_name.is_empty() && data.is_empty() {
            return Err(PanelBoardError::MissingFile);
        }
        return Ok(UploadedFile { file_name, data });
    }

    Err(PanelBoardError::MissingFile)
}

pub async fn upload_panel_schedule(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let upload = read_image_field(&mut multipart).await?;
    let extension = extension_of(Path::new(&upload.file_name));

    // 抽出サービスを呼ぶ前に弾く
    ImageFormat::from_extension(&extension)?;

    // 一時ファイルはリクエストの間だけ残す（以降はメモリ上のデータを使う）
    let temp = TempUpload::save(&state.config.upload_dir, &extension, &upload.data).await?;
    info!(file = %upload.file_name, bytes = upload.data.len(), "アップロード受信");

    let result = state.extractor.extract(&upload.data).await?;
    info!(odd = result.odd.len(), even = result.even.len(), "盤リスト抽出完了");

    let buffer = render_report(result, ImageAsset::new(upload.data, extension)).await?;
    drop(temp);

    let headers = [
        (header::CONTENT_TYPE, XLSX_MIME_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", REPORT_FILE_NAME),
        ),
    ];
    Ok((headers, buffer).into_response())
}
