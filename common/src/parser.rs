//! 抽出サービスのレスポンスパーサー
//!
//! 抽出サービスは任意のテキストにJSONを埋め込んで返すため、
//! 最初の `{` から最後の `}` までを取り出してパースする。
//!
//! 括弧の対応は見ていないので、JSONの外側に別の `{...}` が
//! 付いているとその分まで含めて切り出してしまう（既知の制限）。

use crate::error::{Error, Result};
use crate::types::ExtractionResult;

/// JSONが見つからない場合のメッセージ
pub const JSON_NOT_FOUND: &str = "JSON not found in response.";

/// レスポンスからJSON部分を抽出
///
/// # Arguments
/// * `response` - 抽出サービスのレスポンス文字列
///
/// # Returns
/// * `Ok(&str)` - 最初の `{` から最後の `}` まで（両端を含む）
/// * `Err(Error::Parse)` - どちらかの区切りがない場合
///
/// # Examples
/// ```
/// use panel_board_common::extract_json;
///
/// let json = extract_json("garbage {\"odd\":[],\"even\":[]} trailing").unwrap();
/// assert_eq!(json, "{\"odd\":[],\"even\":[]}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    let start = response.find('{');
    let end = response.rfind('}');

    match (start, end) {
        (Some(start), Some(end)) if end > start => Ok(&response[start..=end]),
        _ => Err(Error::Parse(JSON_NOT_FOUND.into())),
    }
}

/// 抽出サービスのレスポンスをパース
///
/// # Returns
/// * `Ok(ExtractionResult)` - パース成功
/// * `Err(Error::Parse)` - JSONが見つからない
/// * `Err(Error::Json)` - 括弧の間がJSONとして不正（サービス側の不具合）
pub fn parse_extraction_response(response: &str) -> Result<ExtractionResult> {
    let json_str = extract_json(response)?;
    Ok(serde_json::from_str(json_str)?)
}
