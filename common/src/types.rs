//! 抽出結果の型定義
//!
//! - PanelEntry: 盤番号と盤名称の1件分
//! - ExtractionResult: 抽出サービスの出力（奇数列・偶数列）
//! - ReportRow: Excelの1行（奇数側と偶数側をインデックスで対にしたもの）

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 盤リストの1エントリ
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub panel_no: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub panel_name: String,
}

impl PanelEntry {
    pub fn new(panel_no: impl Into<String>, panel_name: impl Into<String>) -> Self {
        Self {
            panel_no: panel_no.into(),
            panel_name: panel_name.into(),
        }
    }
}

/// 抽出サービスの結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// 奇数番号の盤（左列）
    #[serde(default, deserialize_with = "lenient_entries")]
    pub odd: Vec<PanelEntry>,

    /// 偶数番号の盤（右列）
    #[serde(default, deserialize_with = "lenient_entries")]
    pub even: Vec<PanelEntry>,
}

impl ExtractionResult {
    /// 出力行数 = max(奇数件数, 偶数件数)
    pub fn row_count(&self) -> usize {
        self.odd.len().max(self.even.len())
    }

    /// 奇数側と偶数側をインデックスで対にして行を生成
    ///
    /// 片側が短い場合、その側のセルは空文字になる
    pub fn rows(&self) -> Vec<ReportRow> {
        (0..self.row_count())
            .map(|i| ReportRow::pair(self.odd.get(i), self.even.get(i)))
            .collect()
    }
}

/// Excelの1データ行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub odd_no: String,
    pub odd_name: String,
    pub even_no: String,
    pub even_name: String,
}

impl ReportRow {
    fn pair(odd: Option<&PanelEntry>, even: Option<&PanelEntry>) -> Self {
        let (odd_no, odd_name) = split_entry(odd);
        let (even_no, even_name) = split_entry(even);
        Self {
            odd_no,
            odd_name,
            even_no,
            even_name,
        }
    }

    /// 列順（A〜D）のセル値
    pub fn cells(&self) -> [&str; 4] {
        [
            self.odd_no.as_str(),
            self.odd_name.as_str(),
            self.even_no.as_str(),
            self.even_name.as_str(),
        ]
    }
}

fn split_entry(entry: Option<&PanelEntry>) -> (String, String) {
    entry
        .map(|e| (e.panel_no.clone(), e.panel_name.clone()))
        .unwrap_or_default()
}

/// null・数値も受け付けて文字列化する
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    })
}

/// 配列自体のnull、要素のnullを空として扱う
fn lenient_entries<'de, D>(deserializer: D) -> std::result::Result<Vec<PanelEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Option<PanelEntry>>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(prefix: &str, n: usize) -> Vec<PanelEntry> {
        (1..=n)
            .map(|i| PanelEntry::new(format!("{}{}", prefix, i), format!("Panel {}{}", prefix, i)))
            .collect()
    }

    #[test]
    fn test_rows_equal_lengths() {
        let result = ExtractionResult {
            odd: entries("O", 3),
            even: entries("E", 3),
        };

        let rows = result.rows();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert!(row.cells().iter().all(|c| !c.is_empty()));
        }
        assert_eq!(rows[2].odd_no, "O3");
        assert_eq!(rows[2].even_name, "Panel E3");
    }

    #[test]
    fn test_rows_more_odd_than_even() {
        let result = ExtractionResult {
            odd: entries("O", 4),
            even: entries("E", 1),
        };

        let rows = result.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].even_no, "E1");
        for row in &rows[1..] {
            assert!(!row.odd_no.is_empty());
            assert_eq!(row.even_no, "");
            assert_eq!(row.even_name, "");
        }
    }

    #[test]
    fn test_rows_more_even_than_odd() {
        let result = ExtractionResult {
            odd: vec![],
            even: entries("E", 2),
        };

        let rows = result.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].odd_no, "");
        assert_eq!(rows[1].odd_name, "");
        assert_eq!(rows[1].even_no, "E2");
    }

    #[test]
    fn test_rows_empty() {
        let result = ExtractionResult::default();
        assert_eq!(result.row_count(), 0);
        assert!(result.rows().is_empty());
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let json = r#"{"odd": [{"panel_no": "1"}, {}], "even": [{"panel_name": "Lighting"}]}"#;
        let result: ExtractionResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.odd[0], PanelEntry::new("1", ""));
        assert_eq!(result.odd[1], PanelEntry::default());
        assert_eq!(result.even[0], PanelEntry::new("", "Lighting"));
    }

    #[test]
    fn test_deserialize_missing_lists() {
        let result: ExtractionResult = serde_json::from_str(r#"{"odd": null}"#).unwrap();
        assert!(result.odd.is_empty());
        assert!(result.even.is_empty());
    }

    #[test]
    fn test_deserialize_null_and_numeric_values() {
        let json = r#"{"odd": [{"panel_no": 3, "panel_name": null}, null], "even": []}"#;
        let result: ExtractionResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.odd.len(), 2);
        assert_eq!(result.odd[0].panel_no, "3");
        assert_eq!(result.odd[0].panel_name, "");
        assert_eq!(result.odd[1], PanelEntry::default());
    }
}
