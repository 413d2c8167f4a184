//! CSV読み込みとグループ化
//!
//! CSVをレコード列に読み込み、キャラクター→表情の2段階で
//! グループ化する。グループのキー順はCSVでの初出順を保持する
//! （ソートしない）。

use crate::error::Result;
use crate::types::{ExpressionRecord, UNKNOWN_CHARACTER};
use indexmap::IndexMap;
use std::path::Path;

/// UTF-8 BOM（utf-8-sigのCSVを許容する）
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// CSVファイルを読み込んでレコード列を返す
///
/// ヘッダー行が列名を決める。欠けている列はserdeのデフォルト値で
/// 補われる。ファイルが開けない・行が壊れている場合はエラーを
/// そのまま呼び出し元へ返す。
pub fn read_csv(path: &Path) -> Result<Vec<ExpressionRecord>> {
    let bytes = std::fs::read(path)?;
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: ExpressionRecord = result?;
        records.push(record);
    }
    Ok(records)
}

/// キャラクターごとにレコードをグループ化（初出順を保持）
///
/// キャラクター名が空のレコードは "Unknown" に集める
/// （空文字列はシート名にできないため）。
pub fn group_by_character(
    records: &[ExpressionRecord],
) -> IndexMap<String, Vec<&ExpressionRecord>> {
    let mut grouped: IndexMap<String, Vec<&ExpressionRecord>> = IndexMap::new();
    for record in records {
        let key = if record.character.is_empty() {
            UNKNOWN_CHARACTER.to_string()
        } else {
            record.character.clone()
        };
        grouped.entry(key).or_default().push(record);
    }
    grouped
}

/// キャラクター内で表情ごとにレコードをグループ化（初出順を保持）
pub fn group_by_expression<'a>(
    records: &[&'a ExpressionRecord],
) -> IndexMap<String, Vec<&'a ExpressionRecord>> {
    let mut grouped: IndexMap<String, Vec<&'a ExpressionRecord>> = IndexMap::new();
    for record in records {
        grouped
            .entry(record.expression.clone())
            .or_default()
            .push(record);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record(character: &str, expression: &str, name: &str) -> ExpressionRecord {
        ExpressionRecord {
            character: character.to_string(),
            expression: expression.to_string(),
            blend_shape_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_read_csv_with_bom() {
        let mut file = tempfile::NamedTempFile::new().expect("一時ファイル作成失敗");
        file.write_all("\u{feff}".as_bytes()).unwrap();
        file.write_all(
            "オブジェクト名,表情名,画像パス,ブレンドシェイプパス,ブレンドシェイプ名,値(%)\n\
             Avatar1,Smile,images/smile.png,Face,mouth_smile,100\n"
                .as_bytes(),
        )
        .unwrap();
        file.flush().unwrap();

        let records = read_csv(file.path()).expect("CSV読み込み失敗");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].character, "Avatar1");
        assert_eq!(records[0].expression, "Smile");
        assert_eq!(records[0].value_percent, "100");
    }

    #[test]
    fn test_read_csv_missing_columns() {
        let mut file = tempfile::NamedTempFile::new().expect("一時ファイル作成失敗");
        file.write_all("表情名,ブレンドシェイプ名\nSmile,mouth_smile\n".as_bytes())
            .unwrap();
        file.flush().unwrap();

        let records = read_csv(file.path()).expect("CSV読み込み失敗");
        assert_eq!(records.len(), 1);
        // オブジェクト名列が無い場合はUnknownに落ちる
        assert_eq!(records[0].character, UNKNOWN_CHARACTER);
        assert_eq!(records[0].image_path, "");
    }

    #[test]
    fn test_read_csv_file_not_found() {
        let result = read_csv(Path::new("/no/such/file.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_group_by_character_preserves_first_seen_order() {
        let records = vec![
            record("Bravo", "Smile", "a"),
            record("Alpha", "Smile", "b"),
            record("Bravo", "Blink", "c"),
        ];
        let grouped = group_by_character(&records);

        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["Bravo", "Alpha"]);
        assert_eq!(grouped["Bravo"].len(), 2);
        assert_eq!(grouped["Alpha"].len(), 1);
    }

    #[test]
    fn test_group_by_character_empty_name_falls_back() {
        let records = vec![record("", "Smile", "a")];
        let grouped = group_by_character(&records);
        assert!(grouped.contains_key(UNKNOWN_CHARACTER));
    }

    #[test]
    fn test_group_by_expression_preserves_order_and_buckets() {
        let records = vec![
            record("Avatar1", "Smile", "mouth_smile"),
            record("Avatar1", "Smile", "eye_smile"),
            record("Avatar1", "Blink", "eye_close"),
        ];
        let refs: Vec<&ExpressionRecord> = records.iter().collect();
        let grouped = group_by_expression(&refs);

        let keys: Vec<&String> = grouped.keys().collect();
        assert_eq!(keys, vec!["Smile", "Blink"]);
        assert_eq!(grouped["Smile"].len(), 2);
        assert_eq!(grouped["Smile"][1].blend_shape_name, "eye_smile");
    }
}
