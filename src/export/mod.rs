//! 変換の実行と出力パスの決定

pub mod excel;

use crate::error::Result;
use crate::parser;
use std::path::{Path, PathBuf};

/// 出力ファイル名のサフィックス
const OUTPUT_SUFFIX: &str = "_with_images.xlsx";

/// デフォルトの出力パスを導出する
///
/// 入力の `.csv` サフィックスを `_with_images.xlsx` に置き換える。
/// `data/expr.csv` → `data/expr_with_images.xlsx`
pub fn default_output_path(csv_path: &Path) -> PathBuf {
    let file_name = csv_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = file_name.strip_suffix(".csv").unwrap_or(&file_name);
    csv_path.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// 画像パスの基準となるプロジェクトルート
///
/// CSVファイル → 親 → 親（`Assets/VRMExpressionList.csv` なら
/// プロジェクト直下）を基準にする。
pub fn project_root(csv_path: &Path) -> PathBuf {
    csv_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""))
        .to_path_buf()
}

/// CSVを読み込み、画像埋め込みExcelを生成して保存する
///
/// 成功時は出力ファイルのパスを返す。画像単位の失敗は警告として
/// 処理を続行し、CSV読み込み・保存の失敗はエラーとして返す。
pub fn convert(csv_path: &Path, output: Option<&Path>, verbose: bool) -> Result<PathBuf> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(csv_path));
    let root = project_root(csv_path);

    println!("[1/3] CSVを読み込み中: {}", csv_path.display());
    let records = parser::read_csv(csv_path)?;
    println!("✔ {}件のレコードを読み込み\n", records.len());

    println!("[2/3] シートを生成中...");
    let mut workbook = excel::build_workbook(&records, &root, verbose)?;
    println!("✔ シート生成完了\n");

    println!("[3/3] Excelを保存中: {}", output_path.display());
    workbook.save(&output_path)?;

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_replaces_csv_suffix() {
        let path = default_output_path(Path::new("data/expr.csv"));
        assert_eq!(path, PathBuf::from("data/expr_with_images.xlsx"));
    }

    #[test]
    fn test_default_output_path_without_csv_suffix() {
        let path = default_output_path(Path::new("data/expr.txt"));
        assert_eq!(path, PathBuf::from("data/expr.txt_with_images.xlsx"));
    }

    #[test]
    fn test_project_root_is_grandparent() {
        assert_eq!(
            project_root(Path::new("project/Assets/VRMExpressionList.csv")),
            PathBuf::from("project")
        );
        assert_eq!(project_root(Path::new("expr.csv")), PathBuf::from(""));
    }
}
