//! VRM表情CSV→画像埋め込みExcel変換ツール
//!
//! VRM Expression Exporterが出力した表情一覧CSVを読み込み、
//! キャラクターごとに1シート、表情ごとに1行ブロックの
//! サムネイル付きExcelを生成する。

pub mod cli;
pub mod error;
pub mod export;
pub mod parser;
pub mod thumbnail;
pub mod types;

pub use error::{ExprExcelError, Result};
pub use types::ExpressionRecord;
