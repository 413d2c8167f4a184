//! CSVレコードの型定義
//!
//! VRM Expression Exporterが出力するCSVの1行に対応する。
//! 列が欠けていてもデフォルト値で読み込めるようにしておく
//! （スキーマ検証は行わない）。

use serde::{Deserialize, Serialize};

/// キャラクター名列が無い場合のフォールバック
pub const UNKNOWN_CHARACTER: &str = "Unknown";

fn default_character() -> String {
    UNKNOWN_CHARACTER.to_string()
}

/// 表情CSVの1レコード
///
/// 同じ（キャラクター, 表情）の組を持つレコードが複数あってよく、
/// それぞれが1つのブレンドシェイプ行になる。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpressionRecord {
    /// キャラクター（オブジェクト）名。1キャラクター = 1シート
    #[serde(rename = "オブジェクト名", default = "default_character")]
    pub character: String,

    /// 表情名。1表情 = 1行ブロック
    #[serde(rename = "表情名", default)]
    pub expression: String,

    /// サムネイル画像のパス（プロジェクトルートからの相対）
    #[serde(rename = "画像パス", default)]
    pub image_path: String,

    /// ブレンドシェイプを持つメッシュのパス
    #[serde(rename = "ブレンドシェイプパス", default)]
    pub blend_shape_path: String,

    /// ブレンドシェイプ名
    #[serde(rename = "ブレンドシェイプ名", default)]
    pub blend_shape_name: String,

    /// 値（%表記の文字列のまま保持する）
    #[serde(rename = "値(%)", default)]
    pub value_percent: String,
}
