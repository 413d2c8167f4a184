use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vrm-expr-excel")]
#[command(about = "VRM表情CSVを画像埋め込みExcelに変換するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSVファイルを画像埋め込みExcelに変換
    Convert {
        /// 入力CSVファイルのパス
        #[arg(required = true)]
        csv_file: PathBuf,

        /// 出力Excelファイル（デフォルト: 入力名_with_images.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
