use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExprExcelError {
    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("CSV解析エラー: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, ExprExcelError>;
