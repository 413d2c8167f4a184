//! Excel生成
//!
//! 1キャラクター = 1シート。シート内は表情ごとの行ブロックで、
//! 表情名セルと画像セルをブロックの行範囲でマージする。
//! ブロック間には区切りとして空行を1行挟む（レイアウト上の仕様）。

use crate::error::Result;
use crate::parser::{group_by_character, group_by_expression};
use crate::thumbnail;
use crate::types::ExpressionRecord;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, Image, ObjectMovement, Workbook, Worksheet,
};
use std::path::Path;

/// ヘッダー行（固定5列）
const HEADERS: [&str; 5] = [
    "表情名",
    "画像",
    "ブレンドシェイプパス",
    "ブレンドシェイプ名",
    "値(%)",
];

/// 列幅（表情名、画像、パス、名前、値）
const COLUMN_WIDTHS: [f64; 5] = [20.0, 14.0, 30.0, 30.0, 10.0];

/// 画像を埋め込んだ行の高さ
const IMAGE_ROW_HEIGHT: f64 = 65.0;

/// 2行目以降の詳細行の高さ
const DETAIL_ROW_HEIGHT: f64 = 20.0;

/// Excelのシート名上限
const SHEET_NAME_MAX_CHARS: usize = 31;

/// 画像ファイルが存在しない場合のセル表記
pub const NO_IMAGE_TEXT: &str = "画像なし";

/// 画像の読み込み・埋め込みに失敗した場合のセル表記
pub const IMAGE_ERROR_TEXT: &str = "画像読み込みエラー";

/// 画像セルの結果
enum ImageCell {
    /// 画像を埋め込んだ（セル文字列は空）
    Embedded,
    /// 画像パスが空欄
    Blank,
    /// 画像ファイルが存在しない
    Missing,
    /// デコード・埋め込みに失敗（非致命、警告のみ）
    LoadError,
}

impl ImageCell {
    fn text(&self) -> &'static str {
        match self {
            ImageCell::Embedded | ImageCell::Blank => "",
            ImageCell::Missing => NO_IMAGE_TEXT,
            ImageCell::LoadError => IMAGE_ERROR_TEXT,
        }
    }
}

/// キャラクター名からシート名を作る
///
/// Excelの31文字制限に合わせて切り詰め、シート名に使えない
/// パス区切り文字をアンダースコアに置き換える。
pub fn sheet_title(character: &str) -> String {
    character
        .chars()
        .take(SHEET_NAME_MAX_CHARS)
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect()
}

/// 全レコードからワークブックを組み立てる
///
/// `project_root` はCSV内の相対画像パスの基準ディレクトリ。
pub fn build_workbook(
    records: &[ExpressionRecord],
    project_root: &Path,
    verbose: bool,
) -> Result<Workbook> {
    let mut workbook = Workbook::new();

    for (character, char_records) in group_by_character(records) {
        println!("  - {}", character);
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_title(&character))?;
        write_character_sheet(worksheet, &char_records, project_root, verbose)?;
    }

    Ok(workbook)
}

/// 1キャラクター分のシートを書き込む
fn write_character_sheet(
    worksheet: &mut Worksheet,
    records: &[&ExpressionRecord],
    project_root: &Path,
    verbose: bool,
) -> Result<()> {
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xCCCCCC))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let body_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let merged_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let mut current_row: u32 = 1;

    for (expression, expr_records) in group_by_expression(records) {
        let start_row = current_row;

        if verbose {
            println!("      {} ({}行)", expression, expr_records.len());
        }

        let image_cell =
            embed_expression_image(worksheet, start_row, expr_records[0], project_root)?;

        for (i, record) in expr_records.iter().enumerate() {
            if i > 0 {
                current_row += 1;
                worksheet.set_row_height(current_row, DETAIL_ROW_HEIGHT)?;
            }
            worksheet.write_string_with_format(current_row, 2, &record.blend_shape_path, &body_format)?;
            worksheet.write_string_with_format(current_row, 3, &record.blend_shape_name, &body_format)?;
            worksheet.write_string_with_format(current_row, 4, &record.value_percent, &body_format)?;
        }

        // 複数行のブロックは表情名セルと画像セルを行範囲でマージする
        if expr_records.len() > 1 {
            worksheet.merge_range(start_row, 0, current_row, 0, &expression, &merged_format)?;
            worksheet.merge_range(start_row, 1, current_row, 1, image_cell.text(), &merged_format)?;
        } else {
            worksheet.write_string_with_format(start_row, 0, &expression, &body_format)?;
            worksheet.write_string_with_format(start_row, 1, image_cell.text(), &body_format)?;
        }

        // 次のブロックとの間に区切りの空行を1行挟む
        current_row += 2;
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    Ok(())
}

/// 表情ブロックの先頭行に画像を埋め込む
///
/// 画像まわりの失敗はすべて非致命で、プレースホルダ文字列に
/// 置き換えて処理を続行する。
fn embed_expression_image(
    worksheet: &mut Worksheet,
    row: u32,
    record: &ExpressionRecord,
    project_root: &Path,
) -> Result<ImageCell> {
    if record.image_path.is_empty() {
        return Ok(ImageCell::Blank);
    }

    let image_path = project_root.join(&record.image_path);
    if !image_path.exists() {
        return Ok(ImageCell::Missing);
    }

    let png = match thumbnail::render_thumbnail(
        &image_path,
        thumbnail::STORED_MAX_PX,
        thumbnail::STORED_MAX_PX,
    ) {
        Ok(png) => png,
        Err(e) => {
            eprintln!("⚠ 画像読み込み失敗: {}", e);
            return Ok(ImageCell::LoadError);
        }
    };

    let image = match Image::new_from_buffer(&png) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("⚠ 画像埋め込み失敗 ({}): {}", image_path.display(), e);
            return Ok(ImageCell::LoadError);
        }
    };

    // 保存解像度に関係なく80x80で表示する
    let scale_width = thumbnail::DISPLAY_SIZE_PX / image.width();
    let scale_height = thumbnail::DISPLAY_SIZE_PX / image.height();
    let image = image
        .set_scale_width(scale_width)
        .set_scale_height(scale_height)
        .set_object_movement(ObjectMovement::MoveButDontSizeWithCells);

    if let Err(e) = worksheet.insert_image(row, 1, &image) {
        eprintln!("⚠ 画像埋め込み失敗 ({}): {}", image_path.display(), e);
        return Ok(ImageCell::LoadError);
    }

    // サムネイルが収まるように行の高さを確保する
    worksheet.set_row_height(row, IMAGE_ROW_HEIGHT)?;

    Ok(ImageCell::Embedded)
}
