//! サムネイル生成
//!
//! 参照画像を読み込み、RGBAに変換した上で200x200以内に
//! 縮小（Lanczos3）し、PNGとしてメモリ上に再エンコードする。
//! 保存解像度は表示サイズ（80x80）より大きく保ち、後から手動で
//! 拡大しても画質が落ちないようにする。

use crate::error::{ExprExcelError, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// 埋め込み画像の保存上限（px）
pub const STORED_MAX_PX: u32 = 200;

/// セル上での表示サイズ（px）
pub const DISPLAY_SIZE_PX: f64 = 80.0;

/// 画像を読み込み、縮小済みPNGのバイト列を返す
///
/// アスペクト比を保ったまま `max_width` x `max_height` に収める。
/// 元画像が収まっている場合は拡大しない。
pub fn render_thumbnail(path: &Path, max_width: u32, max_height: u32) -> Result<Vec<u8>> {
    let img = image::open(path)
        .map_err(|e| ExprExcelError::ImageLoad(format!("{}: {}", path.display(), e)))?;

    // 透過をサポートするためRGBAに揃える
    let img = DynamicImage::ImageRgba8(img.to_rgba8());

    let img = if img.width() > max_width || img.height() > max_height {
        img.resize(max_width, max_height, FilterType::Lanczos3)
    } else {
        img
    };

    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| ExprExcelError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    Ok(buffer.into_inner())
}
