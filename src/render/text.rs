//! Label text drawing.
//!
//! Labels are drawn with a TrueType font when the style names one, and
//! otherwise with a small built-in bitmap face so that rendering never
//! depends on fonts installed on the host.

use ab_glyph::PxScale;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use super::style::{LabelFont, Style};

/// Glyph cell of the bitmap face, in font units.
const GLYPH_COLS: u32 = 3;
const GLYPH_ROWS: u32 = 5;

/// Font size covered by one bitmap font unit.
const UNITS_PER_PIXEL: f32 = 6.0;

/// Draws `text` with its top-left corner at `(x, y)`, left aligned.
///
/// Returns the width and height of the text box. Pixels falling outside
/// the canvas are clipped, and a box entirely off the canvas draws nothing.
pub(crate) fn draw_label(canvas: &mut RgbaImage, x: i32, y: i32, text: &str, style: &Style) -> (u32, u32) {
    let (width, height) = measure(text, style);
    let Some(visible) = visible_rect(canvas, x, y, width, height) else {
        return (width, height);
    };

    if let Some(fill) = style.fill_color() {
        draw_filled_rect_mut(canvas, visible, fill);
    }

    match style.font() {
        LabelFont::TrueType { font, .. } => {
            let scale = PxScale::from(style.font_size());
            draw_text_mut(canvas, style.text_color(), x, y, scale, font.as_ref(), text);
        }
        LabelFont::Bitmap => {
            draw_bitmap_text(canvas, x, y, text, bitmap_scale(style.font_size()), style.text_color());
        }
    }
    (width, height)
}

/// Size of the box `text` occupies when drawn with `style`.
pub(crate) fn measure(text: &str, style: &Style) -> (u32, u32) {
    match style.font() {
        LabelFont::TrueType { font, .. } => {
            text_size(PxScale::from(style.font_size()), font.as_ref(), text)
        }
        LabelFont::Bitmap => {
            let scale = bitmap_scale(style.font_size());
            let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
            if chars == 0 {
                return (0, 0);
            }
            let advance = (GLYPH_COLS + 1).saturating_mul(scale);
            (
                chars.saturating_mul(advance).saturating_sub(scale),
                GLYPH_ROWS.saturating_mul(scale),
            )
        }
    }
}

/// The part of a `width` x `height` box at `(x, y)` that lies on the canvas.
fn visible_rect(canvas: &RgbaImage, x: i32, y: i32, width: u32, height: u32) -> Option<Rect> {
    let left = i64::from(x).max(0);
    let top = i64::from(y).max(0);
    let right = (i64::from(x) + i64::from(width)).min(i64::from(canvas.width()));
    let bottom = (i64::from(y) + i64::from(height)).min(i64::from(canvas.height()));
    if left >= right || top >= bottom {
        return None;
    }
    Some(Rect::at(left as i32, top as i32).of_size((right - left) as u32, (bottom - top) as u32))
}

fn bitmap_scale(font_size: f32) -> u32 {
    ((font_size / UNITS_PER_PIXEL).round() as u32).max(1)
}

fn draw_bitmap_text(canvas: &mut RgbaImage, x: i32, y: i32, text: &str, scale: u32, color: Rgba<u8>) {
    let advance = i64::from((GLYPH_COLS + 1).saturating_mul(scale));
    let mut cx = i64::from(x);
    for c in text.chars() {
        if cx >= i64::from(canvas.width()) {
            break;
        }
        draw_glyph(canvas, cx, i64::from(y), glyph(c), i64::from(scale), color);
        cx += advance;
    }
}

fn draw_glyph(canvas: &mut RgbaImage, x: i64, y: i64, rows: [u8; 5], scale: i64, color: Rgba<u8>) {
    let (width, height) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for (row, bits) in (0i64..).zip(rows) {
        let top = (y + row * scale).max(0);
        let bottom = (y + (row + 1) * scale).min(height);
        if top >= bottom {
            continue;
        }
        for col in 0..GLYPH_COLS {
            if (bits >> (GLYPH_COLS - 1 - col)) & 1 == 0 {
                continue;
            }
            let col = i64::from(col);
            let left = (x + col * scale).max(0);
            let right = (x + (col + 1) * scale).min(width);
            for py in top..bottom {
                for px in left..right {
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

/// 3x5 bitmap rows for `c`, three bits per row, most significant bit on
/// the left. Lowercase letters reuse the uppercase shapes, accented Latin
/// letters their base letter, and anything else without a shape is drawn
/// as `?`.
fn glyph(c: char) -> [u8; 5] {
    match fold_accent(c).to_ascii_uppercase() {
        '0' => [0x7, 0x5, 0x5, 0x5, 0x7],
        '1' => [0x2, 0x6, 0x2, 0x2, 0x7],
        '2' => [0x7, 0x1, 0x7, 0x4, 0x7],
        '3' => [0x7, 0x1, 0x7, 0x1, 0x7],
        '4' => [0x5, 0x5, 0x7, 0x1, 0x1],
        '5' => [0x7, 0x4, 0x7, 0x1, 0x7],
        '6' => [0x7, 0x4, 0x7, 0x5, 0x7],
        '7' => [0x7, 0x1, 0x2, 0x4, 0x4],
        '8' => [0x7, 0x5, 0x7, 0x5, 0x7],
        '9' => [0x7, 0x5, 0x7, 0x1, 0x7],
        'A' => [0x2, 0x5, 0x7, 0x5, 0x5],
        'B' => [0x6, 0x5, 0x6, 0x5, 0x6],
        'C' => [0x3, 0x4, 0x4, 0x4, 0x3],
        'D' => [0x6, 0x5, 0x5, 0x5, 0x6],
        'E' => [0x7, 0x4, 0x6, 0x4, 0x7],
        'F' => [0x7, 0x4, 0x6, 0x4, 0x4],
        'G' => [0x3, 0x4, 0x5, 0x5, 0x3],
        'H' => [0x5, 0x5, 0x7, 0x5, 0x5],
        'I' => [0x7, 0x2, 0x2, 0x2, 0x7],
        'J' => [0x1, 0x1, 0x1, 0x5, 0x2],
        'K' => [0x5, 0x5, 0x6, 0x5, 0x5],
        'L' => [0x4, 0x4, 0x4, 0x4, 0x7],
        'M' => [0x5, 0x7, 0x7, 0x5, 0x5],
        'N' => [0x6, 0x5, 0x5, 0x5, 0x5],
        'O' => [0x2, 0x5, 0x5, 0x5, 0x2],
        'P' => [0x6, 0x5, 0x6, 0x4, 0x4],
        'Q' => [0x2, 0x5, 0x5, 0x6, 0x3],
        'R' => [0x6, 0x5, 0x6, 0x5, 0x5],
        'S' => [0x3, 0x4, 0x2, 0x1, 0x6],
        'T' => [0x7, 0x2, 0x2, 0x2, 0x2],
        'U' => [0x5, 0x5, 0x5, 0x5, 0x7],
        'V' => [0x5, 0x5, 0x5, 0x5, 0x2],
        'W' => [0x5, 0x5, 0x7, 0x7, 0x5],
        'X' => [0x5, 0x5, 0x2, 0x5, 0x5],
        'Y' => [0x5, 0x5, 0x2, 0x2, 0x2],
        'Z' => [0x7, 0x1, 0x2, 0x4, 0x7],
        ' ' => [0x0, 0x0, 0x0, 0x0, 0x0],
        '.' => [0x0, 0x0, 0x0, 0x0, 0x2],
        ',' => [0x0, 0x0, 0x0, 0x2, 0x4],
        ':' => [0x0, 0x2, 0x0, 0x2, 0x0],
        '-' => [0x0, 0x0, 0x7, 0x0, 0x0],
        '_' => [0x0, 0x0, 0x0, 0x0, 0x7],
        '+' => [0x0, 0x2, 0x7, 0x2, 0x0],
        '=' => [0x0, 0x7, 0x0, 0x7, 0x0],
        '/' => [0x1, 0x1, 0x2, 0x4, 0x4],
        '%' => [0x5, 0x1, 0x2, 0x4, 0x5],
        '#' => [0x5, 0x7, 0x5, 0x7, 0x5],
        '(' => [0x2, 0x4, 0x4, 0x4, 0x2],
        ')' => [0x2, 0x1, 0x1, 0x1, 0x2],
        '[' => [0x7, 0x4, 0x4, 0x4, 0x7],
        ']' => [0x7, 0x1, 0x1, 0x1, 0x7],
        '\'' => [0x2, 0x2, 0x0, 0x0, 0x0],
        '"' => [0x5, 0x5, 0x0, 0x0, 0x0],
        '!' => [0x2, 0x2, 0x2, 0x0, 0x2],
        _ => [0x7, 0x1, 0x2, 0x0, 0x2],
    }
}

/// Maps common accented Latin letters to their unaccented form.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ą' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ą' => 'A',
        'ç' | 'ć' | 'č' => 'c',
        'Ç' | 'Ć' | 'Č' => 'C',
        'ď' | 'đ' => 'd',
        'Ď' | 'Đ' => 'D',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => 'E',
        'ğ' => 'g',
        'Ğ' => 'G',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'ı' => 'i',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' | 'İ' => 'I',
        'ł' => 'l',
        'Ł' => 'L',
        'ñ' | 'ń' | 'ň' => 'n',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ő' => 'O',
        'ř' => 'r',
        'Ř' => 'R',
        'ś' | 'š' | 'ş' | 'ß' => 's',
        'Ś' | 'Š' | 'Ş' => 'S',
        'ť' | 'ţ' => 't',
        'Ť' | 'Ţ' => 'T',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' | 'Ű' => 'U',
        'ý' | 'ÿ' => 'y',
        'Ý' | 'Ÿ' => 'Y',
        'ź' | 'ż' | 'ž' => 'z',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        other => other,
    }
}
