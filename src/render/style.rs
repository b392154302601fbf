//! Visual style shared by every annotation in one rendering pass.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::FontVec;
use image::Rgba;

use crate::error::StyleError;

pub const CYAN: Rgba<u8> = Rgba([0, 255, 255, 255]);
pub const LIGHT_GREEN: Rgba<u8> = Rgba([144, 238, 144, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Widest stroke a style accepts, in pixels.
pub const MAX_STROKE_WIDTH: f32 = 256.0;

/// Largest label font size a style accepts, in pixels.
pub const MAX_FONT_SIZE: f32 = 1024.0;

/// Parses a color name or a `#rrggbb` / `#rrggbbaa` hex string.
pub fn parse_color(value: &str) -> Result<Rgba<u8>, StyleError> {
    let trimmed = value.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| StyleError::InvalidColor(value.to_string()));
    }

    let rgb = match trimmed.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "lime" => [0, 255, 0],
        "lightgreen" | "light_green" => [144, 238, 144],
        "blue" => [0, 0, 255],
        "cyan" | "aqua" => [0, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255],
        "yellow" => [255, 255, 0],
        "orange" => [255, 165, 0],
        "gray" | "grey" => [128, 128, 128],
        _ => return Err(StyleError::InvalidColor(value.to_string())),
    };
    Ok(Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}

/// Typeface used for labels.
#[derive(Clone, Default)]
pub enum LabelFont {
    /// Built-in bitmap face; always available.
    #[default]
    Bitmap,
    /// A TrueType/OpenType font loaded from disk.
    TrueType { path: PathBuf, font: Arc<FontVec> },
}

impl LabelFont {
    /// Loads a font file.
    pub fn load(path: &Path) -> Result<Self, StyleError> {
        let data = std::fs::read(path).map_err(|source| StyleError::FontRead {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|_| StyleError::FontParse {
            path: path.to_path_buf(),
        })?;
        Ok(LabelFont::TrueType {
            path: path.to_path_buf(),
            font: Arc::new(font),
        })
    }
}

impl fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelFont::Bitmap => write!(f, "Bitmap"),
            LabelFont::TrueType { path, .. } => f.debug_tuple("TrueType").field(path).finish(),
        }
    }
}

/// Stroke and text settings for a rendering pass.
///
/// Built once through [`StyleBuilder`] and then only read. Every
/// annotation in a pass is drawn with the same `Style`.
#[derive(Clone, Debug)]
pub struct Style {
    stroke_color: Rgba<u8>,
    stroke_width: f32,
    text_color: Rgba<u8>,
    fill_color: Option<Rgba<u8>>,
    antialias: bool,
    font_size: f32,
    font: LabelFont,
}

impl Style {
    /// Starts a builder from the default style.
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    pub fn stroke_color(&self) -> Rgba<u8> {
        self.stroke_color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn text_color(&self) -> Rgba<u8> {
        self.text_color
    }

    /// Background behind label text, if any.
    pub fn fill_color(&self) -> Option<Rgba<u8>> {
        self.fill_color
    }

    pub fn antialias(&self) -> bool {
        self.antialias
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn font(&self) -> &LabelFont {
        &self.font
    }
}

impl Default for Style {
    /// Cyan 3px strokes with cyan 24px labels.
    fn default() -> Self {
        Self {
            stroke_color: CYAN,
            stroke_width: 3.0,
            text_color: CYAN,
            fill_color: None,
            antialias: true,
            font_size: 24.0,
            font: LabelFont::Bitmap,
        }
    }
}

/// Builder for [`Style`]; validation happens in [`StyleBuilder::build`].
#[derive(Clone, Debug)]
pub struct StyleBuilder {
    stroke_color: Rgba<u8>,
    stroke_width: f32,
    text_color: Rgba<u8>,
    fill_color: Option<Rgba<u8>>,
    antialias: bool,
    font_size: f32,
    font_path: Option<PathBuf>,
}

impl Default for StyleBuilder {
    fn default() -> Self {
        let style = Style::default();
        Self {
            stroke_color: style.stroke_color,
            stroke_width: style.stroke_width,
            text_color: style.text_color,
            fill_color: style.fill_color,
            antialias: style.antialias,
            font_size: style.font_size,
            font_path: None,
        }
    }
}

impl StyleBuilder {
    pub fn stroke_color(mut self, color: Rgba<u8>) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn text_color(mut self, color: Rgba<u8>) -> Self {
        self.text_color = color;
        self
    }

    pub fn fill_color(mut self, color: Option<Rgba<u8>>) -> Self {
        self.fill_color = color;
        self
    }

    pub fn antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Uses a TrueType/OpenType file instead of the bitmap face.
    pub fn font_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    /// Validates the settings and loads the font, if one was given.
    pub fn build(self) -> Result<Style, StyleError> {
        // Written as negated comparisons so NaN is rejected as well.
        if !(self.stroke_width > 0.0) || !self.stroke_width.is_finite() {
            return Err(StyleError::NonPositiveStrokeWidth(self.stroke_width));
        }
        if !(self.font_size > 0.0) || !self.font_size.is_finite() {
            return Err(StyleError::NonPositiveFontSize(self.font_size));
        }
        if self.stroke_width > MAX_STROKE_WIDTH {
            return Err(StyleError::StrokeWidthTooLarge {
                width: self.stroke_width,
                max: MAX_STROKE_WIDTH,
            });
        }
        if self.font_size > MAX_FONT_SIZE {
            return Err(StyleError::FontSizeTooLarge {
                size: self.font_size,
                max: MAX_FONT_SIZE,
            });
        }
        let font = match &self.font_path {
            Some(path) => LabelFont::load(path)?,
            None => LabelFont::Bitmap,
        };

        Ok(Style {
            stroke_color: self.stroke_color,
            stroke_width: self.stroke_width,
            text_color: self.text_color,
            fill_color: self.fill_color,
            antialias: self.antialias,
            font_size: self.font_size,
            font,
        })
    }
}
