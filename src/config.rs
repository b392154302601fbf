//! Application configuration.
//!
//! Styles and default output names, stored in TOML. Every key is optional;
//! a missing file section falls back to the look of the vision samples
//! (cyan boxes for analysis and OCR, light green boxes with white labels
//! for faces).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LabelpaintError, StyleError};
use crate::render::{parse_color, Style};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "LABELPAINT_CONFIG";

/// Application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Style for objects, people and text.
    pub style: StyleConfig,
    /// Style for faces.
    pub face_style: StyleConfig,
    /// Default output file names.
    pub output: OutputConfig,
}

impl AppConfig {
    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LabelpaintError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|source| LabelpaintError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads settings from `path`, or returns the defaults when no path is
    /// given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LabelpaintError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses settings from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Style settings as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_color: String,
    pub text_color: String,
    pub fill_color: Option<String>,
    pub stroke_width: f32,
    pub antialias: bool,
    pub font_size: f32,
    pub font_path: Option<PathBuf>,
}

impl StyleConfig {
    /// Default face style: light green boxes, white labels.
    pub fn faces() -> Self {
        Self {
            stroke_color: "lightgreen".to_string(),
            text_color: "white".to_string(),
            ..Self::default()
        }
    }

    /// Builds the immutable render style, loading the font if configured.
    pub fn to_style(&self) -> Result<Style, StyleError> {
        let mut builder = Style::builder()
            .stroke_color(parse_color(&self.stroke_color)?)
            .text_color(parse_color(&self.text_color)?)
            .fill_color(self.fill_color.as_deref().map(parse_color).transpose()?)
            .stroke_width(self.stroke_width)
            .antialias(self.antialias)
            .font_size(self.font_size);
        if let Some(path) = &self.font_path {
            builder = builder.font_file(path);
        }
        builder.build()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: "cyan".to_string(),
            text_color: "cyan".to_string(),
            fill_color: None,
            stroke_width: 3.0,
            antialias: true,
            font_size: 24.0,
            font_path: None,
        }
    }
}

/// Default file names for annotated images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub objects: PathBuf,
    pub people: PathBuf,
    pub text: PathBuf,
    pub faces: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            objects: PathBuf::from("objects.jpg"),
            people: PathBuf::from("people.jpg"),
            text: PathBuf::from("text.jpg"),
            faces: PathBuf::from("detected_faces.jpg"),
        }
    }
}
