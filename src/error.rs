use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::GeometryIssue;
use crate::validation::ValidationReport;

/// Failure of a single render call.
///
/// Every variant is terminal for the call that produced it: the renderer
/// never retries and never draws a partial annotation set.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid geometry in annotation {index}: {issue}")]
    InvalidGeometry { index: usize, issue: GeometryIssue },

    #[error("Failed to decode image {path}: {source}")]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image to {path}: {source}")]
    EncodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Problems building a [`Style`](crate::render::Style).
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("Stroke width must be positive, got {0}")]
    NonPositiveStrokeWidth(f32),

    #[error("Font size must be positive, got {0}")]
    NonPositiveFontSize(f32),

    #[error("Stroke width {width} exceeds the maximum of {max}")]
    StrokeWidthTooLarge { width: f32, max: f32 },

    #[error("Font size {size} exceeds the maximum of {max}")]
    FontSizeTooLarge { size: f32, max: f32 },

    #[error("Unknown color '{0}' (expected a name or #rrggbb[aa])")]
    InvalidColor(String),

    #[error("Failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {path} is not a usable TrueType/OpenType font")]
    FontParse { path: PathBuf },
}

/// The main error type for labelpaint operations.
#[derive(Debug, Error)]
pub enum LabelpaintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
