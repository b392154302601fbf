//! The annotation renderer.
//!
//! Takes a decoded image, an ordered list of [`Annotation`]s and a
//! [`Style`], strokes every geometry onto a private copy of the image and
//! encodes the result to a file. The caller's image is never modified, and
//! nothing is kept between calls, so independent renders may run on
//! separate threads as long as they write to different paths.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use labelpaint::geometry::Annotation;
//! use labelpaint::render::{decode_image, render, Style};
//!
//! let source = decode_image(Path::new("street.jpg"))?;
//! let annotations = vec![Annotation::rect(40.0, 60.0, 120.0, 80.0).with_label("car")];
//! let result = render(&source, &annotations, &Style::default(), Path::new("objects.jpg"))?;
//! assert_eq!(result.drawn, 1);
//! # Ok::<(), labelpaint::RenderError>(())
//! ```

mod codec;
mod stroke;
mod style;
mod text;

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};

pub use codec::{decode_image, encode_image, JPEG_QUALITY};
pub use style::{
    parse_color, LabelFont, Style, StyleBuilder, CYAN, LIGHT_GREEN, MAX_FONT_SIZE,
    MAX_STROKE_WIDTH, WHITE,
};

use crate::error::RenderError;
use crate::geometry::{Annotation, BoundingBox, Geometry};

/// Vertical gap between a box's top edge and its label.
pub const LABEL_OFFSET: f64 = 5.0;

/// Outcome of a successful render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    /// Where the annotated image was written.
    pub path: PathBuf,
    /// Number of annotations drawn.
    pub drawn: usize,
}

/// One unit of rendering work.
///
/// Borrowed inputs stay owned by the caller; the request itself is
/// consumed by [`RenderRequest::render`].
#[derive(Clone, Debug)]
pub struct RenderRequest<'a> {
    pub source: &'a DynamicImage,
    pub annotations: &'a [Annotation],
    pub style: &'a Style,
    pub output: PathBuf,
}

impl<'a> RenderRequest<'a> {
    pub fn new(
        source: &'a DynamicImage,
        annotations: &'a [Annotation],
        style: &'a Style,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            annotations,
            style,
            output: output.into(),
        }
    }

    /// Runs the request. See [`render`].
    pub fn render(self) -> Result<RenderResult, RenderError> {
        render(self.source, self.annotations, self.style, &self.output)
    }
}

/// Draws `annotations` onto a copy of `source` and writes it to `output`.
///
/// Annotations are drawn in order, so later entries end up on top. An
/// empty list is valid and writes an unannotated copy.
///
/// # Errors
/// - [`RenderError::InvalidGeometry`] if any annotation is malformed. All
///   geometry is checked before anything is drawn or written.
/// - [`RenderError::EncodeFailure`] if the output cannot be written or its
///   extension is not a supported image format.
pub fn render(
    source: &DynamicImage,
    annotations: &[Annotation],
    style: &Style,
    output: &Path,
) -> Result<RenderResult, RenderError> {
    let mut canvas = source.to_rgba8();
    let drawn = draw_annotations(&mut canvas, annotations, style)?;
    encode_image(&canvas, output)?;

    Ok(RenderResult {
        path: output.to_path_buf(),
        drawn,
    })
}

/// Draws `annotations` in place and returns how many were drawn.
///
/// Geometry is checked up front, so on error the canvas is untouched.
pub fn draw_annotations(
    canvas: &mut RgbaImage,
    annotations: &[Annotation],
    style: &Style,
) -> Result<usize, RenderError> {
    check_annotations(annotations)?;

    for annotation in annotations {
        stroke::stroke_path(canvas, &annotation.geometry.outline(), style);

        if let Geometry::Box(bbox) = &annotation.geometry {
            if let Some(label) = annotation.label_text() {
                let (x, y) = label_anchor(bbox);
                text::draw_label(canvas, x.round() as i32, y.round() as i32, &label, style);
            }
        }
    }
    Ok(annotations.len())
}

/// Top-left corner for a box label: just above the box, or at the box's
/// top edge when there is no room above it.
pub fn label_anchor(bbox: &BoundingBox) -> (f64, f64) {
    let above = bbox.y - LABEL_OFFSET;
    let y = if above < 0.0 { bbox.y } else { above };
    (bbox.x, y)
}

fn check_annotations(annotations: &[Annotation]) -> Result<(), RenderError> {
    for (index, annotation) in annotations.iter().enumerate() {
        annotation
            .geometry
            .check()
            .map_err(|issue| RenderError::InvalidGeometry { index, issue })?;
    }
    Ok(())
}
