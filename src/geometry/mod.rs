//! Geometry for detection annotations.
//!
//! Detection services return two kinds of shapes: axis-aligned boxes for
//! objects, people and faces, and free-form quadrilaterals for OCR lines
//! and words. Both are variants of [`Geometry`].
//!
//! # Example
//!
//! ```
//! use labelpaint::geometry::{box_to_corners, Annotation, BoundingBox, Point};
//!
//! let bbox = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
//! assert_eq!(box_to_corners(&bbox)[2], Point::new(40.0, 60.0));
//!
//! let annotation = Annotation::new(bbox).with_label("person").with_confidence(0.93);
//! assert!(annotation.geometry.check().is_ok());
//! ```

mod annotation;
mod bbox;
pub mod io_json;
mod point;
mod polygon;

use thiserror::Error;

pub use annotation::{Annotation, AnnotationSet, Geometry};
pub use bbox::{box_to_corners, BoundingBox};
pub use point::Point;
pub use polygon::{polygon_path, ClosedPath, Polygon, MIN_POLYGON_POINTS};

/// Why a geometry cannot be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeometryIssue {
    #[error("coordinates must be finite")]
    NonFinite,

    #[error("box size {width}x{height} must not be negative")]
    NegativeSize { width: f64, height: f64 },

    #[error("polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },
}
