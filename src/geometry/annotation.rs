//! Annotations: a geometry plus the text that travels with it.

use serde::{Deserialize, Serialize};

use super::bbox::BoundingBox;
use super::point::Point;
use super::polygon::{ClosedPath, Polygon};
use super::GeometryIssue;

/// The shape of a single annotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Axis-aligned rectangle (objects, people, faces).
    Box(BoundingBox),
    /// Arbitrary closed outline (OCR lines and words).
    Polygon(Polygon),
}

impl Geometry {
    /// Checks that the geometry can be drawn.
    pub fn check(&self) -> Result<(), GeometryIssue> {
        match self {
            Geometry::Box(bbox) => bbox.check(),
            Geometry::Polygon(polygon) => polygon.check(),
        }
    }

    /// Returns the closed outline to stroke.
    pub fn outline(&self) -> ClosedPath {
        match self {
            Geometry::Box(bbox) => super::polygon_path(&bbox.corners()),
            Geometry::Polygon(polygon) => polygon.path(),
        }
    }

    /// Returns the axis-aligned extent of the geometry as (min, max), or
    /// `None` for a polygon without points.
    pub fn extent(&self) -> Option<(Point, Point)> {
        match self {
            Geometry::Box(bbox) => Some((bbox.top_left(), bbox.bottom_right())),
            Geometry::Polygon(polygon) => {
                let first = polygon.points.first()?;
                let init = (*first, *first);
                Some(polygon.points.iter().fold(init, |(min, max), p| {
                    (
                        Point::new(min.x.min(p.x), min.y.min(p.y)),
                        Point::new(max.x.max(p.x), max.y.max(p.y)),
                    )
                }))
            }
        }
    }
}

impl From<BoundingBox> for Geometry {
    fn from(bbox: BoundingBox) -> Self {
        Geometry::Box(bbox)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

/// One thing to draw: a geometry with optional label, confidence and id.
///
/// Confidence is carried for reporting only; it never changes how the
/// annotation is drawn. Whether it appears in the label is up to the code
/// building the label string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub geometry: Geometry,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Sequential identifier, e.g. the N in "Face number N".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

impl Annotation {
    /// Creates an annotation with no label, confidence or id.
    pub fn new(geometry: impl Into<Geometry>) -> Self {
        Self {
            geometry: geometry.into(),
            label: None,
            confidence: None,
            id: None,
        }
    }

    /// Shorthand for a rectangle annotation.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(BoundingBox::new(x, y, width, height))
    }

    /// Shorthand for a polygon annotation.
    pub fn polygon(points: impl Into<Vec<Point>>) -> Self {
        Self::new(Polygon::new(points))
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the confidence score.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Sets the sequential identifier.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// Text to draw next to the geometry: the label, else the id.
    pub fn label_text(&self) -> Option<String> {
        match (&self.label, self.id) {
            (Some(label), _) => Some(label.clone()),
            (None, Some(id)) => Some(id.to_string()),
            (None, None) => None,
        }
    }
}

/// A list of annotations as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSet {
    pub annotations: Vec<Annotation>,
}
