//! Axis-aligned bounding boxes in origin + size (XYWH) form.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::Point;
use super::GeometryIssue;

/// An axis-aligned bounding box: top-left origin plus width and height.
///
/// This is the shape detection services hand back for objects, people and
/// faces. Construction does not enforce non-negative sizes so that a bad
/// box from upstream can still be represented and then reported by
/// [`BoundingBox::check`] or the validation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from its top-left corner and size.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a bounding box from two opposite corners (XYXY).
    #[inline]
    pub fn from_xyxy(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self::new(xmin, ymin, xmax - xmin, ymax - ymin)
    }

    /// Returns the top-left corner.
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    /// Returns the area of the box. May be negative if the box is malformed.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if origin and size are all finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Returns the four corners in clockwise order. See [`box_to_corners`].
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        box_to_corners(self)
    }

    /// Checks that the box can be drawn.
    ///
    /// A zero-sized box is accepted; only non-finite values and negative
    /// sizes are rejected.
    pub fn check(&self) -> Result<(), GeometryIssue> {
        if !self.is_finite() {
            return Err(GeometryIssue::NonFinite);
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(GeometryIssue::NegativeSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{X={},Y={},Width={},Height={}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Returns the corners of `bbox` as top-left, top-right, bottom-right,
/// bottom-left.
///
/// The order is clockwise in image coordinates, where y grows downward.
pub fn box_to_corners(bbox: &BoundingBox) -> [Point; 4] {
    let right = bbox.x + bbox.width;
    let bottom = bbox.y + bbox.height;
    [
        Point::new(bbox.x, bbox.y),
        Point::new(right, bbox.y),
        Point::new(right, bottom),
        Point::new(bbox.x, bottom),
    ]
}
