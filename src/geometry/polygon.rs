//! Bounding polygons and the closed paths built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::point::Point;
use super::GeometryIssue;

/// Minimum number of distinct vertices a drawable polygon needs.
pub const MIN_POLYGON_POINTS: usize = 3;

/// An arbitrary outline, typically a text line or word returned by OCR.
///
/// The last point implicitly connects back to the first. The outline does
/// not have to be convex or axis-aligned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from an ordered point list.
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// Builds the closed stroke path for this polygon.
    pub fn path(&self) -> ClosedPath {
        polygon_path(&self.points)
    }

    /// Checks that every point is finite and that the path has enough
    /// vertices to enclose an area.
    pub fn check(&self) -> Result<(), GeometryIssue> {
        if !self.points.iter().all(Point::is_finite) {
            return Err(GeometryIssue::NonFinite);
        }
        let count = self.path().len();
        if count < MIN_POLYGON_POINTS {
            return Err(GeometryIssue::TooFewPoints { count });
        }
        Ok(())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{{X={},Y={}}}", point.x, point.y)?;
        }
        Ok(())
    }
}

/// A closed outline: every vertex once, with an implicit closing edge.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedPath {
    vertices: Vec<Point>,
}

impl ClosedPath {
    /// Returns the vertices in drawing order, without a repeated end point.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices (equal to the number of edges once closed).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over every edge, finishing with last -> first.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

/// Builds a closed path from `points` in input order.
///
/// When the input already repeats its first point at the end, that final
/// point is dropped so the path is not closed twice.
pub fn polygon_path(points: &[Point]) -> ClosedPath {
    let mut vertices = points.to_vec();
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    ClosedPath { vertices }
}
