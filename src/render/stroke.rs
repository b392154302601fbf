//! Outline-only stroking of closed paths.
//!
//! Segments are clipped in `f64` against the canvas, grown by the stroke's
//! half width, before anything is handed to the pixel routines. Geometry
//! anywhere in the finite plane therefore costs no more than geometry on
//! the canvas, and every coordinate that reaches `imageproc` fits in `i32`.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_filled_circle_mut, draw_line_segment_mut,
    draw_polygon_mut,
};
use imageproc::pixelops::interpolate;
use imageproc::point::Point as PixelPoint;

use super::style::Style;
use crate::geometry::{ClosedPath, Point};

/// Slack around the grown canvas so clipped ends and anti-aliased edges
/// never land on a visible pixel.
const CLIP_PAD: f64 = 2.0;

type Pos = (f64, f64);

/// Strokes every edge of `path`, including the closing edge. Never fills.
pub(crate) fn stroke_path(canvas: &mut RgbaImage, path: &ClosedPath, style: &Style) {
    let width = f64::from(style.stroke_width());
    let color = style.stroke_color();

    if width <= 1.0 {
        let clip = ClipRect::around(canvas, 0.5);
        for (a, b) in path.segments() {
            if let Some((start, end)) = clip.clip(a, b) {
                thin_segment(canvas, start, end, color, style.antialias());
            }
        }
        return;
    }

    let clip = ClipRect::around(canvas, width / 2.0);

    // Round joins first, so a path whose vertices all coincide still
    // leaves a dot instead of nothing.
    let radius = ((width - 1.0) / 2.0).round() as i32;
    for vertex in path.vertices() {
        if clip.contains(*vertex) {
            let center = (vertex.x.round() as i32, vertex.y.round() as i32);
            draw_filled_circle_mut(canvas, center, radius, color);
        }
    }
    for (a, b) in path.segments() {
        if let Some((start, end)) = clip.clip(a, b) {
            thick_segment(canvas, start, end, width, color, style.antialias());
        }
    }
}

/// The canvas grown by a margin on every side, in pixel-center coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
struct ClipRect {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl ClipRect {
    fn around(canvas: &RgbaImage, half_width: f64) -> Self {
        let pad = half_width + CLIP_PAD;
        Self {
            min_x: -pad,
            min_y: -pad,
            max_x: f64::from(canvas.width()) - 1.0 + pad,
            max_y: f64::from(canvas.height()) - 1.0 + pad,
        }
    }

    fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Liang-Barsky clipping of the segment `a`-`b`.
    ///
    /// Box corners may overflow to infinity (`x + width`), so endpoints are
    /// clamped to the finite range and the parameters are computed at half
    /// scale, where differences between any two finite values stay finite.
    /// A clipped end takes the boundary value exactly on the axis that cut
    /// it, so axis-aligned edges stay exact however far away they start.
    fn clip(&self, a: Point, b: Point) -> Option<(Pos, Pos)> {
        let [ax, ay, bx, by] = [a.x, a.y, b.x, b.y].map(|v| v.clamp(-f64::MAX, f64::MAX));
        if [ax, ay, bx, by].iter().any(|v| v.is_nan()) {
            return None;
        }
        let (hx, hy) = (ax / 2.0, ay / 2.0);
        let (dx, dy) = (bx / 2.0 - hx, by / 2.0 - hy);

        let mut enter: (f64, Option<Pin>) = (0.0, None);
        let mut leave: (f64, Option<Pin>) = (1.0, None);
        let bounds = [
            (-dx, hx - self.min_x / 2.0, Pin::X(self.min_x)),
            (dx, self.max_x / 2.0 - hx, Pin::X(self.max_x)),
            (-dy, hy - self.min_y / 2.0, Pin::Y(self.min_y)),
            (dy, self.max_y / 2.0 - hy, Pin::Y(self.max_y)),
        ];
        for (p, q, pin) in bounds {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > leave.0 {
                    return None;
                }
                if r > enter.0 {
                    enter = (r, Some(pin));
                }
            } else {
                if r < enter.0 {
                    return None;
                }
                if r < leave.0 {
                    leave = (r, Some(pin));
                }
            }
        }

        let at = |(t, pin): (f64, Option<Pin>), end: Pos| {
            let Some(pin) = pin else {
                return end;
            };
            let x = ((hx + t * dx) * 2.0).clamp(self.min_x, self.max_x);
            let y = ((hy + t * dy) * 2.0).clamp(self.min_y, self.max_y);
            match pin {
                Pin::X(v) => (v, y),
                Pin::Y(v) => (x, v),
            }
        };
        Some((at(enter, (ax, ay)), at(leave, (bx, by))))
    }
}

/// Boundary value a clipped end is pinned to.
#[derive(Clone, Copy, Debug)]
enum Pin {
    X(f64),
    Y(f64),
}

fn thin_segment(canvas: &mut RgbaImage, start: Pos, end: Pos, color: Rgba<u8>, antialias: bool) {
    if antialias {
        draw_antialiased_line_segment_mut(
            canvas,
            (start.0.round() as i32, start.1.round() as i32),
            (end.0.round() as i32, end.1.round() as i32),
            color,
            interpolate,
        );
    } else {
        draw_line_segment_mut(
            canvas,
            (start.0 as f32, start.1 as f32),
            (end.0 as f32, end.1 as f32),
            color,
        );
    }
}

/// Fills the quadrilateral covering the segment widened to `width`.
fn thick_segment(
    canvas: &mut RgbaImage,
    (ax, ay): Pos,
    (bx, by): Pos,
    width: f64,
    color: Rgba<u8>,
    antialias: bool,
) {
    let (dx, dy) = (bx - ax, by - ay);
    let len = dx.hypot(dy);
    if len < f64::from(f32::EPSILON) {
        return;
    }

    let half = width / 2.0;
    let (nx, ny) = (-dy / len * half, dx / len * half);
    let corners = [
        (ax + nx, ay + ny),
        (bx + nx, by + ny),
        (bx - nx, by - ny),
        (ax - nx, ay - ny),
    ];
    let quad: Vec<PixelPoint<i32>> = corners
        .iter()
        .map(|&(x, y)| PixelPoint::new(x.round() as i32, y.round() as i32))
        .collect();

    // draw_polygon_mut panics if the first and last points coincide,
    // which rounding can cause for strokes just over one pixel wide.
    if quad[0] == quad[3] {
        draw_line_segment_mut(canvas, (ax as f32, ay as f32), (bx as f32, by as f32), color);
    } else {
        draw_polygon_mut(canvas, &quad, color);
    }

    if antialias {
        for (from, to) in [(quad[0], quad[1]), (quad[3], quad[2])] {
            draw_antialiased_line_segment_mut(
                canvas,
                (from.x, from.y),
                (to.x, to.y),
                color,
                interpolate,
            );
        }
    }
}
