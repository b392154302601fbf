#![allow(dead_code)]

use labelpaint::geometry::{Annotation, BoundingBox, Point};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Any finite coordinate, including negative and far off-image values.
pub fn arb_coord() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6
}

pub fn arb_point() -> impl Strategy<Value = Point> {
    (arb_coord(), arb_coord()).prop_map(|(x, y)| Point::new(x, y))
}

/// A well-formed box anywhere in the plane.
pub fn arb_bbox() -> impl Strategy<Value = BoundingBox> {
    (arb_coord(), arb_coord(), 0.0..1.0e4, 0.0..1.0e4)
        .prop_map(|(x, y, w, h)| BoundingBox::new(x, y, w, h))
}

/// A box that fits comfortably inside a `size` x `size` canvas.
pub fn arb_bbox_inside(size: u32) -> impl Strategy<Value = BoundingBox> {
    let max = size as f64;
    (8.0..max / 2.0, 8.0..max / 2.0, 0.0..max / 2.0 - 8.0, 0.0..max / 2.0 - 8.0)
        .prop_map(|(x, y, w, h)| BoundingBox::new(x, y, w, h))
}

/// Polygon vertices inside a `size` x `size` canvas, kept off the border.
pub fn arb_polygon_inside(size: u32, max_points: usize) -> impl Strategy<Value = Vec<Point>> {
    let max = size as f64 - 8.0;
    prop::collection::vec(
        (8.0..max, 8.0..max).prop_map(|(x, y)| Point::new(x, y)),
        3..=max_points,
    )
}

/// Unlabelled boxes and polygons inside a `size` x `size` canvas.
pub fn arb_unlabelled_inside(size: u32) -> impl Strategy<Value = Annotation> {
    prop_oneof![
        arb_bbox_inside(size).prop_map(Annotation::new),
        arb_polygon_inside(size, 8).prop_map(Annotation::polygon),
    ]
}

/// Any finite coordinate, weighted towards the edges of the `f64` range.
pub fn arb_finite_coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e4..1.0e4,
        prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO,
        Just(1.0e308),
        Just(-1.0e308),
        Just(f64::MAX),
        Just(-f64::MAX),
    ]
}

/// Any finite, non-negative box side.
pub fn arb_finite_size() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0..1.0e4,
        prop::num::f64::POSITIVE | prop::num::f64::NORMAL | prop::num::f64::ZERO,
        Just(1.0e308),
        Just(f64::MAX),
    ]
}

/// A valid box or polygon anywhere in the finite plane, sometimes labelled.
pub fn arb_any_finite_annotation() -> impl Strategy<Value = Annotation> {
    let point = (arb_finite_coord(), arb_finite_coord()).prop_map(|(x, y)| Point::new(x, y));
    let geometry = prop_oneof![
        (arb_finite_coord(), arb_finite_coord(), arb_finite_size(), arb_finite_size())
            .prop_map(|(x, y, w, h)| Annotation::new(BoundingBox::new(x, y, w, h))),
        prop::collection::vec(point, 3..6).prop_map(Annotation::polygon),
    ];
    (geometry, any::<bool>())
        .prop_map(|(annotation, labelled)| {
            if labelled {
                annotation.with_label("far")
            } else {
                annotation
            }
        })
        .prop_filter("repeated points can leave too few vertices", |annotation| {
            annotation.geometry.check().is_ok()
        })
}
