//! Annotation list validation.
//!
//! The renderer stops at the first malformed geometry. This module instead
//! walks the whole list and reports every problem it finds, including
//! softer ones the renderer tolerates:
//! - Geometric validity (finite coordinates, non-negative sizes, enough
//!   polygon points)
//! - Data quality (confidence range, empty labels)
//! - Placement (geometry inside the image, when its size is known)

mod report;

pub use report::{IssueCode, IssueContext, Severity, ValidationIssue, ValidationReport};

use crate::geometry::{Annotation, Geometry, GeometryIssue};

/// Options for validation behavior.
#[derive(Clone, Debug, Default)]
pub struct ValidateOptions {
    /// If true, treat warnings as errors.
    pub strict: bool,

    /// Image width and height, enabling the out-of-bounds check.
    pub image_size: Option<(u32, u32)>,
}

/// Validates an annotation list and returns a report of all issues found.
pub fn validate_annotations(annotations: &[Annotation], opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (index, annotation) in annotations.iter().enumerate() {
        let context = IssueContext::Annotation { index };

        // Geometry problems are errors: the renderer would reject them.
        if let Err(issue) = annotation.geometry.check() {
            let code = match issue {
                GeometryIssue::NonFinite => IssueCode::NonFiniteCoordinates,
                GeometryIssue::NegativeSize { .. } => IssueCode::NegativeBoxSize,
                GeometryIssue::TooFewPoints { .. } => IssueCode::TooFewPolygonPoints,
            };
            report.add(ValidationIssue::error(code, issue.to_string(), context.clone()));
        } else if let Some((width, height)) = opts.image_size {
            check_bounds(&annotation.geometry, width, height, &context, &mut report);
        }

        if let Some(confidence) = annotation.confidence {
            if !(0.0..=1.0).contains(&confidence) {
                report.add(ValidationIssue::warning(
                    IssueCode::ConfidenceOutOfRange,
                    format!("Confidence {} is outside [0, 1]", confidence),
                    context.clone(),
                ));
            }
        }

        if annotation.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
            report.add(ValidationIssue::warning(
                IssueCode::EmptyLabel,
                "Label is empty",
                context,
            ));
        }
    }

    report
}

fn check_bounds(
    geometry: &Geometry,
    width: u32,
    height: u32,
    context: &IssueContext,
    report: &mut ValidationReport,
) {
    let Some((min, max)) = geometry.extent() else {
        return;
    };
    let (w, h) = (width as f64, height as f64);

    // Allow small tolerance for floating point
    let tolerance = 0.5;

    if min.x < -tolerance || min.y < -tolerance || max.x > w + tolerance || max.y > h + tolerance {
        report.add(ValidationIssue::warning(
            IssueCode::GeometryOutOfBounds,
            format!(
                "Extent ({:.1}, {:.1}, {:.1}, {:.1}) reaches outside image bounds (0, 0, {}, {})",
                min.x, min.y, max.x, max.y, width, height
            ),
            context.clone(),
        ));
    }
}
