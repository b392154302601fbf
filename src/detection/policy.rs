//! Turning detection results into annotation lists.
//!
//! Which detections get drawn, and with what label, is decided here and
//! not in the renderer.

use crate::geometry::{Annotation, BoundingBox, Polygon};

use super::model::{FaceDetection, ImageAnalysis, TextRead};

/// One box per detected object, labelled with its best tag.
///
/// Objects without any tag are still drawn, just without a label.
pub fn object_annotations(analysis: &ImageAnalysis) -> Vec<Annotation> {
    analysis
        .objects
        .iter()
        .map(|object| {
            let annotation = Annotation::new(object.bounding_box);
            match object.primary_tag() {
                Some(tag) => annotation
                    .with_label(tag.name.clone())
                    .with_confidence(tag.confidence),
                None => annotation,
            }
        })
        .collect()
}

/// One unlabelled box per detected person.
pub fn people_annotations(analysis: &ImageAnalysis) -> Vec<Annotation> {
    analysis
        .people
        .iter()
        .map(|person| Annotation::new(person.bounding_box).with_confidence(person.confidence))
        .collect()
}

/// Word polygons for every line that has words, the line polygon for the
/// lines that don't. A line never contributes both.
pub fn text_annotations(read: &TextRead) -> Vec<Annotation> {
    let mut annotations = Vec::new();
    for line in read.lines() {
        if line.words.is_empty() {
            annotations.push(Annotation::new(Polygon::new(line.bounding_polygon.clone())));
            continue;
        }
        annotations.extend(line.words.iter().map(|word| {
            Annotation::new(Polygon::new(word.bounding_polygon.clone()))
                .with_confidence(word.confidence)
        }));
    }
    annotations
}

/// One box per face, labelled "Face number N" in detection order.
pub fn face_annotations(detection: &FaceDetection) -> Vec<Annotation> {
    detection
        .faces
        .iter()
        .zip(1u32..)
        .map(|(face, number)| {
            Annotation::new(BoundingBox::from(face.face_rectangle))
                .with_label(format!("Face number {number}"))
                .with_id(number)
        })
        .collect()
}
