//! Console reports for detection results.
//!
//! Each report borrows a result and renders it with `Display`, in the
//! layout users of the vision samples expect.

use std::fmt;

use crate::geometry::Polygon;

use super::model::{FaceDetection, ImageAnalysis, TextRead};

/// Caption, dense captions, tags, objects and people of an analysis.
pub struct AnalysisReport<'a>(pub &'a ImageAnalysis);

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;

        if let Some(caption) = &analysis.caption {
            writeln!(f, " Caption:")?;
            writeln!(
                f,
                "   \"{}\", Confidence {:.2}",
                caption.text, caption.confidence
            )?;
            writeln!(f)?;
        }

        if !analysis.dense_captions.is_empty() {
            writeln!(f, " Dense Captions:")?;
            for caption in &analysis.dense_captions {
                writeln!(
                    f,
                    "   Caption: '{}', Confidence: {:.2}",
                    caption.text, caption.confidence
                )?;
            }
            writeln!(f)?;
        }

        if !analysis.tags.is_empty() {
            writeln!(f, " Tags:")?;
            for tag in &analysis.tags {
                writeln!(f, "   '{}', Confidence: {:.2}", tag.name, tag.confidence)?;
            }
            writeln!(f)?;
        }

        if !analysis.objects.is_empty() {
            writeln!(f, " Objects:")?;
            for object in &analysis.objects {
                match object.primary_tag() {
                    Some(tag) => writeln!(f, "   \"{}\"", tag.name)?,
                    None => writeln!(f, "   (untagged) {}", object.bounding_box)?,
                }
            }
            writeln!(f)?;
        }

        if !analysis.people.is_empty() {
            writeln!(f, " People:")?;
            for person in &analysis.people {
                writeln!(
                    f,
                    "   Bounding box {}, Confidence: {:.2}",
                    person.bounding_box, person.confidence
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Every line of a text read, with its polygon and its words.
pub struct TextReport<'a>(pub &'a TextRead);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Text:")?;
        for line in self.0.lines() {
            writeln!(f, "   '{}'", line.text)?;
            writeln!(
                f,
                "   Bounding Polygon: [{}]",
                Polygon::new(line.bounding_polygon.clone())
            )?;
            for word in &line.words {
                writeln!(
                    f,
                    "     Word: '{}', Confidence {:.4}, Bounding Polygon: [{}]",
                    word.text,
                    word.confidence,
                    Polygon::new(word.bounding_polygon.clone())
                )?;
            }
        }
        Ok(())
    }
}

/// Face count followed by the attributes of each face.
pub struct FaceReport<'a>(pub &'a FaceDetection);

impl fmt::Display for FaceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces = &self.0.faces;
        if faces.is_empty() {
            return writeln!(f, "No faces detected.");
        }

        writeln!(f, "{} faces detected.", faces.len())?;
        for (number, face) in (1..).zip(faces) {
            writeln!(f)?;
            writeln!(f, "Face number {}", number)?;

            let Some(attributes) = &face.attributes else {
                continue;
            };
            let pose = attributes.head_pose;
            writeln!(f, " - Head Pose (Yaw): {}", pose.yaw)?;
            writeln!(f, " - Head Pose (Pitch): {}", pose.pitch)?;
            writeln!(f, " - Head Pose (Roll): {}", pose.roll)?;

            let occlusion = attributes.occlusion;
            writeln!(f, " - Forehead occluded: {}", occlusion.forehead_occluded)?;
            writeln!(f, " - Eye occluded: {}", occlusion.eye_occluded)?;
            writeln!(f, " - Mouth occluded: {}", occlusion.mouth_occluded)?;

            writeln!(f, " - Accessories:")?;
            for accessory in &attributes.accessories {
                writeln!(f, "   - {}", accessory.kind)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::model::*;
    use crate::geometry::{BoundingBox, Point};

    #[test]
    fn test_analysis_report_layout() {
        let analysis = ImageAnalysis {
            caption: Some(Caption {
                text: "a man riding a bicycle".into(),
                confidence: 0.6512,
            }),
            tags: vec![Tag { name: "outdoor".into(), confidence: 0.998 }],
            objects: vec![DetectedObject {
                bounding_box: BoundingBox::new(1.0, 2.0, 3.0, 4.0),
                tags: vec![Tag { name: "person".into(), confidence: 0.8 }],
            }],
            people: vec![DetectedPerson {
                bounding_box: BoundingBox::new(10.0, 20.0, 30.0, 40.0),
                confidence: 0.9456,
            }],
            ..Default::default()
        };

        let text = AnalysisReport(&analysis).to_string();
        assert!(text.contains("   \"a man riding a bicycle\", Confidence 0.65\n"));
        assert!(text.contains("   'outdoor', Confidence: 1.00\n"));
        assert!(text.contains(" Objects:\n   \"person\"\n"));
        assert!(text.contains("Bounding box {X=10,Y=20,Width=30,Height=40}, Confidence: 0.95"));
        assert!(!text.contains("Dense Captions"));
    }

    #[test]
    fn test_text_report_lists_words() {
        let poly = vec![Point::new(1.0, 2.0), Point::new(3.0, 2.0), Point::new(3.0, 4.0)];
        let read = TextRead {
            blocks: vec![TextBlock {
                lines: vec![TextLine {
                    text: "Four score".into(),
                    bounding_polygon: poly.clone(),
                    words: vec![TextWord {
                        text: "Four".into(),
                        confidence: 0.99,
                        bounding_polygon: poly,
                    }],
                }],
            }],
        };

        let text = TextReport(&read).to_string();
        assert!(text.starts_with("Text:\n   'Four score'\n"));
        assert!(text.contains("   Bounding Polygon: [{X=1,Y=2} {X=3,Y=2} {X=3,Y=4}]\n"));
        assert!(text.contains("     Word: 'Four', Confidence 0.9900, Bounding Polygon: ["));
    }

    #[test]
    fn test_face_report() {
        let detection = FaceDetection {
            faces: vec![DetectedFace {
                face_rectangle: FaceRectangle { left: 1, top: 2, width: 3, height: 4 },
                attributes: Some(FaceAttributes {
                    head_pose: HeadPose { yaw: 1.5, pitch: -3.0, roll: 0.0 },
                    occlusion: Occlusion {
                        forehead_occluded: false,
                        eye_occluded: true,
                        mouth_occluded: false,
                    },
                    accessories: vec![Accessory { kind: "glasses".into(), confidence: 0.99 }],
                }),
            }],
        };

        let text = FaceReport(&detection).to_string();
        assert!(text.starts_with("1 faces detected.\n\nFace number 1\n"));
        assert!(text.contains(" - Head Pose (Pitch): -3\n"));
        assert!(text.contains(" - Eye occluded: true\n"));
        assert!(text.ends_with(" - Accessories:\n   - glasses\n"));
    }

    #[test]
    fn test_empty_face_report() {
        let text = FaceReport(&FaceDetection::default()).to_string();
        assert_eq!(text, "No faces detected.\n");
    }
}
