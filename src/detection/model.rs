//! Normalized detection results.
//!
//! These mirror what a vision provider adapter hands over after it has
//! authenticated, called the service and parsed the response. Field names
//! are snake_case in JSON; every list defaults to empty so partial results
//! (e.g. analysis without people) deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::geometry::{BoundingBox, Point};

/// Result of a whole-image analysis call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Caption>,

    #[serde(default)]
    pub dense_captions: Vec<Caption>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub objects: Vec<DetectedObject>,

    #[serde(default)]
    pub people: Vec<DetectedPerson>,
}

/// A generated sentence describing the image or a region of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub confidence: f64,
}

/// A content tag such as "outdoor" or "bicycle".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub bounding_box: BoundingBox,

    /// Candidate names, best first.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl DetectedObject {
    /// The best tag, if the service returned any.
    pub fn primary_tag(&self) -> Option<&Tag> {
        self.tags.first()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedPerson {
    pub bounding_box: BoundingBox,
    pub confidence: f64,
}

/// Result of an OCR (text read) call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRead {
    #[serde(default)]
    pub blocks: Vec<TextBlock>,
}

impl TextRead {
    /// All lines across all blocks, in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.blocks.iter().flat_map(|block| block.lines.iter())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub lines: Vec<TextLine>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub bounding_polygon: Vec<Point>,

    #[serde(default)]
    pub words: Vec<TextWord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextWord {
    pub text: String,
    pub confidence: f64,
    pub bounding_polygon: Vec<Point>,
}

/// Result of a face detection call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    #[serde(default)]
    pub faces: Vec<DetectedFace>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    pub face_rectangle: FaceRectangle,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<FaceAttributes>,
}

/// Face location in whole pixels, as face services report it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRectangle {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl From<FaceRectangle> for BoundingBox {
    fn from(r: FaceRectangle) -> Self {
        BoundingBox::new(r.left as f64, r.top as f64, r.width as f64, r.height as f64)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceAttributes {
    #[serde(default)]
    pub head_pose: HeadPose,

    #[serde(default)]
    pub occlusion: Occlusion,

    #[serde(default)]
    pub accessories: Vec<Accessory>,
}

/// Head orientation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadPose {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occlusion {
    pub forehead_occluded: bool,
    pub eye_occluded: bool,
    pub mouth_occluded: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    /// e.g. "glasses", "headwear", "mask".
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,

    #[serde(default)]
    pub confidence: f64,
}
