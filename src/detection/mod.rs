//! Detection results from vision services.
//!
//! A provider adapter (outside this crate) authenticates, calls the cloud
//! service and parses its response into the models in this module. From
//! there, [`policy`] decides which annotations to draw and [`report`]
//! formats the console output.

pub mod model;
pub mod policy;
pub mod report;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LabelpaintError;

pub use model::{
    Accessory, Caption, DetectedFace, DetectedObject, DetectedPerson, FaceAttributes,
    FaceDetection, FaceRectangle, HeadPose, ImageAnalysis, Occlusion, Tag, TextBlock, TextLine,
    TextRead, TextWord,
};
pub use policy::{face_annotations, object_annotations, people_annotations, text_annotations};
pub use report::{AnalysisReport, FaceReport, TextReport};

/// Reads an image analysis result from a JSON file.
pub fn read_image_analysis(path: &Path) -> Result<ImageAnalysis, LabelpaintError> {
    read_json(path)
}

/// Reads a text read (OCR) result from a JSON file.
pub fn read_text_read(path: &Path) -> Result<TextRead, LabelpaintError> {
    read_json(path)
}

/// Reads a face detection result from a JSON file.
pub fn read_face_detection(path: &Path) -> Result<FaceDetection, LabelpaintError> {
    read_json(path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LabelpaintError> {
    let file = File::open(path).map_err(LabelpaintError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| LabelpaintError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
