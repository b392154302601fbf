//! JSON serialization for annotation lists.
//!
//! This is the exchange format between a detection provider adapter and
//! the renderer: a flat list of geometries with optional label, confidence
//! and id.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::annotation::AnnotationSet;
use crate::error::LabelpaintError;

/// Reads an annotation list from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_annotations_json(path: &Path) -> Result<AnnotationSet, LabelpaintError> {
    let file = File::open(path).map_err(LabelpaintError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| LabelpaintError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes an annotation list to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_annotations_json(path: &Path, set: &AnnotationSet) -> Result<(), LabelpaintError> {
    let file = File::create(path).map_err(LabelpaintError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, set).map_err(|source| LabelpaintError::JsonWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses an annotation list from a JSON string.
pub fn from_json_str(json: &str) -> Result<AnnotationSet, serde_json::Error> {
    serde_json::from_str(json)
}

/// Parses an annotation list from raw bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<AnnotationSet, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes an annotation list to a pretty-printed JSON string.
pub fn to_json_string(set: &AnnotationSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(set)
}
