//! Fuzz target for detection result parsing and reporting.

#![no_main]

use libfuzzer_sys::fuzz_target;
use labelpaint::detection::{
    face_annotations, text_annotations, FaceDetection, FaceReport, TextRead, TextReport,
};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(read) = serde_json::from_slice::<TextRead>(data) {
        let _ = text_annotations(&read);
        let _ = TextReport(&read).to_string();
    }
    if let Ok(faces) = serde_json::from_slice::<FaceDetection>(data) {
        let _ = face_annotations(&faces);
        let _ = FaceReport(&faces).to_string();
    }
});
