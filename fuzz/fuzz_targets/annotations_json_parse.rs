//! Fuzz target for annotation list parsing.
//!
//! Feeds arbitrary bytes to the JSON parser and checks every list that
//! parses, so malformed geometry must surface as an issue and not a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use labelpaint::geometry::io_json::from_json_slice;
use labelpaint::validation::{validate_annotations, ValidateOptions};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(set) = from_json_slice(data) {
        let opts = ValidateOptions {
            strict: false,
            image_size: Some((640, 480)),
        };
        let _ = validate_annotations(&set.annotations, &opts);
    }
});
