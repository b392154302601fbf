#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const CYAN: Rgba<u8> = Rgba([0, 255, 255, 255]);
pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const LIGHT_GREEN: Rgba<u8> = Rgba([144, 238, 144, 255]);

pub fn solid_image(width: u32, height: u32, color: Rgba<u8>) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, color))
}

/// Writes a solid image; the extension picks the format.
pub fn write_solid_image(path: &Path, width: u32, height: u32, color: Rgba<u8>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    solid_image(width, height, color)
        .to_rgb8()
        .save(path)
        .expect("write image file");
}

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn open_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("decode output image").to_rgba8()
}

/// Largest per-channel difference between two colors.
pub fn channel_distance(a: Rgba<u8>, b: Rgba<u8>) -> u8 {
    a.0.iter()
        .zip(b.0.iter())
        .take(3)
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}
