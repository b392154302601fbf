//! Decoding source images and encoding annotated output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::error::{ImageFormatHint, UnsupportedError, UnsupportedErrorKind};
use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};

use crate::error::RenderError;

/// JPEG quality used for every output file.
pub const JPEG_QUALITY: u8 = 100;

/// Decodes the image at `path`, guessing the format from its content.
pub fn decode_image(path: &Path) -> Result<DynamicImage, RenderError> {
    let failure = |source| RenderError::DecodeFailure {
        path: path.to_path_buf(),
        source,
    };
    image::ImageReader::open(path)
        .map_err(|e| failure(ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| failure(ImageError::IoError(e)))?
        .decode()
        .map_err(failure)
}

/// Encodes `image` to `path` in the format implied by the extension.
///
/// JPEG is written at quality 100 and PNG with the best compression, so
/// repeated renders of the same input produce the same bytes. JPEG has no
/// alpha channel; the alpha is dropped before encoding.
pub fn encode_image(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    let failure = |source| RenderError::EncodeFailure {
        path: path.to_path_buf(),
        source,
    };

    let format = ImageFormat::from_path(path).map_err(failure)?;
    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Bmp) {
        return Err(failure(ImageError::Unsupported(
            UnsupportedError::from_format_and_kind(
                ImageFormatHint::Exact(format),
                UnsupportedErrorKind::Format(ImageFormatHint::Exact(format)),
            ),
        )));
    }

    let file = File::create(path).map_err(|e| failure(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);

    let written = match format {
        ImageFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY))
        }
        ImageFormat::Png => image.write_with_encoder(PngEncoder::new_with_quality(
            &mut writer,
            CompressionType::Best,
            FilterType::Adaptive,
        )),
        _ => image.write_with_encoder(BmpEncoder::new(&mut writer)),
    };
    written.map_err(failure)?;

    writer
        .flush()
        .map_err(|e| failure(ImageError::IoError(e)))
}
