//! Image checks and decoding shared by the feed loader and user uploads.

use crate::error::UploadError;

/// Tightly packed RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Reject non-image MIME types and oversized files before reading them.
pub fn validate_upload(mime: &str, size: u64, max_bytes: u64) -> Result<(), UploadError> {
    if !mime.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(UploadError::NotAnImage(mime.to_string()));
    }
    if size > max_bytes {
        return Err(UploadError::TooLarge {
            size,
            max: max_bytes,
        });
    }
    Ok(())
}

pub fn decode_rgba(bytes: &[u8]) -> Result<DecodedImage, UploadError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| UploadError::Decode(e.to_string()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(UploadError::Decode("image has no pixels".to_string()));
    }
    Ok(DecodedImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

/// Size that keeps the aspect ratio and puts the longer side at no more than
/// `max_side` pixels. Images already inside the limit keep their size.
pub fn fit_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }
    let scale = max_side as f64 / longest as f64;
    let side = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, max_side);
    (side(width), side(height))
}

/// Downscale an image whose width or height exceeds the GPU texture limit.
pub fn fit_within(image: DecodedImage, max_side: u32) -> Result<DecodedImage, UploadError> {
    let (width, height) = fit_dimensions(image.width, image.height, max_side);
    if (width, height) == (image.width, image.height) {
        return Ok(image);
    }
    let buffer = image::RgbaImage::from_raw(image.width, image.height, image.rgba).ok_or_else(|| {
        UploadError::Decode(format!(
            "pixel buffer does not match {}x{}",
            image.width, image.height
        ))
    })?;
    log::info!(
        "[upload] downscaling {}x{} to {}x{} for the GPU",
        buffer.width(),
        buffer.height(),
        width,
        height
    );
    let resized = image::imageops::resize(&buffer, width, height, image::imageops::FilterType::Triangle);
    Ok(DecodedImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}
