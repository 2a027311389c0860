use crate::TransformError;
use fast_image_resize as fr;
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader};
use std::io::Cursor;

/// Target dimension and JPEG quality for a derived variant.
#[derive(Debug, Clone, Copy)]
pub struct VariantOptions {
    pub max_dimension: u32,
    /// Quality in (0, 1], mapped onto the JPEG encoder's 1..=100 scale.
    pub quality: f32,
}

impl VariantOptions {
    /// Small variant for grid/list display.
    #[must_use]
    pub const fn thumbnail() -> Self {
        Self {
            max_dimension: 400,
            quality: 0.7,
        }
    }

    /// Larger variant for the rotating display.
    #[must_use]
    pub const fn carousel() -> Self {
        Self {
            max_dimension: 800,
            quality: 0.8,
        }
    }
}

/// Re-encodes `source` as JPEG with its longer side scaled down to at most
/// `max_dimension` pixels, preserving aspect ratio. Images already within
/// bounds are never upscaled, only re-encoded.
///
/// # Errors
///
/// * `TransformError::Decode` if the source is not a decodable raster image.
/// * `TransformError::Resize` / `TransformError::Encode` for downstream failures.
pub fn resize(source: &[u8], max_dimension: u32, quality: f32) -> Result<Vec<u8>, TransformError> {
    let img = ImageReader::new(Cursor::new(source))
        .with_guessed_format()
        .map_err(|e| TransformError::Decode(image::ImageError::IoError(e)))?
        .decode()
        .map_err(TransformError::Decode)?;

    let (width, height) = (img.width(), img.height());
    let (dst_width, dst_height) = target_dimensions(width, height, max_dimension);

    let rgb = img.to_rgb8().into_raw();
    let src_image = fr::images::Image::from_vec_u8(width, height, rgb, fr::PixelType::U8x3)
        .map_err(|e| TransformError::Resize(e.to_string()))?;

    let mut dst_image = fr::images::Image::new(dst_width, dst_height, fr::PixelType::U8x3);
    let mut resizer = fr::Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, None)
        .map_err(|e| TransformError::Resize(e.to_string()))?;

    encode_jpeg(dst_image.buffer(), dst_width, dst_height, quality)
}

/// Produces the small grid/list variant of `source`.
pub fn create_thumbnail(source: &[u8]) -> Result<Vec<u8>, TransformError> {
    let opts = VariantOptions::thumbnail();
    resize(source, opts.max_dimension, opts.quality)
}

/// Produces the larger rotating-display variant of `source`.
pub fn create_carousel_variant(source: &[u8]) -> Result<Vec<u8>, TransformError> {
    let opts = VariantOptions::carousel();
    resize(source, opts.max_dimension, opts.quality)
}

/// Scales `(width, height)` so the longer side is at most `max_dimension`,
/// never upscaling. Dimensions are kept at least 1px after rounding.
#[must_use]
pub fn target_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let longer = width.max(height);
    if longer <= max_dimension {
        return (width, height);
    }
    let ratio = f64::from(max_dimension) / f64::from(longer);
    let dst_width = ((f64::from(width) * ratio).round() as u32).max(1);
    let dst_height = ((f64::from(height) * ratio).round() as u32).max(1);
    (dst_width, dst_height)
}

fn encode_jpeg(
    rgb: &[u8],
    width: u32,
    height: u32,
    quality: f32,
) -> Result<Vec<u8>, TransformError> {
    let jpeg_quality = (quality.clamp(0.01, 1.0) * 100.0).round() as u8;
    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, jpeg_quality);
    encoder
        .write_image(rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(TransformError::Encode)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut out = Cursor::new(Vec::new());
        JpegEncoder::new_with_quality(&mut out, 90)
            .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
            .unwrap();
        out.into_inner()
    }

    fn decoded_dimensions(bytes: &[u8]) -> (u32, u32) {
        let img = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .unwrap()
            .decode()
            .unwrap();
        (img.width(), img.height())
    }

    #[test]
    fn resize_caps_longer_side() {
        let source = jpeg_fixture(2048, 1536);
        let out = resize(&source, 400, 0.7).unwrap();
        let (w, h) = decoded_dimensions(&out);
        assert_eq!(w.max(h), 400);
    }

    #[test]
    fn resize_never_upscales() {
        let source = jpeg_fixture(120, 80);
        let out = resize(&source, 400, 0.7).unwrap();
        assert_eq!(decoded_dimensions(&out), (120, 80));
    }

    #[test]
    fn thumbnail_preserves_aspect_ratio_within_rounding() {
        let source = jpeg_fixture(1600, 1200);
        let out = create_thumbnail(&source).unwrap();
        let (w, h) = decoded_dimensions(&out);
        assert!(w <= 400 && h <= 400);
        let original_ratio = 1600.0 / 1200.0;
        let ratio = f64::from(w) / f64::from(h);
        assert!((ratio - original_ratio).abs() < 0.02);
    }

    #[test]
    fn square_source_stays_square() {
        let source = jpeg_fixture(1000, 1000);
        let out = create_thumbnail(&source).unwrap();
        let (w, h) = decoded_dimensions(&out);
        assert_eq!((w, h), (400, 400));
    }

    #[test]
    fn target_dimensions_floor_at_one_pixel() {
        assert_eq!(target_dimensions(10_000, 1, 400), (400, 1));
        assert_eq!(target_dimensions(1, 1, 400), (1, 1));
    }

    #[test]
    fn undecodable_input_is_a_decode_error() {
        let err = resize(b"definitely not an image", 400, 0.7).unwrap_err();
        assert!(matches!(err, TransformError::Decode(_)));
    }

    #[test]
    fn regeneration_is_deterministic() {
        let source = jpeg_fixture(800, 600);
        let a = create_carousel_variant(&source).unwrap();
        let b = create_carousel_variant(&source).unwrap();
        assert_eq!(a, b);
    }
}
