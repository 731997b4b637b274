//! Convenience helpers for decoding images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoded samples are
//! normalized into the 0..=255 range regardless of source bit depth, so
//! the default stabilization constants apply unchanged: 8-bit samples
//! pass through, 16-bit samples are scaled by `255 / 65535`, and float
//! samples are scaled by `255`. Alpha channels are dropped.

use std::path::Path;

use crate::image::PlanarImage;
use crate::util::{MssimError, MssimResult};

const U16_SCALE: f32 = 255.0 / 65535.0;
const F32_SCALE: f32 = 255.0;

fn interleaved_to_planes<S>(
    samples: &[S],
    stride: usize,
    keep: usize,
    scale: f32,
) -> Vec<Vec<f32>>
where
    S: Copy + Into<f32>,
{
    (0..keep)
        .map(|c| {
            samples
                .chunks_exact(stride)
                .map(|px| px[c].into() * scale)
                .collect()
        })
        .collect()
}

/// Creates a planar image from a grayscale image buffer.
pub fn planar_from_gray_image(img: &image::GrayImage) -> MssimResult<PlanarImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let planes = interleaved_to_planes(img.as_raw(), 1, 1, 1.0);
    PlanarImage::new(planes, width, height)
}

/// Creates a planar image from an RGB image buffer.
pub fn planar_from_rgb_image(img: &image::RgbImage) -> MssimResult<PlanarImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let planes = interleaved_to_planes(img.as_raw(), 3, 3, 1.0);
    PlanarImage::new(planes, width, height)
}

/// Creates a planar image from a dynamic image.
///
/// Grayscale sources yield one plane, color sources three planes in
/// red, green, blue order.
pub fn planar_from_dynamic_image(img: &image::DynamicImage) -> MssimResult<PlanarImage> {
    use image::DynamicImage;

    let width = img.width() as usize;
    let height = img.height() as usize;
    let planes = match img {
        DynamicImage::ImageLuma8(buf) => interleaved_to_planes(buf.as_raw(), 1, 1, 1.0),
        DynamicImage::ImageLumaA8(buf) => interleaved_to_planes(buf.as_raw(), 2, 1, 1.0),
        DynamicImage::ImageRgb8(buf) => interleaved_to_planes(buf.as_raw(), 3, 3, 1.0),
        DynamicImage::ImageRgba8(buf) => interleaved_to_planes(buf.as_raw(), 4, 3, 1.0),
        DynamicImage::ImageLuma16(buf) => interleaved_to_planes(buf.as_raw(), 1, 1, U16_SCALE),
        DynamicImage::ImageLumaA16(buf) => interleaved_to_planes(buf.as_raw(), 2, 1, U16_SCALE),
        DynamicImage::ImageRgb16(buf) => interleaved_to_planes(buf.as_raw(), 3, 3, U16_SCALE),
        DynamicImage::ImageRgba16(buf) => interleaved_to_planes(buf.as_raw(), 4, 3, U16_SCALE),
        DynamicImage::ImageRgb32F(buf) => interleaved_to_planes(buf.as_raw(), 3, 3, F32_SCALE),
        DynamicImage::ImageRgba32F(buf) => interleaved_to_planes(buf.as_raw(), 4, 3, F32_SCALE),
        other => interleaved_to_planes(other.to_rgba8().as_raw(), 4, 3, 1.0),
    };
    PlanarImage::new(planes, width, height)
}

/// Loads an image from disk and converts it to a planar image.
pub fn load_planar<P: AsRef<Path>>(path: P) -> MssimResult<PlanarImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|err| MssimError::Decode {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    planar_from_dynamic_image(&img)
}
