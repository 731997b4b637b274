//! Box-filter downsampling for large inputs.
//!
//! Mirrors the MATLAB-style automatic pre-shrink used by common SSIM
//! implementations: an `f x f` mean filter with symmetric edge padding,
//! followed by keeping every `f`-th sample starting at the origin.

use crate::image::{PlanarImage, Shape};
use crate::util::{MssimError, MssimResult};

/// Returns the shrink factor for a shape bounded by `max_size`.
///
/// Computes `round(min(width, height) / max_size)` clamped to at least 1.
/// A zero `max_size` disables downsampling.
pub fn downsample_factor(shape: Shape, max_size: usize) -> usize {
    if max_size == 0 {
        return 1;
    }
    let min_dim = shape.width.min(shape.height) as f32;
    let factor = (min_dim / max_size as f32).round() as usize;
    factor.max(1)
}

/// Shrinks an image by `factor` with an `f x f` box filter.
///
/// A factor of 1 returns a copy of the input. Edges are padded
/// symmetrically, reflecting about the border with the edge sample
/// duplicated.
pub fn box_downsample(img: &PlanarImage, factor: usize) -> MssimResult<PlanarImage> {
    if factor == 0 {
        return Err(MssimError::InvalidDownsampleFactor);
    }
    if factor == 1 {
        return Ok(img.clone());
    }

    let width = img.width();
    let height = img.height();
    let out_w = width.div_ceil(factor);
    let out_h = height.div_ceil(factor);
    let center = (factor - 1) / 2;
    let inv_area = 1.0 / (factor * factor) as f32;

    let planes = img
        .planes()
        .map(|src| {
            let mut dst = Vec::with_capacity(out_w * out_h);
            for oy in 0..out_h {
                let y0 = (oy * factor) as isize - center as isize;
                for ox in 0..out_w {
                    let x0 = (ox * factor) as isize - center as isize;
                    let mut acc = 0.0f32;
                    for ky in 0..factor {
                        let sy = mirror_index(y0 + ky as isize, height);
                        let row = &src[sy * width..(sy + 1) * width];
                        for kx in 0..factor {
                            acc += row[mirror_index(x0 + kx as isize, width)];
                        }
                    }
                    dst.push(acc * inv_area);
                }
            }
            dst
        })
        .collect();
    PlanarImage::new(planes, out_w, out_h)
}

fn mirror_index(idx: isize, len: usize) -> usize {
    let len = len as isize;
    let mut i = idx;
    loop {
        if i < 0 {
            i = -i - 1;
        } else if i >= len {
            i = 2 * len - i - 1;
        } else {
            return i as usize;
        }
    }
}
