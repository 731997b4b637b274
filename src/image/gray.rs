//! Grayscale conversion.

use crate::image::PlanarImage;
use crate::util::math::round_half_up;
use crate::util::{MssimError, MssimResult};

const LUMA_R: f32 = 0.298_94;
const LUMA_G: f32 = 0.587_04;
const LUMA_B: f32 = 0.114_02;

/// Collapses a three-channel RGB image into a single luma plane.
///
/// Uses the classic NTSC weights and rounds each result half-up to an
/// integral value, matching the common MATLAB `rgb2gray` output for
/// 8-bit inputs.
pub fn rgb_to_luma(img: &PlanarImage) -> MssimResult<PlanarImage> {
    if img.channels() != 3 {
        return Err(MssimError::ChannelCountMismatch {
            expected: 3,
            got: img.channels(),
        });
    }
    let mut planes = img.planes();
    let (r, g, b) = match (planes.next(), planes.next(), planes.next()) {
        (Some(r), Some(g), Some(b)) => (r, g, b),
        _ => {
            return Err(MssimError::ChannelCountMismatch {
                expected: 3,
                got: img.channels(),
            })
        }
    };

    let luma = r
        .iter()
        .zip(g.iter())
        .zip(b.iter())
        .map(|((&r, &g), &b)| round_half_up(LUMA_R * r + LUMA_G * g + LUMA_B * b))
        .collect();
    PlanarImage::new(vec![luma], img.width(), img.height())
}
