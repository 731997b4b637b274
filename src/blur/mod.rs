//! Separable Gaussian blur.
//!
//! The blur runs as a horizontal pass followed by a vertical pass with
//! replicate (clamp-to-edge) borders, so blurred planes keep the input
//! extent. Tap weights are computed in `f64` and normalized to sum to
//! one before narrowing to `f32`.

use crate::util::{MssimError, MssimResult};

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Normalized one-dimensional Gaussian tap set.
#[derive(Clone, Debug)]
pub struct GaussianKernel {
    taps: Vec<f32>,
    sigma: f32,
}

impl GaussianKernel {
    /// Builds a kernel of `size` taps for standard deviation `sigma`.
    ///
    /// `size` must be odd and nonzero, `sigma` positive and finite.
    pub fn new(size: usize, sigma: f32) -> MssimResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(MssimError::InvalidKernelSize { size });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(MssimError::InvalidSigma { sigma });
        }

        let radius = (size / 2) as f64;
        let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
        let raw: Vec<f64> = (0..size)
            .map(|i| {
                let d = i as f64 - radius;
                (-(d * d) / denom).exp()
            })
            .collect();
        let sum: f64 = raw.iter().sum();
        let taps = raw.iter().map(|&t| (t / sum) as f32).collect();
        Ok(Self { taps, sigma })
    }

    /// Returns the normalized taps.
    pub fn taps(&self) -> &[f32] {
        &self.taps
    }

    /// Returns the tap count.
    pub fn size(&self) -> usize {
        self.taps.len()
    }

    /// Returns the half-width of the tap span.
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }

    /// Returns the standard deviation the kernel was built for.
    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Blurs a `width x height` plane, allocating the output.
    pub fn apply(
        &self,
        src: &[f32],
        width: usize,
        height: usize,
        parallel: bool,
    ) -> MssimResult<Vec<f32>> {
        let needed = plane_len(width, height)?;
        let mut tmp = vec![0.0f32; needed];
        let mut dst = vec![0.0f32; needed];
        self.apply_into(src, &mut tmp, &mut dst, width, height, parallel)?;
        Ok(dst)
    }

    /// Blurs `src` into `dst`, using `tmp` for the intermediate pass.
    ///
    /// All three slices must hold at least `width * height` samples.
    pub fn apply_into(
        &self,
        src: &[f32],
        tmp: &mut [f32],
        dst: &mut [f32],
        width: usize,
        height: usize,
        parallel: bool,
    ) -> MssimResult<()> {
        let needed = plane_len(width, height)?;
        for len in [src.len(), tmp.len(), dst.len()] {
            if len < needed {
                return Err(MssimError::BufferTooSmall { needed, got: len });
            }
        }

        #[cfg(feature = "rayon")]
        if parallel {
            rayon::horizontal_pass_par(src, tmp, width, height, &self.taps);
            rayon::vertical_pass_par(tmp, dst, width, height, &self.taps);
            return Ok(());
        }
        #[cfg(not(feature = "rayon"))]
        let _ = parallel;

        scalar::horizontal_pass(src, tmp, width, height, &self.taps);
        scalar::vertical_pass(tmp, dst, width, height, &self.taps);
        Ok(())
    }
}

fn plane_len(width: usize, height: usize) -> MssimResult<usize> {
    width
        .checked_mul(height)
        .ok_or(MssimError::InvalidDimensions {
            width,
            height,
            channels: 1,
        })
}
