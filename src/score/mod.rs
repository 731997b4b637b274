//! Mean SSIM scoring.
//!
//! The evaluator follows the standard windowed-statistics pipeline: raw
//! planes and their squares and cross product are Gaussian filtered to
//! obtain local means and smoothed second moments, the SSIM formula is
//! applied per pixel, and each channel's map is averaged into a single
//! score. Channels never mix; scores come back in ascending channel
//! order.

use crate::blur::GaussianKernel;
use crate::image::downsample::{box_downsample, downsample_factor};
use crate::image::{PlanarImage, Shape};
use crate::trace::{trace_event, trace_span};
use crate::util::math::mean2d;
use crate::util::{MssimError, MssimResult};

pub mod formula;

#[cfg(feature = "simd")]
pub mod simd;

/// Default luminance stabilization coefficient.
pub const DEFAULT_K1: f64 = 0.01;
/// Default contrast stabilization coefficient.
pub const DEFAULT_K2: f64 = 0.03;
/// Default Gaussian window size in taps.
pub const DEFAULT_KERNEL_SIZE: usize = 11;
/// Default Gaussian window standard deviation.
pub const DEFAULT_SIGMA: f32 = 1.5;

fn stabilizer(k: f64, dynamic_range: f64) -> f32 {
    let kl = k * dynamic_range;
    (kl * kl) as f32
}

/// Configuration for an SSIM evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SsimConfig {
    /// Gaussian window size in taps. Must be odd and nonzero.
    pub kernel_size: usize,
    /// Gaussian window standard deviation. Must be positive and finite.
    pub sigma: f32,
    /// Luminance stabilization constant, `(k1 * L)^2`.
    pub c1: f32,
    /// Contrast stabilization constant, `(k2 * L)^2`.
    pub c2: f32,
    /// When set, shrink inputs whose smaller dimension is well above
    /// this bound before scoring.
    pub max_size: Option<usize>,
    /// Run the blur passes on the rayon thread pool (needs the `rayon`
    /// feature, otherwise ignored).
    pub parallel: bool,
}

impl Default for SsimConfig {
    fn default() -> Self {
        Self {
            kernel_size: DEFAULT_KERNEL_SIZE,
            sigma: DEFAULT_SIGMA,
            c1: stabilizer(DEFAULT_K1, 255.0),
            c2: stabilizer(DEFAULT_K2, 255.0),
            max_size: None,
            parallel: false,
        }
    }
}

impl SsimConfig {
    /// Returns a configuration with stabilization constants for samples
    /// spanning `bits` of dynamic range.
    ///
    /// The defaults assume the 0..=255 range the decode helpers produce;
    /// use this when feeding raw planes in some other range, e.g.
    /// `for_bit_depth(16)` for unscaled 16-bit data.
    pub fn for_bit_depth(bits: u32) -> Self {
        let dynamic_range = 2f64.powi(bits as i32) - 1.0;
        Self {
            c1: stabilizer(DEFAULT_K1, dynamic_range),
            c2: stabilizer(DEFAULT_K2, dynamic_range),
            ..Self::default()
        }
    }
}

/// Per-channel mean SSIM scores in ascending channel order.
#[derive(Clone, Debug, PartialEq)]
pub struct SsimScores {
    channels: Vec<f64>,
}

impl SsimScores {
    /// Returns the per-channel scores.
    pub fn channels(&self) -> &[f64] {
        &self.channels
    }

    /// Returns the score for `channel` if it exists.
    pub fn channel(&self, channel: usize) -> Option<f64> {
        self.channels.get(channel).copied()
    }

    /// Returns the mean of the per-channel scores.
    pub fn mean(&self) -> f64 {
        if self.channels.is_empty() {
            return 0.0;
        }
        self.channels.iter().sum::<f64>() / self.channels.len() as f64
    }
}

/// Reusable mean-SSIM evaluator.
///
/// Validates the configuration once at construction; evaluations then
/// share one scratch arena across channels, so a run allocates a fixed
/// number of planes regardless of channel count.
pub struct SsimEvaluator {
    config: SsimConfig,
    kernel: GaussianKernel,
}

impl SsimEvaluator {
    /// Creates an evaluator, validating the configuration.
    pub fn new(config: SsimConfig) -> MssimResult<Self> {
        let kernel = GaussianKernel::new(config.kernel_size, config.sigma)?;
        Ok(Self { config, kernel })
    }

    /// Returns the evaluator configuration.
    pub fn config(&self) -> &SsimConfig {
        &self.config
    }

    /// Returns the Gaussian kernel in use.
    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Computes per-channel mean SSIM for an image pair.
    ///
    /// The images must have identical shapes. A pair compared against
    /// itself scores 1.0 per channel, and the score is symmetric in its
    /// arguments.
    pub fn mean_ssim(&self, a: &PlanarImage, b: &PlanarImage) -> MssimResult<SsimScores> {
        self.check_shapes(a, b)?;
        let factor = self.shrink_factor(a.shape());
        if factor > 1 {
            let a_small = box_downsample(a, factor)?;
            let b_small = box_downsample(b, factor)?;
            self.score_pair(&a_small, &b_small)
        } else {
            self.score_pair(a, b)
        }
    }

    /// Computes the full per-pixel SSIM map for an image pair.
    ///
    /// Returns one map plane per channel. When `max_size` triggers a
    /// pre-shrink the map has the shrunken extent.
    pub fn ssim_map(&self, a: &PlanarImage, b: &PlanarImage) -> MssimResult<PlanarImage> {
        self.check_shapes(a, b)?;
        let factor = self.shrink_factor(a.shape());
        if factor > 1 {
            let a_small = box_downsample(a, factor)?;
            let b_small = box_downsample(b, factor)?;
            self.map_pair(&a_small, &b_small)
        } else {
            self.map_pair(a, b)
        }
    }

    /// Loads two images from disk and scores them.
    #[cfg(feature = "image-io")]
    pub fn compare_files<P, Q>(&self, path_a: P, path_b: Q) -> MssimResult<SsimScores>
    where
        P: AsRef<std::path::Path>,
        Q: AsRef<std::path::Path>,
    {
        let a = crate::image::io::load_planar(path_a)?;
        let b = crate::image::io::load_planar(path_b)?;
        self.mean_ssim(&a, &b)
    }

    fn check_shapes(&self, a: &PlanarImage, b: &PlanarImage) -> MssimResult<()> {
        if a.shape() != b.shape() {
            return Err(MssimError::ShapeMismatch {
                a: a.shape(),
                b: b.shape(),
            });
        }
        Ok(())
    }

    fn shrink_factor(&self, shape: Shape) -> usize {
        match self.config.max_size {
            Some(max_size) => downsample_factor(shape, max_size),
            None => 1,
        }
    }

    fn score_pair(&self, a: &PlanarImage, b: &PlanarImage) -> MssimResult<SsimScores> {
        let _span = trace_span!(
            "mean_ssim",
            width = a.width(),
            height = a.height(),
            channels = a.channels()
        )
        .entered();

        let mut scratch = Scratch::new(a.pixel_count());
        let mut channels = Vec::with_capacity(a.channels());
        for (c, (plane_a, plane_b)) in a.planes().zip(b.planes()).enumerate() {
            self.fill_map(plane_a, plane_b, a.width(), a.height(), &mut scratch)?;
            let score = mean2d(&scratch.map);
            trace_event!("channel_scored", channel = c, score = score);
            channels.push(score);
        }
        Ok(SsimScores { channels })
    }

    fn map_pair(&self, a: &PlanarImage, b: &PlanarImage) -> MssimResult<PlanarImage> {
        let _span = trace_span!(
            "ssim_map",
            width = a.width(),
            height = a.height(),
            channels = a.channels()
        )
        .entered();

        let mut scratch = Scratch::new(a.pixel_count());
        let mut maps = Vec::with_capacity(a.channels());
        for (plane_a, plane_b) in a.planes().zip(b.planes()) {
            self.fill_map(plane_a, plane_b, a.width(), a.height(), &mut scratch)?;
            maps.push(scratch.map.clone());
        }
        PlanarImage::new(maps, a.width(), a.height())
    }

    /// Runs the windowed-statistics pipeline for one channel, leaving
    /// the per-pixel map in `scratch.map`.
    fn fill_map(
        &self,
        a: &[f32],
        b: &[f32],
        width: usize,
        height: usize,
        scratch: &mut Scratch,
    ) -> MssimResult<()> {
        for i in 0..a.len() {
            scratch.sq_a[i] = a[i] * a[i];
            scratch.sq_b[i] = b[i] * b[i];
            scratch.prod[i] = a[i] * b[i];
        }

        let parallel = self.config.parallel;
        let kernel = &self.kernel;
        kernel.apply_into(a, &mut scratch.tmp, &mut scratch.mu_a, width, height, parallel)?;
        kernel.apply_into(b, &mut scratch.tmp, &mut scratch.mu_b, width, height, parallel)?;
        kernel.apply_into(
            &scratch.sq_a,
            &mut scratch.tmp,
            &mut scratch.s_aa,
            width,
            height,
            parallel,
        )?;
        kernel.apply_into(
            &scratch.sq_b,
            &mut scratch.tmp,
            &mut scratch.s_bb,
            width,
            height,
            parallel,
        )?;
        kernel.apply_into(
            &scratch.prod,
            &mut scratch.tmp,
            &mut scratch.s_ab,
            width,
            height,
            parallel,
        )?;

        ssim_map_dispatch(
            &scratch.mu_a,
            &scratch.mu_b,
            &scratch.s_aa,
            &scratch.s_bb,
            &scratch.s_ab,
            &mut scratch.map,
            self.config.c1,
            self.config.c2,
        );
        Ok(())
    }
}

#[cfg(feature = "simd")]
#[allow(clippy::too_many_arguments)]
fn ssim_map_dispatch(
    mu_a: &[f32],
    mu_b: &[f32],
    s_aa: &[f32],
    s_bb: &[f32],
    s_ab: &[f32],
    out: &mut [f32],
    c1: f32,
    c2: f32,
) {
    simd::ssim_map_simd(mu_a, mu_b, s_aa, s_bb, s_ab, out, c1, c2);
}

#[cfg(not(feature = "simd"))]
#[allow(clippy::too_many_arguments)]
fn ssim_map_dispatch(
    mu_a: &[f32],
    mu_b: &[f32],
    s_aa: &[f32],
    s_bb: &[f32],
    s_ab: &[f32],
    out: &mut [f32],
    c1: f32,
    c2: f32,
) {
    formula::ssim_map_scalar(mu_a, mu_b, s_aa, s_bb, s_ab, out, c1, c2);
}

/// Per-run working planes, sized once and reused across channels.
struct Scratch {
    sq_a: Vec<f32>,
    sq_b: Vec<f32>,
    prod: Vec<f32>,
    mu_a: Vec<f32>,
    mu_b: Vec<f32>,
    s_aa: Vec<f32>,
    s_bb: Vec<f32>,
    s_ab: Vec<f32>,
    tmp: Vec<f32>,
    map: Vec<f32>,
}

impl Scratch {
    fn new(len: usize) -> Self {
        Self {
            sq_a: vec![0.0; len],
            sq_b: vec![0.0; len],
            prod: vec![0.0; len],
            mu_a: vec![0.0; len],
            mu_b: vec![0.0; len],
            s_aa: vec![0.0; len],
            s_bb: vec![0.0; len],
            s_ab: vec![0.0; len],
            tmp: vec![0.0; len],
            map: vec![0.0; len],
        }
    }
}
