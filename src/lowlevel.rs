//! Low-level building blocks for custom scoring pipelines.
//!
//! These re-exports expose the blur passes, the elementwise formula, and
//! the downsampling helpers for advanced use cases beyond the high-level
//! `SsimEvaluator` API. Most users should prefer the top-level
//! `SsimEvaluator` and `SsimConfig` types.

pub use crate::blur::scalar::{horizontal_pass, vertical_pass};
pub use crate::blur::GaussianKernel;
pub use crate::image::downsample::{box_downsample, downsample_factor};
pub use crate::image::gray::rgb_to_luma;
pub use crate::score::formula::ssim_map_scalar;

#[cfg(feature = "rayon")]
pub use crate::blur::rayon::{horizontal_pass_par, vertical_pass_par};

#[cfg(feature = "simd")]
pub use crate::score::simd::ssim_map_simd;
