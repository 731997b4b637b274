//! Mssim is a CPU-first image quality library computing per-channel mean
//! SSIM (structural similarity) between same-shaped images.
//!
//! This crate provides the standard Gaussian-windowed SSIM pipeline with
//! scalar baselines, optional parallel blurs via the `rayon` feature,
//! SIMD map evaluation via the `simd` feature, and file decoding via the
//! default `image-io` feature.
//!
//! ```no_run
//! use mssim::{SsimConfig, SsimEvaluator};
//!
//! # fn main() -> mssim::MssimResult<()> {
//! let evaluator = SsimEvaluator::new(SsimConfig::default())?;
//! let scores = evaluator.compare_files("a.png", "b.png")?;
//! for (channel, score) in scores.channels().iter().enumerate() {
//!     println!("channel {channel}: {score:.4}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod blur;
pub mod image;
pub mod lowlevel;
pub mod score;
mod trace;
pub mod util;

pub use blur::GaussianKernel;
pub use image::{PlanarImage, Shape};
pub use score::{SsimConfig, SsimEvaluator, SsimScores};
pub use util::{MssimError, MssimResult};

#[cfg(feature = "image-io")]
pub use image::io::load_planar;
