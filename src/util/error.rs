//! Error types for mssim.

use std::path::PathBuf;

use thiserror::Error;

use crate::image::Shape;

/// Result alias for mssim operations.
pub type MssimResult<T> = std::result::Result<T, MssimError>;

/// Errors that can occur when building images or evaluating SSIM.
#[derive(Debug, Error, PartialEq)]
pub enum MssimError {
    /// An input file could not be read or decoded into pixels.
    #[error("failed to decode image '{}': {reason}", path.display())]
    Decode {
        /// Path of the offending file.
        path: PathBuf,
        /// Decoder diagnostic.
        reason: String,
    },
    /// The two inputs do not share width, height, and channel count.
    #[error("image shapes differ: {a} vs {b}")]
    ShapeMismatch {
        /// Shape of the first input.
        a: Shape,
        /// Shape of the second input.
        b: Shape,
    },
    /// Width, height, or channel count is zero.
    #[error("invalid image dimensions {width}x{height}x{channels}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },
    /// A channel plane does not hold exactly `width * height` samples.
    #[error("plane buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Gaussian kernel sizes must be odd and nonzero.
    #[error("gaussian kernel size {size} must be odd and nonzero")]
    InvalidKernelSize { size: usize },
    /// Gaussian sigma must be a positive finite number.
    #[error("gaussian sigma {sigma} must be positive and finite")]
    InvalidSigma { sigma: f32 },
    /// Downsampling factors must be at least 1.
    #[error("downsample factor must be nonzero")]
    InvalidDownsampleFactor,
    /// An operation expected a specific channel count.
    #[error("expected a {expected}-channel image, got {got} channels")]
    ChannelCountMismatch { expected: usize, got: usize },
}
