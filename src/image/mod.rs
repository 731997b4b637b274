//! Planar floating-point images.
//!
//! `PlanarImage` owns one contiguous `f32` plane per channel, row-major,
//! all planes exactly `width * height` samples. Channel index ascending is
//! the canonical order throughout the crate: an RGB source decodes to
//! plane 0 = red, 1 = green, 2 = blue, and scores come back in the same
//! order. Samples are expected in the 0..=255 range so the default
//! stabilization constants stay meaningful; the `io` module normalizes
//! deeper inputs into that range on decode.

use std::fmt;

use crate::util::{MssimError, MssimResult};

pub mod downsample;
pub mod gray;
#[cfg(feature = "image-io")]
pub mod io;

/// Width, height, and channel count of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Number of channel planes.
    pub channels: usize,
}

impl Shape {
    /// Creates a shape value.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Returns `width * height`, the sample count of one plane.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

/// Owned multi-channel image with one `f32` plane per channel.
#[derive(Clone, Debug)]
pub struct PlanarImage {
    planes: Vec<Vec<f32>>,
    width: usize,
    height: usize,
}

impl PlanarImage {
    /// Creates an image from per-channel planes.
    ///
    /// Every plane must hold exactly `width * height` samples in row-major
    /// order.
    pub fn new(planes: Vec<Vec<f32>>, width: usize, height: usize) -> MssimResult<Self> {
        let channels = planes.len();
        if width == 0 || height == 0 || channels == 0 {
            return Err(MssimError::InvalidDimensions {
                width,
                height,
                channels,
            });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(MssimError::InvalidDimensions {
                width,
                height,
                channels,
            })?;
        for plane in &planes {
            if plane.len() < needed {
                return Err(MssimError::BufferTooSmall {
                    needed,
                    got: plane.len(),
                });
            }
            if plane.len() > needed {
                return Err(MssimError::InvalidDimensions {
                    width,
                    height,
                    channels,
                });
            }
        }
        Ok(Self {
            planes,
            width,
            height,
        })
    }

    /// Creates an image with every sample set to `value`.
    pub fn filled(shape: Shape, value: f32) -> MssimResult<Self> {
        if shape.width == 0 || shape.height == 0 || shape.channels == 0 {
            return Err(MssimError::InvalidDimensions {
                width: shape.width,
                height: shape.height,
                channels: shape.channels,
            });
        }
        let needed = shape
            .width
            .checked_mul(shape.height)
            .ok_or(MssimError::InvalidDimensions {
                width: shape.width,
                height: shape.height,
                channels: shape.channels,
            })?;
        let planes = (0..shape.channels).map(|_| vec![value; needed]).collect();
        Self::new(planes, shape.width, shape.height)
    }

    /// Creates an image by evaluating `f(x, y, channel)` for every sample.
    pub fn from_fn<F>(shape: Shape, mut f: F) -> MssimResult<Self>
    where
        F: FnMut(usize, usize, usize) -> f32,
    {
        let mut img = Self::filled(shape, 0.0)?;
        for c in 0..shape.channels {
            let plane = &mut img.planes[c];
            for y in 0..shape.height {
                let row = &mut plane[y * shape.width..(y + 1) * shape.width];
                for (x, sample) in row.iter_mut().enumerate() {
                    *sample = f(x, y, c);
                }
            }
        }
        Ok(img)
    }

    /// Returns the image shape.
    pub fn shape(&self) -> Shape {
        Shape {
            width: self.width,
            height: self.height,
            channels: self.planes.len(),
        }
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of channel planes.
    pub fn channels(&self) -> usize {
        self.planes.len()
    }

    /// Returns the sample count of one plane.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns the plane for `channel` if it exists.
    pub fn plane(&self, channel: usize) -> Option<&[f32]> {
        self.planes.get(channel).map(Vec::as_slice)
    }

    /// Returns the sample at `(x, y)` in `channel`, if within bounds.
    pub fn get(&self, x: usize, y: usize, channel: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.planes
            .get(channel)
            .and_then(|plane| plane.get(y * self.width + x))
            .copied()
    }

    /// Iterates over channel planes in ascending channel order.
    pub fn planes(&self) -> impl Iterator<Item = &[f32]> {
        self.planes.iter().map(Vec::as_slice)
    }

    /// Consumes the image and returns its planes.
    pub fn into_planes(self) -> Vec<Vec<f32>> {
        self.planes
    }
}
