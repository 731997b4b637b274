//! Mathematical helpers for score reduction and sample conversion.

/// Arithmetic mean of a plane, accumulated in `f64`.
pub(crate) fn mean2d(plane: &[f32]) -> f64 {
    if plane.is_empty() {
        return 0.0;
    }
    let sum: f64 = plane.iter().map(|&v| f64::from(v)).sum();
    sum / plane.len() as f64
}

/// Rounds a nonnegative value to the nearest integer, ties upward.
pub(crate) fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}
