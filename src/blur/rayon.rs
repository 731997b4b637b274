//! Rayon-parallel blur passes (feature-gated).
//!
//! Parallelizes over output rows. Each row is computed by the same
//! routines as the scalar passes, so results are bitwise identical.

use rayon::prelude::*;

use crate::blur::scalar::{horizontal_row, vertical_row};

/// Row-parallel horizontal Gaussian pass with replicate borders.
pub fn horizontal_pass_par(
    src: &[f32],
    dst: &mut [f32],
    width: usize,
    height: usize,
    taps: &[f32],
) {
    if width == 0 || height == 0 {
        return;
    }
    let n = width * height;
    let radius = taps.len() / 2;
    dst[..n]
        .par_chunks_mut(width)
        .zip(src[..n].par_chunks(width))
        .for_each(|(out, row)| horizontal_row(row, out, taps, radius));
}

/// Row-parallel vertical Gaussian pass with replicate borders.
pub fn vertical_pass_par(src: &[f32], dst: &mut [f32], width: usize, height: usize, taps: &[f32]) {
    if width == 0 || height == 0 {
        return;
    }
    let n = width * height;
    let radius = taps.len() / 2;
    let last = height - 1;
    dst[..n]
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, out)| vertical_row(src, out, width, y, last, taps, radius));
}

#[cfg(test)]
mod tests {
    use super::{horizontal_pass_par, vertical_pass_par};
    use crate::blur::scalar::{horizontal_pass, vertical_pass};

    #[test]
    fn parallel_passes_match_scalar_exactly() {
        let width = 37;
        let height = 23;
        let taps = [0.1f32, 0.2, 0.4, 0.2, 0.1];
        let src: Vec<f32> = (0..width * height)
            .map(|i| ((i * 31 + 7) % 251) as f32)
            .collect();

        let mut scalar_h = vec![0.0f32; src.len()];
        let mut par_h = vec![0.0f32; src.len()];
        horizontal_pass(&src, &mut scalar_h, width, height, &taps);
        horizontal_pass_par(&src, &mut par_h, width, height, &taps);
        assert_eq!(scalar_h, par_h);

        let mut scalar_v = vec![0.0f32; src.len()];
        let mut par_v = vec![0.0f32; src.len()];
        vertical_pass(&scalar_h, &mut scalar_v, width, height, &taps);
        vertical_pass_par(&scalar_h, &mut par_v, width, height, &taps);
        assert_eq!(scalar_v, par_v);
    }
}
