//! Scalar separable blur passes.

/// Horizontal Gaussian pass with replicate borders.
///
/// Reads `width * height` row-major samples from `src` and writes the
/// same extent to `dst`. Taps that fall outside a row clamp to its
/// first or last sample, so output size equals input size.
pub fn horizontal_pass(src: &[f32], dst: &mut [f32], width: usize, height: usize, taps: &[f32]) {
    if width == 0 {
        return;
    }
    let radius = taps.len() / 2;
    for y in 0..height {
        let row = &src[y * width..(y + 1) * width];
        let out = &mut dst[y * width..(y + 1) * width];
        horizontal_row(row, out, taps, radius);
    }
}

/// Vertical Gaussian pass with replicate borders.
pub fn vertical_pass(src: &[f32], dst: &mut [f32], width: usize, height: usize, taps: &[f32]) {
    if width == 0 || height == 0 {
        return;
    }
    let radius = taps.len() / 2;
    let last = height - 1;
    for y in 0..height {
        let out = &mut dst[y * width..(y + 1) * width];
        vertical_row(src, out, width, y, last, taps, radius);
    }
}

pub(crate) fn horizontal_row(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    let width = row.len();
    let clamped_head = radius.min(width);
    let interior_end = width.saturating_sub(radius);

    for x in 0..clamped_head {
        out[x] = clamped_dot(row, x, taps, radius);
    }
    // interior columns keep the full tap span in bounds
    for x in clamped_head..interior_end {
        let window = &row[x - radius..=x + radius];
        let mut acc = 0.0f32;
        for (&t, &v) in taps.iter().zip(window) {
            acc += t * v;
        }
        out[x] = acc;
    }
    for x in interior_end.max(clamped_head)..width {
        out[x] = clamped_dot(row, x, taps, radius);
    }
}

pub(crate) fn vertical_row(
    src: &[f32],
    out: &mut [f32],
    width: usize,
    y: usize,
    last: usize,
    taps: &[f32],
    radius: usize,
) {
    out.fill(0.0);
    for (k, &t) in taps.iter().enumerate() {
        let sy = (y + k).saturating_sub(radius).min(last);
        let row = &src[sy * width..(sy + 1) * width];
        for (acc, &v) in out.iter_mut().zip(row) {
            *acc += t * v;
        }
    }
}

fn clamped_dot(row: &[f32], x: usize, taps: &[f32], radius: usize) -> f32 {
    let last = row.len() - 1;
    let mut acc = 0.0f32;
    for (k, &t) in taps.iter().enumerate() {
        let sx = (x + k).saturating_sub(radius).min(last);
        acc += t * row[sx];
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::{horizontal_pass, vertical_pass};

    const TAPS: [f32; 3] = [0.25, 0.5, 0.25];

    #[test]
    fn horizontal_clamps_row_edges() {
        let src = [1.0, 2.0, 3.0];
        let mut dst = [0.0; 3];
        horizontal_pass(&src, &mut dst, 3, 1, &TAPS);
        assert_eq!(dst, [1.25, 2.0, 2.75]);
    }

    #[test]
    fn vertical_clamps_column_edges() {
        let src = [1.0, 2.0, 3.0];
        let mut dst = [0.0; 3];
        vertical_pass(&src, &mut dst, 1, 3, &TAPS);
        assert_eq!(dst, [1.25, 2.0, 2.75]);
    }

    #[test]
    fn constant_plane_is_preserved() {
        let src = vec![7.5f32; 6 * 4];
        let mut mid = vec![0.0f32; 6 * 4];
        let mut dst = vec![0.0f32; 6 * 4];
        horizontal_pass(&src, &mut mid, 6, 4, &TAPS);
        vertical_pass(&mid, &mut dst, 6, 4, &TAPS);
        for &v in &dst {
            assert!((v - 7.5).abs() < 1e-5);
        }
    }

    #[test]
    fn narrow_plane_uses_clamped_taps_everywhere() {
        let src = [4.0, 8.0];
        let mut dst = [0.0; 2];
        let wide_taps = [0.2f32; 5];
        horizontal_pass(&src, &mut dst, 2, 1, &wide_taps);
        // clamped spans are [4,4,4,8,8] and [4,4,8,8,8], each times 0.2
        assert!((dst[0] - 0.2 * (4.0 * 3.0 + 8.0 * 2.0)).abs() < 1e-6);
        assert!((dst[1] - 0.2 * (4.0 * 2.0 + 8.0 * 3.0)).abs() < 1e-6);
    }
}
