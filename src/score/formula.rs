//! Elementwise SSIM map evaluation.
//!
//! Inputs are the five Gaussian-filtered moment planes of an image pair:
//! the two local means plus the filtered squares and cross product.
//! Variances and the covariance are recovered per pixel by subtracting
//! the mean products, so no extra buffers are needed.

/// Evaluates the SSIM formula at one pixel.
#[inline]
pub(crate) fn ssim_at(
    mu_a: f32,
    mu_b: f32,
    s_aa: f32,
    s_bb: f32,
    s_ab: f32,
    c1: f32,
    c2: f32,
) -> f32 {
    let mu_aa = mu_a * mu_a;
    let mu_bb = mu_b * mu_b;
    let mu_ab = mu_a * mu_b;
    let var_a = s_aa - mu_aa;
    let var_b = s_bb - mu_bb;
    let cov_ab = s_ab - mu_ab;

    let num = (2.0 * mu_ab + c1) * (2.0 * cov_ab + c2);
    let den = (mu_aa + mu_bb + c1) * (var_a + var_b + c2);
    num / den
}

/// Fills `out` with per-pixel SSIM values.
///
/// All moment slices must hold at least `out.len()` samples.
#[allow(clippy::too_many_arguments)]
pub fn ssim_map_scalar(
    mu_a: &[f32],
    mu_b: &[f32],
    s_aa: &[f32],
    s_bb: &[f32],
    s_ab: &[f32],
    out: &mut [f32],
    c1: f32,
    c2: f32,
) {
    let n = out.len();
    debug_assert!(mu_a.len() >= n && mu_b.len() >= n);
    debug_assert!(s_aa.len() >= n && s_bb.len() >= n && s_ab.len() >= n);

    for i in 0..n {
        out[i] = ssim_at(mu_a[i], mu_b[i], s_aa[i], s_bb[i], s_ab[i], c1, c2);
    }
}
