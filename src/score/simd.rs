//! SIMD-accelerated SSIM map evaluation using the `wide` crate.
//!
//! Processes 8 pixels at a time with `f32x8`, falling back to the
//! scalar formula for the tail of each plane.

use wide::f32x8;

use crate::score::formula::ssim_at;

const LANES: usize = 8;

/// Load 8 f32 values into f32x8.
#[inline]
fn load_f32x8(slice: &[f32]) -> f32x8 {
    f32x8::from([
        slice[0], slice[1], slice[2], slice[3], slice[4], slice[5], slice[6], slice[7],
    ])
}

/// Fills `out` with per-pixel SSIM values, vectorized.
///
/// All moment slices must hold at least `out.len()` samples.
#[allow(clippy::too_many_arguments)]
pub fn ssim_map_simd(
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

    let c1_vec = f32x8::splat(c1);
    let c2_vec = f32x8::splat(c2);
    let two = f32x8::splat(2.0);
    let simd_end = n / LANES * LANES;

    // SIMD portion: process 8 pixels at a time
    let mut i = 0;
    while i < simd_end {
        let ma = load_f32x8(&mu_a[i..]);
        let mb = load_f32x8(&mu_b[i..]);
        let saa = load_f32x8(&s_aa[i..]);
        let sbb = load_f32x8(&s_bb[i..]);
        let sab = load_f32x8(&s_ab[i..]);

        let mu_aa = ma * ma;
        let mu_bb = mb * mb;
        let mu_ab = ma * mb;
        let var_a = saa - mu_aa;
        let var_b = sbb - mu_bb;
        let cov_ab = sab - mu_ab;

        let num = (two * mu_ab + c1_vec) * (two * cov_ab + c2_vec);
        let den = (mu_aa + mu_bb + c1_vec) * (var_a + var_b + c2_vec);
        let ssim = num / den;

        out[i..i + LANES].copy_from_slice(&ssim.to_array());
        i += LANES;
    }

    // Scalar remainder
    while i < n {
        out[i] = ssim_at(mu_a[i], mu_b[i], s_aa[i], s_bb[i], s_ab[i], c1, c2);
        i += 1;
    }
}
