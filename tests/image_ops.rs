//! Grayscale conversion, downsampling, and configuration derivation.

use mssim::lowlevel::{box_downsample, downsample_factor, rgb_to_luma};
use mssim::{PlanarImage, Shape, SsimConfig, SsimEvaluator};

#[test]
fn luma_conversion_feeds_single_channel_scoring() {
    let shape = Shape::new(48, 48, 3);
    let a = PlanarImage::from_fn(shape, |x, y, c| ((x * 2 + y + c * 50) % 256) as f32).unwrap();
    let b = PlanarImage::from_fn(shape, |x, y, c| ((x * 2 + y + c * 50 + 4) % 256) as f32).unwrap();

    let luma_a = rgb_to_luma(&a).unwrap();
    let luma_b = rgb_to_luma(&b).unwrap();
    assert_eq!(luma_a.shape(), Shape::new(48, 48, 1));

    let evaluator = SsimEvaluator::new(SsimConfig::default()).unwrap();
    let scores = evaluator.mean_ssim(&luma_a, &luma_b).unwrap();
    assert_eq!(scores.channels().len(), 1);
    assert!(scores.channel(0).unwrap() <= 1.0 + 1e-6);
}

#[test]
fn luma_weights_sum_to_full_scale() {
    let white = PlanarImage::filled(Shape::new(4, 4, 3), 255.0).unwrap();
    let luma = rgb_to_luma(&white).unwrap();
    assert_eq!(luma.plane(0).unwrap(), &[255.0; 16]);
}

#[test]
fn downsampled_identity_still_scores_one() {
    let shape = Shape::new(512, 512, 1);
    let img = PlanarImage::from_fn(shape, |x, y, _| ((x ^ y) % 256) as f32).unwrap();

    let cfg = SsimConfig {
        max_size: Some(256),
        ..SsimConfig::default()
    };
    let evaluator = SsimEvaluator::new(cfg).unwrap();

    let map = evaluator.ssim_map(&img, &img).unwrap();
    assert_eq!(map.shape(), Shape::new(256, 256, 1));

    let scores = evaluator.mean_ssim(&img, &img).unwrap();
    assert!((scores.channel(0).unwrap() - 1.0).abs() < 1e-6);
}

#[test]
fn small_inputs_skip_the_pre_shrink() {
    let shape = Shape::new(200, 150, 1);
    let img = PlanarImage::from_fn(shape, |x, y, _| ((x + y) % 256) as f32).unwrap();

    let cfg = SsimConfig {
        max_size: Some(256),
        ..SsimConfig::default()
    };
    let evaluator = SsimEvaluator::new(cfg).unwrap();
    let map = evaluator.ssim_map(&img, &img).unwrap();
    assert_eq!(map.shape(), shape);
}

#[test]
fn shrink_factor_follows_the_smaller_dimension() {
    assert_eq!(downsample_factor(Shape::new(512, 768, 3), 256), 2);
    assert_eq!(downsample_factor(Shape::new(768, 512, 3), 256), 2);
    assert_eq!(downsample_factor(Shape::new(300, 2000, 3), 256), 1);
}

#[test]
fn box_downsample_averages_disjoint_blocks_for_factor_two() {
    let img = PlanarImage::from_fn(Shape::new(6, 4, 2), |x, y, c| {
        (c * 1000 + y * 10 + x) as f32
    })
    .unwrap();
    let out = box_downsample(&img, 2).unwrap();

    assert_eq!(out.shape(), Shape::new(3, 2, 2));
    // block mean of samples {0,1,10,11}
    assert_eq!(out.get(0, 0, 0), Some(5.5));
    // block mean of samples {1024,1025,1034,1035}
    assert_eq!(out.get(2, 1, 1), Some(1029.5));
}

#[test]
fn bit_depth_eight_reproduces_the_default_constants() {
    let default = SsimConfig::default();
    let derived = SsimConfig::for_bit_depth(8);
    assert_eq!(default, derived);
}
