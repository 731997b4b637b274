//! End-to-end pipeline tests, from synthetic planes and from encoded files.

use mssim::{PlanarImage, Shape, SsimConfig, SsimEvaluator};

fn checkerboard(shape: Shape, cell: usize) -> PlanarImage {
    PlanarImage::from_fn(shape, |x, y, _| {
        if (x / cell + y / cell) % 2 == 0 {
            220.0
        } else {
            35.0
        }
    })
    .unwrap()
}

#[test]
fn solid_pair_scores_one_despite_zero_variance() {
    let evaluator = SsimEvaluator::new(SsimConfig::default()).unwrap();
    let a = PlanarImage::filled(Shape::new(100, 100, 3), 128.0).unwrap();
    let b = a.clone();

    let scores = evaluator.mean_ssim(&a, &b).unwrap();
    for &score in scores.channels() {
        assert!((score - 1.0).abs() < 1e-3, "flat pair scored {score}");
    }
}

#[test]
fn inverted_pair_scores_well_below_one() {
    let evaluator = SsimEvaluator::new(SsimConfig::default()).unwrap();
    let a = checkerboard(Shape::new(96, 96, 3), 8);
    let b = PlanarImage::from_fn(a.shape(), |x, y, c| 255.0 - a.get(x, y, c).unwrap()).unwrap();

    let scores = evaluator.mean_ssim(&a, &b).unwrap();
    for &score in scores.channels() {
        assert!(score < 0.99, "inverted pair scored {score}");
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let evaluator = SsimEvaluator::new(SsimConfig::default()).unwrap();
    let a = checkerboard(Shape::new(64, 48, 3), 5);
    let b = checkerboard(Shape::new(64, 48, 3), 7);

    let first = evaluator.mean_ssim(&a, &b).unwrap();
    let second = evaluator.mean_ssim(&a, &b).unwrap();
    assert_eq!(first, second);

    let map_first = evaluator.ssim_map(&a, &b).unwrap();
    let map_second = evaluator.ssim_map(&a, &b).unwrap();
    for c in 0..map_first.channels() {
        assert_eq!(map_first.plane(c).unwrap(), map_second.plane(c).unwrap());
    }
}

#[test]
fn map_highlights_the_damaged_region() {
    let evaluator = SsimEvaluator::new(SsimConfig::default()).unwrap();
    let shape = Shape::new(64, 64, 1);
    let a = checkerboard(shape, 8);
    // damage a 16x16 block in the lower-right quadrant
    let b = PlanarImage::from_fn(shape, |x, y, c| {
        if (40..56).contains(&x) && (40..56).contains(&y) {
            128.0
        } else {
            a.get(x, y, c).unwrap()
        }
    })
    .unwrap();

    let map = evaluator.ssim_map(&a, &b).unwrap();
    let plane = map.plane(0).unwrap();
    let damaged = plane[48 * 64 + 48];
    let intact = plane[8 * 64 + 8];
    assert!(
        damaged < intact,
        "damaged region {damaged} should score below intact region {intact}"
    );
    assert!((intact - 1.0).abs() < 1e-3);
}

#[cfg(feature = "image-io")]
mod files {
    use super::*;
    use std::path::PathBuf;

    fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name)
    }

    fn save_rgb(name: &str, img: &image::RgbImage) -> PathBuf {
        let path = fixture_path(name);
        img.save(&path).expect("failed to write fixture");
        path
    }

    #[test]
    fn compare_files_scores_decoded_pairs() {
        let width = 80;
        let height = 60;
        let a = image::RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([
                ((x * 3 + y) % 256) as u8,
                ((x + y * 2) % 256) as u8,
                ((x * 2 + y * 3) % 256) as u8,
            ])
        });
        let b = image::RgbImage::from_fn(width, height, |x, y| {
            let px = a.get_pixel(x, y);
            image::Rgb([px[0].saturating_add(3), px[1].saturating_sub(2), px[2]])
        });

        let path_a = save_rgb("e2e_a.png", &a);
        let path_b = save_rgb("e2e_b.png", &b);

        let evaluator = SsimEvaluator::new(SsimConfig::default()).unwrap();
        let scores = evaluator.compare_files(&path_a, &path_b).unwrap();

        assert_eq!(scores.channels().len(), 3);
        for &score in scores.channels() {
            assert!(score > 0.8, "near-identical files scored {score}");
            assert!(score <= 1.0 + 1e-6);
        }
        // untouched blue plane outranks the shifted red plane
        assert!(scores.channel(2).unwrap() >= scores.channel(0).unwrap());
    }

    #[test]
    fn compare_files_against_itself_scores_one() {
        let img = image::RgbImage::from_fn(32, 32, |x, y| {
            image::Rgb([(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8])
        });
        let path = save_rgb("e2e_self.png", &img);

        let evaluator = SsimEvaluator::new(SsimConfig::default()).unwrap();
        let scores = evaluator.compare_files(&path, &path).unwrap();
        for &score in scores.channels() {
            assert!((score - 1.0).abs() < 1e-6);
        }
    }
}
