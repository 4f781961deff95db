//! Statistical uniformity tests for the geometric sampler.
//!
//! All tests run on fixed seeds, so each is deterministic. Thresholds
//! sit well beyond the 0.999 quantile of the relevant statistic.

use std::f64::consts::{PI, TAU};

use approx::assert_abs_diff_eq;
use twister_engine::RandomEngine;
use twister_sampling::{DVec3, GeometricSampler};

const BINS: usize = 10;

/// Chi-square statistic of a histogram against a flat expectation.
fn chi_square(counts: &[u64]) -> f64 {
    let total: u64 = counts.iter().sum();
    let expected = total as f64 / counts.len() as f64;
    counts
        .iter()
        .map(|&o| {
            let diff = o as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Histogram of `z` over `[-1, 1]`.
fn z_histogram(points: &[DVec3]) -> [u64; BINS] {
    let mut counts = [0u64; BINS];
    for p in points {
        let bin = (((p.z + 1.0) / 2.0) * BINS as f64).floor() as usize;
        counts[bin.min(BINS - 1)] += 1;
    }
    counts
}

/// The polar cosine of a uniform sphere point is uniform on `[-1, 1]`.
/// Sampling the polar angle itself clusters points at the poles and
/// must fail the same test.
#[test]
fn test_unit_sphere_polar_histogram() {
    let mut engine = RandomEngine::new(42);
    let mut sampler = GeometricSampler::new(&mut engine);
    let points: Vec<DVec3> = (0..20_000).map(|_| sampler.unit_vector()).collect();

    for p in &points {
        assert_abs_diff_eq!(p.length(), 1.0, epsilon = 1e-12);
    }

    // 9 degrees of freedom; 0.999 quantile is 27.9.
    let statistic = chi_square(&z_histogram(&points));
    assert!(statistic < 35.0, "chi-square {}", statistic);

    let mut naive_engine = RandomEngine::new(42);
    let naive: Vec<DVec3> = (0..20_000)
        .map(|_| {
            let theta = naive_engine.uniform_float(0.0, TAU);
            let phi = naive_engine.uniform_float(0.0, PI);
            DVec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos())
        })
        .collect();
    let naive_statistic = chi_square(&z_histogram(&naive));
    assert!(naive_statistic > 500.0, "naive chi-square {}", naive_statistic);
}

/// Mean angle between independent uniform directions is pi/2.
#[test]
fn test_unit_sphere_mean_pairwise_angle() {
    let mut engine = RandomEngine::new(7);
    let mut sampler = GeometricSampler::new(&mut engine);
    let points: Vec<DVec3> = (0..4_000).map(|_| sampler.unit_vector()).collect();

    let (left, right) = points.split_at(2_000);
    let mean_angle = left
        .iter()
        .zip(right)
        .map(|(a, b)| a.angle_between(*b))
        .sum::<f64>()
        / 2_000.0;

    assert_abs_diff_eq!(mean_angle, PI / 2.0, epsilon = 0.08);
}

/// Octant counts of sphere points are balanced.
#[test]
fn test_unit_sphere_octants() {
    let mut engine = RandomEngine::new(1234);
    let mut sampler = GeometricSampler::new(&mut engine);
    let mut counts = [0u64; 8];
    for _ in 0..16_000 {
        let p = sampler.unit_vector();
        let octant = usize::from(p.x > 0.0) | usize::from(p.y > 0.0) << 1 | usize::from(p.z > 0.0) << 2;
        counts[octant] += 1;
    }
    // 7 degrees of freedom; 0.999 quantile is 24.3.
    let statistic = chi_square(&counts);
    assert!(statistic < 30.0, "chi-square {} for {:?}", statistic, counts);
}

#[test]
fn test_point_on_sphere_radius() {
    let mut engine = RandomEngine::new(3);
    let mut sampler = GeometricSampler::new(&mut engine);
    for _ in 0..1_000 {
        assert_abs_diff_eq!(sampler.point_on_sphere(2.5).length(), 2.5, epsilon = 1e-9);
    }
}

/// A uniform ball holds 1/8 of its points within half the radius.
#[test]
fn test_point_in_sphere_volume_density() {
    let mut engine = RandomEngine::new(11);
    let mut sampler = GeometricSampler::new(&mut engine);
    let n = 20_000;
    let mut inner = 0;
    for _ in 0..n {
        let r = sampler.point_in_sphere(4.0).length();
        assert!(r <= 4.0 + 1e-9);
        if r <= 2.0 {
            inner += 1;
        }
    }
    assert_abs_diff_eq!(inner as f64 / n as f64, 0.125, epsilon = 0.01);
}

/// A uniform disc holds 1/4 of its points within half the radius.
#[test]
fn test_point_in_circle_area_density() {
    let mut engine = RandomEngine::new(12);
    let mut sampler = GeometricSampler::new(&mut engine);
    let n = 20_000;
    let mut inner = 0;
    for _ in 0..n {
        let r = sampler.point_in_circle(3.0).length();
        assert!(r <= 3.0 + 1e-9);
        if r <= 1.5 {
            inner += 1;
        }
    }
    assert_abs_diff_eq!(inner as f64 / n as f64, 0.25, epsilon = 0.015);
}

#[test]
fn test_point_on_circle_radius() {
    let mut engine = RandomEngine::new(13);
    let mut sampler = GeometricSampler::new(&mut engine);
    for _ in 0..1_000 {
        assert_abs_diff_eq!(sampler.point_on_circle(0.5).length(), 0.5, epsilon = 1e-12);
    }
}

/// Haar-uniform rotations carry a fixed axis to a uniform direction,
/// and each quaternion component has `E[c^2] = 1/4`.
#[test]
fn test_quat_haar_uniformity() {
    let mut engine = RandomEngine::new(2_024);
    let mut sampler = GeometricSampler::new(&mut engine);
    let n = 20_000;

    let quats: Vec<_> = (0..n).map(|_| sampler.quat()).collect();
    for q in &quats {
        assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
    }

    let rotated: Vec<DVec3> = quats.iter().map(|q| *q * DVec3::Z).collect();
    let statistic = chi_square(&z_histogram(&rotated));
    assert!(statistic < 35.0, "chi-square {}", statistic);

    let mean_w2 = quats.iter().map(|q| q.w * q.w).sum::<f64>() / n as f64;
    let mean_x2 = quats.iter().map(|q| q.x * q.x).sum::<f64>() / n as f64;
    assert_abs_diff_eq!(mean_w2, 0.25, epsilon = 0.01);
    assert_abs_diff_eq!(mean_x2, 0.25, epsilon = 0.01);
}

#[test]
fn test_rotator_ranges() {
    let mut engine = RandomEngine::new(5);
    let mut sampler = GeometricSampler::new(&mut engine);
    for _ in 0..1_000 {
        let r = sampler.rotator();
        assert!((-90.0..=90.0).contains(&r.pitch));
        assert!((-180.0..=180.0).contains(&r.yaw));
        assert!((-180.0..=180.0).contains(&r.roll));
    }
}

/// All six permutations of three elements appear equally often.
#[test]
fn test_shuffle_permutation_fairness() {
    let permutations = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];

    let mut engine = RandomEngine::new(42);
    let mut sampler = GeometricSampler::new(&mut engine);
    let mut counts = [0u64; 6];
    for _ in 0..60_000 {
        let mut items = [0, 1, 2];
        sampler.shuffle(&mut items);
        let index = permutations
            .iter()
            .position(|p| *p == items)
            .expect("shuffle produced a non-permutation");
        counts[index] += 1;
    }

    // 5 degrees of freedom; 0.999 quantile is 20.5.
    let statistic = chi_square(&counts);
    assert!(statistic < 25.0, "chi-square {} for {:?}", statistic, counts);
    assert_eq!(engine.current_count(), 120_000);
}

/// Same seed, same geometric stream.
#[test]
fn test_geometric_replay() {
    let run = |seed: i32| {
        let mut engine = RandomEngine::new(seed);
        let mut sampler = GeometricSampler::new(&mut engine);
        let a = sampler.point_in_sphere(1.0);
        let b = sampler.quat();
        let c = sampler.point_in_circle(2.0);
        let d = sampler.color();
        (a, b, c, d, engine.current_count())
    };
    assert_eq!(run(99), run(99));
    assert_eq!(run(99).4, 3 + 3 + 2 + 3);
}
