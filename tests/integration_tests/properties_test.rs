use approx::{assert_abs_diff_eq, assert_relative_eq};
use bernstein_bezier::{bernstein_weight, evaluate_curve, sample_curve, BezierCurve, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

/// A random control polygon with `len` points scattered around the origin
fn random_polygon(rng: &mut StdRng, len: usize) -> Vec<Point> {
    let coordinate = Normal::new(0.0, 250.0).unwrap();
    (0..len)
        .map(|_| Point::new(coordinate.sample(rng), coordinate.sample(rng)))
        .collect()
}

#[test]
fn test_partition_of_unity_random_parameters() {
    let mut rng = StdRng::seed_from_u64(7);
    let parameter = Uniform::new_inclusive(0.0, 1.0);

    for n in 0..=40 {
        for _ in 0..20 {
            let t = parameter.sample(&mut rng);
            let sum: f64 = (0..=n).map(|i| bernstein_weight(n, i, t)).sum();
            assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_weights_are_non_negative_on_unit_interval() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let n = rng.gen_range(0..30);
        let t: f64 = rng.gen_range(0.0..=1.0);
        for i in 0..=n {
            assert!(bernstein_weight(n, i, t) >= 0.0);
        }
    }
}

#[test]
fn test_endpoints_of_random_curves() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let len = rng.gen_range(1..=24);
        let q = random_polygon(&mut rng, len);

        let start = evaluate_curve(&q, 0.0).unwrap();
        let end = evaluate_curve(&q, 1.0).unwrap();
        assert_relative_eq!(start.x, q[0].x, epsilon = 1e-9);
        assert_relative_eq!(start.y, q[0].y, epsilon = 1e-9);
        assert_relative_eq!(end.x, q[len - 1].x, epsilon = 1e-9);
        assert_relative_eq!(end.y, q[len - 1].y, epsilon = 1e-9);

        let k = rng.gen_range(2..=150);
        let samples = sample_curve(&q, k).unwrap();
        assert_eq!(samples.len(), k);
        assert_eq!(samples[0], start);
        assert_eq!(samples[k - 1], end);
    }
}

#[test]
fn test_curve_stays_in_control_polygon_box() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..50 {
        let len = rng.gen_range(2..=16);
        let curve = BezierCurve::new(random_polygon(&mut rng, len)).unwrap();
        let (lo, hi) = curve.bounding_box();

        for p in curve.sample_points(64).unwrap().points() {
            assert!(p.x >= lo.x - 1e-9 && p.x <= hi.x + 1e-9);
            assert!(p.y >= lo.y - 1e-9 && p.y <= hi.y + 1e-9);
        }
    }
}

#[test]
fn test_straight_polygon_gives_straight_curve() {
    // evenly spaced collinear control points give a uniformly parameterized line
    let q: Vec<Point> = (0..=8).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect();
    let samples = sample_curve(&q, 17).unwrap();

    for (i, p) in samples.iter().enumerate() {
        let t = i as f64 / 16.0;
        assert_relative_eq!(p.x, 8.0 * t, epsilon = 1e-9);
        assert_relative_eq!(p.y, 16.0 * t, epsilon = 1e-9);
    }
}

#[test]
fn test_sampling_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let q = random_polygon(&mut rng, 12);
    assert_eq!(sample_curve(&q, 100).unwrap(), sample_curve(&q, 100).unwrap());
}
