//! Bezier curve evaluation through the Bernstein basis
//!
//! A Bezier curve of degree `n` over control points `P_0..P_n` is
//!
//! `B(t) = sum_i C(n, i) * t^i * (1 - t)^(n - i) * P_i`
//!
//! The curve starts at `P_0` (t = 0), ends at `P_n` (t = 1), and for every `t` the
//! weights sum to one.
//!
//! # Example
//!
//! ```rust
//! use bernstein_bezier::{evaluate_curve, points, sample_curve, Point};
//!
//! let q = points![(0, 0), (1, 1), (2, 1), (3, 1), (4, -1), (5, 0)];
//!
//! let mid = evaluate_curve(&q, 0.5).unwrap();
//! assert!((mid.x - 2.5).abs() < 1e-12);
//! assert!((mid.y - 0.625).abs() < 1e-12);
//!
//! let samples = sample_curve(&q, 100).unwrap();
//! assert_eq!(samples.len(), 100);
//! assert_eq!(samples[0], Point::new(0.0, 0.0));
//! ```

use crate::data::Point;
use crate::error::{BezierError, BezierResult};
use nalgebra::Vector2;

/// Binomial coefficient `C(n, k)` in floating point
///
/// Uses the multiplicative formula over `min(k, n - k)` factors, which stays finite
/// for degrees in the hundreds where an integer product would overflow.
///
/// The central coefficients exceed `f64::MAX` once `n` passes about 1030; up to
/// `n = 1000` every coefficient is finite.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, j| acc * (n + 1 - j) as f64 / j as f64)
}

/// Bernstein basis weight `C(n, i) * t^i * (1 - t)^(n - i)`
///
/// `t` is not clamped. `0^0` is taken as 1, so the weight of `P_0` at `t = 0` and of
/// `P_n` at `t = 1` is exactly one. Degrees are supported up to 1000, see [`binomial`].
pub fn bernstein_weight(n: usize, i: usize, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Evaluate the Bezier curve defined by `control_points` at parameter `t`
pub fn evaluate_curve(control_points: &[Point], t: f64) -> BezierResult<Point> {
    if control_points.is_empty() {
        return Err(BezierError::InvalidInput(
            "cannot evaluate a Bezier curve without control points".to_string(),
        ));
    }
    Ok(weighted_sum(control_points, t))
}

/// Sample `sample_count` points at evenly spaced parameters `i / (sample_count - 1)`
///
/// Both ends of the parameter range are included, so the first sample is the first
/// control point and the last sample is the last control point.
pub fn sample_curve(control_points: &[Point], sample_count: usize) -> BezierResult<Vec<Point>> {
    if control_points.is_empty() {
        return Err(BezierError::InvalidInput(
            "cannot sample a Bezier curve without control points".to_string(),
        ));
    }
    if sample_count < 2 {
        return Err(BezierError::InvalidInput(format!(
            "sample count must be at least 2, got {sample_count}"
        )));
    }

    let last = (sample_count - 1) as f64;
    Ok((0..sample_count)
        .map(|i| weighted_sum(control_points, i as f64 / last))
        .collect())
}

/// Sum of the control points weighted by the Bernstein basis; `control_points` is non-empty
pub(crate) fn weighted_sum(control_points: &[Point], t: f64) -> Point {
    let n = control_points.len() - 1;
    control_points
        .iter()
        .enumerate()
        .fold(Vector2::zeros(), |acc, (i, p)| {
            acc + bernstein_weight(n, i, t) * p.to_vector()
        })
        .into()
}
