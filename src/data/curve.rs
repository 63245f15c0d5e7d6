//! A Bezier curve of arbitrary degree, defined by its ordered control points.

use crate::data::point::Point;
use crate::data::sampled::SampledCurve;
use crate::error::{BezierError, BezierResult};
use crate::modules::eval::bernstein::{bernstein_weight, sample_curve, weighted_sum};
use log::debug;

/// A Bezier curve of degree `n` with `n + 1` control points
///
/// The control points are validated on construction: the list is non-empty and every
/// coordinate is finite. Their order defines the control polygon and the curve shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    control_points: Vec<Point>,
}

impl BezierCurve {
    /// Create a new bezier curve from a list of control points
    pub fn new(control_points: Vec<Point>) -> BezierResult<Self> {
        if control_points.is_empty() {
            return Err(BezierError::InvalidInput(
                "control point list is empty".to_string(),
            ));
        }
        if let Some((i, p)) = control_points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite())
        {
            return Err(BezierError::InvalidInput(format!(
                "control point {i} is not finite: ({}, {})",
                p.x, p.y
            )));
        }
        debug!(
            "built Bezier curve of degree {} from {} control points",
            control_points.len() - 1,
            control_points.len()
        );
        Ok(Self { control_points })
    }

    /// Create a bezier curve from a slice of control points
    pub fn from_slice(control_points: &[Point]) -> BezierResult<Self> {
        Self::new(control_points.to_vec())
    }

    /// Degree of the curve, one less than the number of control points
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    pub fn start_point(&self) -> Point {
        self.control_points[0]
    }

    pub fn end_point(&self) -> Point {
        self.control_points[self.degree()]
    }

    /// Get a point on the bezier curve at parameter t (0 <= t <= 1)
    pub fn point_at(&self, t: f64) -> Point {
        weighted_sum(&self.control_points, t)
    }

    /// The Bernstein weights of all control points at parameter t, in order
    pub fn weights_at(&self, t: f64) -> Vec<f64> {
        let n = self.degree();
        (0..=n).map(|i| bernstein_weight(n, i, t)).collect()
    }

    /// Generate `num_points` evenly spaced samples along the curve, endpoints included
    pub fn sample_points(&self, num_points: usize) -> BezierResult<SampledCurve> {
        let points = sample_curve(&self.control_points, num_points)?;
        Ok(SampledCurve::new(points))
    }

    /// Axis-aligned box around the control polygon as `(min, max)`
    ///
    /// The curve stays within the convex hull of its control points, hence within this box.
    pub fn bounding_box(&self) -> (Point, Point) {
        self.control_points.iter().skip(1).fold(
            (self.start_point(), self.start_point()),
            |(lo, hi), p| {
                (
                    Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                    Point::new(hi.x.max(p.x), hi.y.max(p.y)),
                )
            },
        )
    }
}
