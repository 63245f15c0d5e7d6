//! The ordered samples of a Bezier curve, ready to be drawn.

use crate::data::point::Point;

/// Points evaluated at evenly spaced parameters over [0, 1], in parameter order
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    points: Vec<Point>,
}

impl SampledCurve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
