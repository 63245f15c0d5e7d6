//! Axis ranges of the rendered chart.

use crate::constants::{DEFAULT_X_RANGE, DEFAULT_Y_RANGE};
use crate::error::{BezierError, BezierResult};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Fixed x and y ranges of the drawing area, in curve coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub x: Range<f64>,
    pub y: Range<f64>,
}

impl ViewBounds {
    pub fn new(x: Range<f64>, y: Range<f64>) -> Self {
        Self { x, y }
    }

    /// Check that both ranges are finite and non-empty
    pub fn validate(&self) -> BezierResult<()> {
        for (axis, range) in [("x", &self.x), ("y", &self.y)] {
            if !range.start.is_finite() || !range.end.is_finite() {
                return Err(BezierError::InvalidInput(format!(
                    "{axis} range {:?} is not finite",
                    range
                )));
            }
            if range.start >= range.end {
                return Err(BezierError::InvalidInput(format!(
                    "{axis} range {:?} is empty or inverted",
                    range
                )));
            }
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.x.end - self.x.start
    }

    pub fn height(&self) -> f64 {
        self.y.end - self.y.start
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_RANGE.0..DEFAULT_X_RANGE.1,
            y: DEFAULT_Y_RANGE.0..DEFAULT_Y_RANGE.1,
        }
    }
}
