//! This module provides convenient macros for creating points and control polygons.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating an ordered list of points from coordinate pairs
///
/// ```rust
/// use bernstein_bezier::points;
///
/// let polygon = points![(0, 0), (1, 1), (2, 0)];
/// assert_eq!(polygon.len(), 3);
/// ```
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::pt!($x, $y)),*]
    };
}

/// Macro for creating a Bezier curve from coordinate pairs
///
/// Evaluates to a `BezierResult<BezierCurve>`, since the control polygon is validated.
#[macro_export]
macro_rules! curve {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        $crate::data::BezierCurve::new($crate::points![$(($x, $y)),*])
    };
}
