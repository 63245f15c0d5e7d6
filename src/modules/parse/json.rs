//! Parse control points from JSON
//!
//! The expected form is an ordered array of points:
//!
//! ```json
//! [{"x": -200.0, "y": -500.0}, {"x": -280.5, "y": -500.0}, {"x": -300.0, "y": -361.1}]
//! ```
//!
//! Array order is the control polygon order.
//!
//! # Example
//!
//! ```rust
//! use bernstein_bezier::modules::parse::json::parse_control_points;
//!
//! let curve = parse_control_points(r#"[{"x": 0, "y": 0}, {"x": 1, "y": 2}]"#).unwrap();
//! assert_eq!(curve.degree(), 1);
//! ```

use crate::data::{BezierCurve, Point};
use crate::error::{BezierError, BezierResult};
use log::info;
use std::fs;
use std::path::Path;

/// Parse a JSON array of points, without any validation
pub fn parse_points(data: &str) -> BezierResult<Vec<Point>> {
    serde_json::from_str(data).map_err(|e| {
        BezierError::ParseError(format!("expected an array of {{\"x\", \"y\"}} points: {e}"))
    })
}

/// Parse a JSON array of points into a validated Bezier curve
pub fn parse_control_points(data: &str) -> BezierResult<BezierCurve> {
    BezierCurve::new(parse_points(data)?)
}

/// Read a JSON control point file into a validated Bezier curve
pub fn load_control_points(path: &Path) -> BezierResult<BezierCurve> {
    let data = fs::read_to_string(path)?;
    let curve = parse_control_points(&data)?;
    info!(
        "loaded {} control points from {}",
        curve.control_points().len(),
        path.display()
    );
    Ok(curve)
}

/// Serialize points into the JSON form accepted by [`parse_points`]
pub fn points_to_json(points: &[Point]) -> BezierResult<String> {
    Ok(serde_json::to_string_pretty(points)?)
}
