//! SVG export utilities for sampled Bezier curves
//!
//! This module draws a sampled curve together with its control polygon as a plain SVG
//! document, without axes or labels.
//!
//! # Features
//!
//! - Map curve coordinates into the SVG viewBox, with the y axis pointing up
//! - Export the sampled curve as a solid polyline path
//! - Export the control polygon as a dashed path with a circle at every control point
//!
//! # Example
//!
//! ```rust
//! use bernstein_bezier::{modules::export::svg, points, sample_curve, ViewBounds};
//!
//! let control = points![(0, 0), (50, 100), (100, 0)];
//! let sampled = sample_curve(&control, 3).unwrap();
//! let bounds = ViewBounds::new(0.0..100.0, 0.0..100.0);
//!
//! let svg_string = svg::to_svg(&sampled, &control, &bounds, 100, 100).unwrap();
//!
//! // the curve passes through (50, 50), drawn at (50, 50) once y is flipped
//! assert!(svg_string.contains("M0,100 L50,50 L100,100"));
//! assert!(svg_string.contains("<circle"));
//! ```

use crate::data::{Point, ViewBounds};
use crate::error::{BezierError, BezierResult};
use svg::node::element::{path::Data, Circle, Path};
use svg::Document;

/// Maps curve coordinates onto a `width` x `height` canvas
#[derive(Debug, Clone)]
pub struct CanvasMapping<'a> {
    bounds: &'a ViewBounds,
    width: f64,
    height: f64,
}

impl<'a> CanvasMapping<'a> {
    pub fn new(bounds: &'a ViewBounds, width: u32, height: u32) -> Self {
        Self {
            bounds,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Canvas position of a point; the canvas y axis points down
    pub fn map(&self, p: &Point) -> (f64, f64) {
        let x = (p.x - self.bounds.x.start) * self.width / self.bounds.width();
        let y = (self.bounds.y.end - p.y) * self.height / self.bounds.height();
        (x, y)
    }
}

/// Build path data for a polyline through the given points
fn polyline_data(points: &[Point], mapping: &CanvasMapping) -> Option<Data> {
    let (first, rest) = points.split_first()?;
    let data = rest
        .iter()
        .fold(Data::new().move_to(mapping.map(first)), |data, p| {
            data.line_to(mapping.map(p))
        });
    Some(data)
}

fn new_document(width: u32, height: u32) -> Document {
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
}

/// Export a sampled curve and its control polygon to an SVG string
///
/// # Parameters
///
/// * `sampled` - The curve samples, in parameter order
/// * `control` - The control points, in polygon order
/// * `bounds` - The region of curve coordinates shown on the canvas
/// * `width` - The width of the SVG canvas
/// * `height` - The height of the SVG canvas
///
/// Fails with `InvalidInput` when `bounds` is empty, inverted or not finite, or when the
/// canvas has no area.
pub fn to_svg(
    sampled: &[Point],
    control: &[Point],
    bounds: &ViewBounds,
    width: u32,
    height: u32,
) -> BezierResult<String> {
    bounds.validate()?;
    if width == 0 || height == 0 {
        return Err(BezierError::InvalidInput(format!(
            "canvas size {width}x{height} has no area"
        )));
    }

    let mapping = CanvasMapping::new(bounds, width, height);
    let mut document = new_document(width, height);

    if let Some(data) = polyline_data(sampled, &mapping) {
        let curve = Path::new()
            .set("fill", "none")
            .set("stroke", "steelblue")
            .set("stroke-width", 2)
            .set("d", data);
        document = document.add(curve);
    }

    if let Some(data) = polyline_data(control, &mapping) {
        let polygon = Path::new()
            .set("fill", "none")
            .set("stroke", "darkorange")
            .set("stroke-width", 1)
            .set("stroke-dasharray", "6,4")
            .set("d", data);
        document = document.add(polygon);
    }

    for point in control {
        let (cx, cy) = mapping.map(point);
        let marker = Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", 4)
            .set("fill", "none")
            .set("stroke", "darkorange");
        document = document.add(marker);
    }

    Ok(document.to_string())
}
