//! Rendering of sampled curves
//!
//! Drawing is kept behind the [`CurveRenderer`] trait so that evaluation and sampling can
//! be exercised without any output device.
//!
//! - [Chart](chart/index.html) - plotters chart with fixed axis ranges, PNG or SVG
//! - [SVG](svg/index.html) - plain SVG drawing without axes

pub mod chart;
pub mod svg;

use crate::data::{Point, ViewBounds};
use crate::error::BezierResult;

pub use chart::ChartRenderer;
pub use svg::SvgRenderer;

/// Something that can draw a sampled curve over its control polygon
pub trait CurveRenderer {
    /// Draw `sampled` as a line and `control` as a dashed polygon with point markers,
    /// showing exactly the region `bounds`
    fn render_curve(
        &self,
        sampled: &[Point],
        control: &[Point],
        bounds: &ViewBounds,
    ) -> BezierResult<()>;
}
