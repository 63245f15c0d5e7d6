//! Run configuration
//!
//! Every field has a default, and the defaults reproduce the reference plot: the 12
//! reference control points, 100 samples, x in [-400, 400] and y in [-600, -200].
//!
//! ```json
//! {
//!     "sample_count": 200,
//!     "view": {"x": {"start": -10.0, "end": 10.0}, "y": {"start": -5.0, "end": 5.0}},
//!     "output": "curve.svg",
//!     "control_points": {"inline": [{"x": -5.0, "y": 0.0}, {"x": 0.0, "y": 4.0}, {"x": 5.0, "y": 0.0}]}
//! }
//! ```

use crate::constants::{
    DEFAULT_IMAGE_SIZE, DEFAULT_OUTPUT, DEFAULT_SAMPLE_COUNT, REFERENCE_CONTROL_POINTS,
};
use crate::data::{BezierCurve, Point, ViewBounds};
use crate::error::{BezierError, BezierResult};
use crate::modules::parse::json::load_control_points;
use crate::modules::render::{ChartRenderer, CurveRenderer, SvgRenderer};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the control points come from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPointSource {
    /// The built-in 12 point reference polygon
    #[default]
    Reference,
    /// Points listed in the configuration itself
    Inline(Vec<Point>),
    /// A JSON file holding an array of points
    File(PathBuf),
}

impl ControlPointSource {
    /// Resolve the source into a validated curve
    pub fn load(&self) -> BezierResult<BezierCurve> {
        match self {
            Self::Reference => BezierCurve::from_slice(&REFERENCE_CONTROL_POINTS),
            Self::Inline(points) => BezierCurve::from_slice(points),
            Self::File(path) => load_control_points(path),
        }
    }
}

/// Which renderer draws the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RendererKind {
    /// plotters chart with axes; PNG, or SVG for a `.svg` output
    #[default]
    Chart,
    /// plain SVG drawing without axes
    Svg,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Number of evenly spaced samples along the curve, at least 2
    pub sample_count: usize,
    pub view: ViewBounds,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Draw caption, mesh and tick labels on the chart
    pub axis_labels: bool,
    pub renderer: RendererKind,
    pub control_points: ControlPointSource,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            view: ViewBounds::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: DEFAULT_IMAGE_SIZE.0,
            height: DEFAULT_IMAGE_SIZE.1,
            axis_labels: true,
            renderer: RendererKind::default(),
            control_points: ControlPointSource::default(),
        }
    }
}

impl PlotConfig {
    pub fn from_json_str(data: &str) -> BezierResult<Self> {
        let config: Self = serde_json::from_str(data)
            .map_err(|e| BezierError::ParseError(format!("invalid configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> BezierResult<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Check the settings that do not depend on the control points
    pub fn validate(&self) -> BezierResult<()> {
        if self.sample_count < 2 {
            return Err(BezierError::InvalidInput(format!(
                "sample_count must be at least 2, got {}",
                self.sample_count
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(BezierError::InvalidInput(format!(
                "image size {}x{} has no area",
                self.width, self.height
            )));
        }
        self.view.validate()
    }

    /// Build the renderer the configuration asks for
    pub fn renderer(&self) -> Box<dyn CurveRenderer> {
        match self.renderer {
            RendererKind::Chart => Box::new(
                ChartRenderer::new(&self.output, self.width, self.height)
                    .with_axis_labels(self.axis_labels),
            ),
            RendererKind::Svg => Box::new(SvgRenderer::new(&self.output, self.width, self.height)),
        }
    }
}
