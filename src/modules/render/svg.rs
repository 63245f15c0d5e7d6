//! Plain SVG rendering, built on [`crate::modules::export::svg`].

use crate::data::{Point, ViewBounds};
use crate::error::BezierResult;
use crate::modules::export::svg::to_svg;
use crate::modules::render::CurveRenderer;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Writes the curve and its control polygon to an SVG file
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    output: PathBuf,
    width: u32,
    height: u32,
}

impl SvgRenderer {
    pub fn new(output: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            output: output.into(),
            width,
            height,
        }
    }
}

impl CurveRenderer for SvgRenderer {
    fn render_curve(
        &self,
        sampled: &[Point],
        control: &[Point],
        bounds: &ViewBounds,
    ) -> BezierResult<()> {
        let document = to_svg(sampled, control, bounds, self.width, self.height)?;
        fs::write(&self.output, document)?;
        info!("svg written to {}", self.output.display());
        Ok(())
    }
}
