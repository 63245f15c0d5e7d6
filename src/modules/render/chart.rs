//! Chart rendering with plotters
//!
//! The sampled curve is drawn as a solid line and the control polygon as a dashed line
//! with a circle on every control point. The axes are fixed to the view bounds, whatever
//! the data. The output format follows the file extension: `.svg` uses the SVG backend,
//! anything else is written as a bitmap.

use crate::data::{Point, ViewBounds};
use crate::error::{BezierError, BezierResult};
use crate::modules::render::CurveRenderer;
use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::PathBuf;

const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);
const POLYGON_COLOR: RGBColor = RGBColor(255, 127, 14);

fn render_error<E: std::fmt::Display>(err: E) -> BezierError {
    BezierError::RenderError(err.to_string())
}

/// Renders a chart of the curve into an image file
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    output: PathBuf,
    width: u32,
    height: u32,
    axis_labels: bool,
}

impl ChartRenderer {
    pub fn new(output: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            output: output.into(),
            width,
            height,
            axis_labels: true,
        }
    }

    /// Whether to draw the caption, mesh and tick labels; these need a system font
    pub fn with_axis_labels(mut self, axis_labels: bool) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    fn is_svg(&self) -> bool {
        self.output
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: DrawingArea<DB, Shift>,
        sampled: &[Point],
        control: &[Point],
        bounds: &ViewBounds,
    ) -> BezierResult<()> {
        root.fill(&WHITE).map_err(render_error)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(15);
        if self.axis_labels {
            builder
                .caption("Bezier curve", ("sans-serif", 24))
                .x_label_area_size(30)
                .y_label_area_size(45);
        }
        let mut chart = builder
            .build_cartesian_2d(bounds.x.clone(), bounds.y.clone())
            .map_err(render_error)?;

        if self.axis_labels {
            chart.configure_mesh().draw().map_err(render_error)?;
        }

        chart
            .draw_series(LineSeries::new(
                sampled.iter().map(|p| p.to_tuple()),
                CURVE_COLOR.stroke_width(2),
            ))
            .map_err(render_error)?;

        chart
            .draw_series(DashedLineSeries::new(
                control.iter().map(|p| p.to_tuple()),
                8,
                5,
                POLYGON_COLOR.stroke_width(1),
            ))
            .map_err(render_error)?;

        chart
            .draw_series(
                control
                    .iter()
                    .map(|p| Circle::new(p.to_tuple(), 4, POLYGON_COLOR.stroke_width(1))),
            )
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
        Ok(())
    }
}

impl CurveRenderer for ChartRenderer {
    fn render_curve(
        &self,
        sampled: &[Point],
        control: &[Point],
        bounds: &ViewBounds,
    ) -> BezierResult<()> {
        bounds.validate()?;
        if self.width == 0 || self.height == 0 {
            return Err(BezierError::InvalidInput(format!(
                "image size {}x{} has no area",
                self.width, self.height
            )));
        }

        let size = (self.width, self.height);
        debug!(
            "drawing {} samples and {} control points at {}x{}",
            sampled.len(),
            control.len(),
            self.width,
            self.height
        );
        if self.is_svg() {
            let root = SVGBackend::new(&self.output, size).into_drawing_area();
            self.draw(root, sampled, control, bounds)?;
        } else {
            let root = BitMapBackend::new(&self.output, size).into_drawing_area();
            self.draw(root, sampled, control, bounds)?;
        }

        info!("chart written to {}", self.output.display());
        Ok(())
    }
}
