//! The plotting run: load control points, sample the curve, render.

use crate::config::PlotConfig;
use crate::data::{BezierCurve, SampledCurve};
use crate::error::BezierResult;
use crate::modules::render::CurveRenderer;
use log::{debug, info};

/// Sample `curve` and hand the samples to `renderer`
pub fn plot_curve(
    curve: &BezierCurve,
    config: &PlotConfig,
    renderer: &dyn CurveRenderer,
) -> BezierResult<SampledCurve> {
    config.validate()?;

    let sampled = curve.sample_points(config.sample_count)?;
    let (lo, hi) = curve.bounding_box();
    debug!(
        "sampled degree {} curve at {} parameters, control polygon spans ({}, {})..({}, {})",
        curve.degree(),
        sampled.len(),
        lo.x,
        lo.y,
        hi.x,
        hi.y
    );

    renderer.render_curve(sampled.points(), curve.control_points(), &config.view)?;
    Ok(sampled)
}

/// Run the configured pipeline with the given renderer
pub fn run_with_renderer(
    config: &PlotConfig,
    renderer: &dyn CurveRenderer,
) -> BezierResult<SampledCurve> {
    config.validate()?;
    let curve = config.control_points.load()?;
    info!(
        "plotting a degree {} Bezier curve with {} samples",
        curve.degree(),
        config.sample_count
    );
    plot_curve(&curve, config, renderer)
}

/// Run the configured pipeline with the renderer named by the configuration
pub fn run(config: &PlotConfig) -> BezierResult<SampledCurve> {
    let renderer = config.renderer();
    run_with_renderer(config, renderer.as_ref())
}
