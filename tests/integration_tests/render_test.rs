use crate::TestDir;
use bernstein_bezier::config::RendererKind;
use bernstein_bezier::constants::REFERENCE_CONTROL_POINTS;
use bernstein_bezier::modules::render::{ChartRenderer, CurveRenderer, SvgRenderer};
use bernstein_bezier::{pipeline, sample_curve, ControlPointSource, PlotConfig, ViewBounds};
use std::fs;

#[test]
fn test_svg_renderer_writes_file() {
    let dir = TestDir::new("svg_renderer");
    let output = dir.path().join("curve.svg");

    let sampled = sample_curve(&REFERENCE_CONTROL_POINTS, 100).unwrap();
    let renderer = SvgRenderer::new(&output, 800, 400);
    renderer
        .render_curve(&sampled, &REFERENCE_CONTROL_POINTS, &ViewBounds::default())
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("<svg"));
    assert_eq!(content.matches("<circle").count(), 12);
    // first control point (-200, -500) lands at (200, 300) on an 800x400 canvas
    assert!(content.contains("M200,300"));
}

#[test]
fn test_chart_renderer_writes_png() {
    let dir = TestDir::new("chart_png");
    let output = dir.path().join("curve.png");

    let sampled = sample_curve(&REFERENCE_CONTROL_POINTS, 100).unwrap();
    let renderer = ChartRenderer::new(&output, 320, 240).with_axis_labels(false);
    renderer
        .render_curve(&sampled, &REFERENCE_CONTROL_POINTS, &ViewBounds::default())
        .unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn test_chart_renderer_writes_svg() {
    let dir = TestDir::new("chart_svg");
    let output = dir.path().join("curve.svg");

    let sampled = sample_curve(&REFERENCE_CONTROL_POINTS, 100).unwrap();
    let renderer = ChartRenderer::new(&output, 320, 240).with_axis_labels(false);
    renderer
        .render_curve(&sampled, &REFERENCE_CONTROL_POINTS, &ViewBounds::default())
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("<svg"));
    assert!(content.contains("<polyline"));
}

#[test]
fn test_pipeline_from_config_file() {
    let dir = TestDir::new("pipeline_config");
    let points_path = dir.path().join("points.json");
    let config_path = dir.path().join("config.json");
    let output = dir.path().join("plot.svg");

    fs::write(
        &points_path,
        r#"[{"x": 0, "y": 0}, {"x": 1, "y": 1}, {"x": 2, "y": 1}, {"x": 3, "y": 1}, {"x": 4, "y": -1}, {"x": 5, "y": 0}]"#,
    )
    .unwrap();

    let config = PlotConfig {
        sample_count: 11,
        view: ViewBounds::new(-1.0..6.0, -2.0..2.0),
        output: output.clone(),
        renderer: RendererKind::Svg,
        control_points: ControlPointSource::File(points_path),
        ..PlotConfig::default()
    };
    fs::write(&config_path, serde_json::to_string(&config).unwrap()).unwrap();

    let loaded = PlotConfig::from_json_file(&config_path).unwrap();
    assert_eq!(loaded, config);

    let sampled = pipeline::run(&loaded).unwrap();
    assert_eq!(sampled.len(), 11);
    assert!((sampled.points()[5].x - 2.5).abs() < 1e-12);
    assert!((sampled.points()[5].y - 0.625).abs() < 1e-12);
    assert!(output.exists());
}

#[test]
fn test_pipeline_reports_missing_points_file() {
    let dir = TestDir::new("pipeline_missing");
    let config = PlotConfig {
        output: dir.path().join("never.svg"),
        renderer: RendererKind::Svg,
        control_points: ControlPointSource::File(dir.path().join("missing.json")),
        ..PlotConfig::default()
    };

    let err = pipeline::run(&config).unwrap_err();
    assert!(err.to_string().starts_with("i/o error"));
    assert!(!dir.path().join("never.svg").exists());
}
