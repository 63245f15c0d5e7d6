use bernstein_bezier::constants::SCENARIO_CONTROL_POINTS;
use bernstein_bezier::modules::export::svg;
use bernstein_bezier::modules::parse::json::{parse_control_points, points_to_json};
use bernstein_bezier::{curve, BezierError, Point, ViewBounds};

#[test]
fn test_complete_workflow() {
    // Build the degree 5 scenario curve
    let original_curve = curve!((0, 0), (1, 1), (2, 1), (3, 1), (4, -1), (5, 0)).unwrap();
    assert_eq!(original_curve.control_points(), &SCENARIO_CONTROL_POINTS[..]);

    // Store the control points and read them back
    let json = points_to_json(original_curve.control_points()).unwrap();
    let curve = parse_control_points(&json).unwrap();
    assert_eq!(curve, original_curve);

    // Sample points along the curve
    let samples = curve.sample_points(3).unwrap();
    assert_eq!(samples.first(), Some(Point::new(0.0, 0.0)));
    assert_eq!(samples.last(), Some(Point::new(5.0, 0.0)));

    // x = 80 / 32, y = 20 / 32
    let mid = samples.points()[1];
    assert!((mid.x - 2.5).abs() < 1e-12);
    assert!((mid.y - 0.625).abs() < 1e-12);

    // Draw it
    let bounds = ViewBounds::new(0.0..5.0, -1.0..1.0);
    let svg_string =
        svg::to_svg(samples.points(), curve.control_points(), &bounds, 500, 200).unwrap();
    assert!(svg_string.contains("M0,100"));
    assert_eq!(svg_string.matches("<circle").count(), 6);
}

#[test]
fn test_invalid_input_is_reported_before_evaluation() {
    let err = parse_control_points("[]").unwrap_err();
    assert!(matches!(err, BezierError::InvalidInput(_)));
    assert!(err.to_string().contains("empty"));
}
