//! Reference data and default settings.

use crate::data::point::Point;

/// Number of samples taken along the curve by default
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Default horizontal axis range
pub const DEFAULT_X_RANGE: (f64, f64) = (-400.0, 400.0);

/// Default vertical axis range
pub const DEFAULT_Y_RANGE: (f64, f64) = (-600.0, -200.0);

/// Default image size in pixels
pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (800, 600);

/// Default output file
pub const DEFAULT_OUTPUT: &str = "bezier_curve.png";

/// The 12 point control polygon of the reference plot (degree 11)
pub const REFERENCE_CONTROL_POINTS: [Point; 12] = [
    Point::new(-200.0, -500.0),
    Point::new(-280.5, -500.0),
    Point::new(-300.0, -361.1),
    Point::new(-300.0, -361.1),
    Point::new(-300.0, -361.1),
    Point::new(0.0, -361.1),
    Point::new(0.0, -361.1),
    Point::new(0.0, -321.4),
    Point::new(303.2, -321.4),
    Point::new(303.2, -321.4),
    Point::new(282.6, -500.0),
    Point::new(200.0, -500.0),
];

/// A small degree 5 polygon, handy for checking evaluation by hand
pub const SCENARIO_CONTROL_POINTS: [Point; 6] = [
    Point::new(0.0, 0.0),
    Point::new(1.0, 1.0),
    Point::new(2.0, 1.0),
    Point::new(3.0, 1.0),
    Point::new(4.0, -1.0),
    Point::new(5.0, 0.0),
];
