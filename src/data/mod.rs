//! Core data structures: points, control polygons, sampled curves and view bounds.

pub mod bounds;
pub mod curve;
pub mod macros;
pub mod point;
pub mod sampled;

pub use bounds::ViewBounds;
pub use curve::BezierCurve;
pub use point::Point;
pub use sampled::SampledCurve;
