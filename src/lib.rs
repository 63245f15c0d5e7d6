// Module definitions
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;
pub mod pipeline;

// export the core data structure at crate level
pub use config::{ControlPointSource, PlotConfig};
pub use data::bounds::ViewBounds;
pub use data::curve::BezierCurve;
pub use data::point::Point;
pub use data::sampled::SampledCurve;
pub use error::{BezierError, BezierResult};
pub use modules::eval::bernstein::{bernstein_weight, evaluate_curve, sample_curve};
