//! Curve evaluation
//!
//! - [Bernstein](bernstein/index.html) - explicit evaluation of arbitrary degree curves

pub mod bernstein;
