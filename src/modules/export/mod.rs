//! Export sampled Bezier curves to various formats
//!
//! This module provides functionality to export sampled curves and their control
//! polygons to different formats for visualization.
//!
//! # Available Export Formats
//!
//! - [SVG](svg/index.html) - Export the curve and control polygon to SVG format

pub mod svg;
