//! Algorithms and I/O built on the core data structures.

pub mod eval;
pub mod export;
pub mod parse;
pub mod render;
