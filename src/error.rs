//! Error type shared by the whole crate.

use std::fmt;

/// Errors raised while building, sampling or rendering a Bezier curve
#[derive(Debug)]
pub enum BezierError {
    /// Control points, sample count or view bounds that cannot be evaluated
    InvalidInput(String),
    /// Malformed JSON for control points or configuration
    ParseError(String),
    /// Reading input or writing output failed
    IoError(std::io::Error),
    /// The drawing backend reported a failure
    RenderError(String),
}

/// Result alias used throughout the crate
pub type BezierResult<T> = Result<T, BezierError>;

impl fmt::Display for BezierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ParseError(msg) => write!(f, "parse error: {msg}"),
            Self::IoError(err) => write!(f, "i/o error: {err}"),
            Self::RenderError(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl std::error::Error for BezierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BezierError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<serde_json::Error> for BezierError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}
