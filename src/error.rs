//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;

use serde_json::Error as JsonError;

/// The result type that uses [PlotError] as the error type.
pub type Result<T> = std::result::Result<T, PlotError>;

/// The error type for building and rendering plots.
#[derive(Debug)]
pub enum PlotError {
    /// A sampling interval whose start is not strictly below its end.
    InvalidInterval { start: f32, end: f32 },

    /// A smoothness of zero; at least one segment is required.
    InvalidSmoothness,

    /// A point-sequence curve built from no points at all.
    EmptyPoints,

    /// A polar sampling step that is zero, negative or not finite.
    InvalidStep(f32),

    /// Window dimensions that are not strictly positive and finite.
    InvalidDimensions { width: f32, height: f32 },

    /// A frame handed to a window (or curve) other than the one that
    /// produced it.
    ForeignFrame { expected: String, actual: String },

    /// The windowing or graphics binding failed.
    Backend(String),

    /// A [std::io::Error] encountered while reading a style file.
    Io(IoError),

    /// A [serde_json::Error] encountered while parsing a style file.
    Style(JsonError),
}

impl PlotError {
    pub(crate) fn backend(error: impl Display) -> Self {
        PlotError::Backend(error.to_string())
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::Io(error) => Some(error),
            PlotError::Style(error) => Some(error),
            _ => None,
        }
    }
}

impl Display for PlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plot_error = "plot error:";

        match self {
            PlotError::InvalidInterval { start, end } => write!(
                f,
                "{plot_error} interval start {start} must be below its end {end}"
            ),
            PlotError::InvalidSmoothness => {
                write!(f, "{plot_error} smoothness must be at least 1")
            }
            PlotError::EmptyPoints => write!(f, "{plot_error} point sequence is empty"),
            PlotError::InvalidStep(step) => {
                write!(f, "{plot_error} sampling step {step} must be positive")
            }
            PlotError::InvalidDimensions { width, height } => write!(
                f,
                "{plot_error} window dimensions {width}x{height} must be positive"
            ),
            PlotError::ForeignFrame { expected, actual } => write!(
                f,
                "{plot_error} frame belongs to window '{actual}', not '{expected}'"
            ),
            PlotError::Backend(message) => write!(f, "{plot_error} backend error: {message}"),
            PlotError::Io(error) => write!(f, "{plot_error} I/O error: {error}"),
            PlotError::Style(error) => write!(f, "{plot_error} style error: {error}"),
        }
    }
}

impl From<IoError> for PlotError {
    fn from(error: IoError) -> Self {
        PlotError::Io(error)
    }
}

impl From<JsonError> for PlotError {
    fn from(error: JsonError) -> Self {
        PlotError::Style(error)
    }
}
