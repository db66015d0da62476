//! Error types for rendering and JSON output.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the rich render path or the JSON writer.
#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// Chart does not carry the twelve palaces a successful result must.
    MalformedChart(usize),
    /// JSON serialization failed.
    Json(serde_json::Error),
    /// I/O error writing the JSON file.
    Io(std::io::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedChart(count) => {
                write!(f, "chart has {count} palaces, expected 12")
            }
            Self::Json(e) => write!(f, "JSON serialization error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for RenderError {}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
