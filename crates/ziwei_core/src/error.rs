//! Error taxonomy for request validation and engine invocation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziwei_time::TimeError;

/// Errors from request validation, engine resolution, or invocation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Wall-clock parsing or bucket validation failed.
    Time(TimeError),
    /// Date string was not "YYYY-M-D".
    DateFormat(String),
    /// Date component outside its gross calendar range.
    DateOutOfRange(String),
    /// Gender argument absent.
    MissingGender,
    /// Gender argument not in the accepted vocabulary.
    UnrecognizedGender(String),
    /// Calendar kind with no engine entry point.
    UnsupportedCalendar(String),
    /// The engine lacks the entry point under every known name.
    MissingCapability {
        entry: &'static str,
        legacy: &'static str,
    },
    /// Every adaptive attempt failed; carries the first attempt's failure.
    Invocation(String),
    /// The chart result could not be exported to a canonical mapping.
    Serialization(String),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::DateFormat(text) => write!(f, "date must be YYYY-M-D, got {text:?}"),
            Self::DateOutOfRange(msg) => write!(f, "date out of range: {msg}"),
            Self::MissingGender => write!(f, "gender is required"),
            Self::UnrecognizedGender(text) => write!(
                f,
                "unrecognized gender {text:?}: accepted forms are male/female, m/f, \
                 man/woman, 남/여, 男/女"
            ),
            Self::UnsupportedCalendar(kind) => write!(f, "unsupported calendar: {kind}"),
            Self::MissingCapability { entry, legacy } => write!(
                f,
                "chart engine entry point not found (tried {entry} and {legacy}); \
                 is a chart engine binding installed?"
            ),
            Self::Invocation(msg) => write!(f, "engine call failed: {msg}"),
            Self::Serialization(msg) => write!(f, "chart is not serializable: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
