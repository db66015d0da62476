//! Error types for wall-clock parsing and bucket validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from "HH:MM" parsing or time-bucket validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input was not two colon-separated fields.
    Format(String),
    /// A field was not an integer.
    NonNumeric(String),
    /// Hour outside 0..=23.
    HourOutOfRange(i64),
    /// Minute outside 0..=59.
    MinuteOutOfRange(i64),
    /// Bucket index outside 0..=12.
    BucketOutOfRange(i64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format(text) => write!(f, "time must be in HH:MM format, got {text:?}"),
            Self::NonNumeric(text) => write!(f, "time must be numeric HH:MM, got {text:?}"),
            Self::HourOutOfRange(hour) => write!(f, "hour must be 0..23, got {hour}"),
            Self::MinuteOutOfRange(minute) => write!(f, "minute must be 0..59, got {minute}"),
            Self::BucketOutOfRange(index) => write!(f, "time index must be 0..12, got {index}"),
        }
    }
}

impl Error for TimeError {}
