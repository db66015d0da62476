//! Wall-clock "HH:MM" value with range validation.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

/// A validated wall-clock time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build from raw components, range-checking hour and minute.
    pub fn new(hour: i64, minute: i64) -> Result<Self, TimeError> {
        if !(0..=23).contains(&hour) {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if !(0..=59).contains(&minute) {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Parse "HH:MM" (or "H:MM").
    pub fn parse(value: &str) -> Result<Self, TimeError> {
        let text = value.trim();
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 2 {
            return Err(TimeError::Format(text.to_string()));
        }
        let hour: i64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| TimeError::NonNumeric(text.to_string()))?;
        let minute: i64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| TimeError::NonNumeric(text.to_string()))?;
        Self::new(hour, minute)
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_unpadded_hour() {
        let t = ClockTime::parse("4:05").unwrap();
        assert_eq!(t.hour(), 4);
        assert_eq!(t.minute(), 5);
    }

    #[test]
    fn parse_trims_whitespace() {
        let t = ClockTime::parse(" 13:30 ").unwrap();
        assert_eq!(t.hour(), 13);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn rejects_out_of_range_hour() {
        assert_eq!(
            ClockTime::parse("25:00"),
            Err(TimeError::HourOutOfRange(25))
        );
    }

    #[test]
    fn rejects_out_of_range_minute() {
        assert_eq!(
            ClockTime::parse("12:61"),
            Err(TimeError::MinuteOutOfRange(61))
        );
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            ClockTime::parse("12:30:00"),
            Err(TimeError::Format(_))
        ));
        assert!(matches!(ClockTime::parse("12-30"), Err(TimeError::Format(_))));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(ClockTime::parse("noon"), Err(TimeError::Format(_))));
        assert!(matches!(
            ClockTime::parse("ab:cd"),
            Err(TimeError::NonNumeric(_))
        ));
    }

    #[test]
    fn display_pads_to_two_digits() {
        let t = ClockTime::new(4, 5).unwrap();
        assert_eq!(t.to_string(), "04:05");
    }
}
