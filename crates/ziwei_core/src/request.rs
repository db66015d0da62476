//! Immutable chart request assembled once per invocation.

use std::fmt;

use ziwei_time::TimeBucket;

use crate::error::ChartError;

/// Calendar kind of the birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calendar {
    Solar,
    Lunar,
}

impl Calendar {
    /// Parse a calendar kind; anything but solar/lunar is unsupported.
    pub fn parse(value: &str) -> Result<Self, ChartError> {
        match value.trim().to_lowercase().as_str() {
            "solar" => Ok(Self::Solar),
            "lunar" => Ok(Self::Lunar),
            other => Err(ChartError::UnsupportedCalendar(other.to_string())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Solar => "solar",
            Self::Lunar => "lunar",
        }
    }
}

/// Birth date as the engine expects it: 1-indexed, no zero padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl BirthDate {
    /// Parse "YYYY-M-D". Calendar-accurate day validation belongs to the
    /// engine; only gross ranges are rejected here.
    pub fn parse(value: &str) -> Result<Self, ChartError> {
        let text = value.trim();
        let parts: Vec<&str> = text.split('-').collect();
        if parts.len() != 3 {
            return Err(ChartError::DateFormat(text.to_string()));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|_| ChartError::DateFormat(text.to_string()))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|_| ChartError::DateFormat(text.to_string()))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|_| ChartError::DateFormat(text.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(ChartError::DateOutOfRange(format!("month {month}")));
        }
        if !(1..=31).contains(&day) {
            return Err(ChartError::DateOutOfRange(format!("day {day}")));
        }
        Ok(Self { year, month, day })
    }
}

impl fmt::Display for BirthDate {
    /// Renders without padding so the engine sees the 1-indexed form
    /// ("2000-8-16").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Everything needed to invoke a chart engine, built once per run and
/// consumed by the invoker.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub calendar: Calendar,
    pub date: BirthDate,
    pub time_index: TimeBucket,
    /// Raw gender input; normalized at invocation time.
    pub gender: String,
    /// BCP-47 style language tag driving engine-side localization.
    pub language: String,
    /// Lunar only: the birth month is a leap month.
    pub is_leap_month: bool,
    /// Lunar only: apply the engine's leap-month fix.
    pub fix_leap: bool,
}

impl ChartRequest {
    pub fn new(
        calendar: Calendar,
        date: BirthDate,
        time_index: TimeBucket,
        gender: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            calendar,
            date,
            time_index,
            gender: gender.into(),
            language: language.into(),
            is_leap_month: false,
            fix_leap: true,
        }
    }

    pub fn with_leap(mut self, is_leap_month: bool, fix_leap: bool) -> Self {
        self.is_leap_month = is_leap_month;
        self.fix_leap = fix_leap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_roundtrips_without_padding() {
        let d = BirthDate::parse("2000-8-16").unwrap();
        assert_eq!((d.year, d.month, d.day), (2000, 8, 16));
        assert_eq!(d.to_string(), "2000-8-16");
    }

    #[test]
    fn padded_date_is_accepted_but_renders_unpadded() {
        let d = BirthDate::parse("2000-08-06").unwrap();
        assert_eq!(d.to_string(), "2000-8-6");
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(matches!(
            BirthDate::parse("2000/8/16"),
            Err(ChartError::DateFormat(_))
        ));
        assert!(matches!(
            BirthDate::parse("2000-8"),
            Err(ChartError::DateFormat(_))
        ));
        assert!(matches!(
            BirthDate::parse("2000-13-1"),
            Err(ChartError::DateOutOfRange(_))
        ));
        assert!(matches!(
            BirthDate::parse("2000-1-32"),
            Err(ChartError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn calendar_parse_rejects_unknown_kinds() {
        assert_eq!(Calendar::parse("solar").unwrap(), Calendar::Solar);
        assert_eq!(Calendar::parse(" Lunar ").unwrap(), Calendar::Lunar);
        assert!(matches!(
            Calendar::parse("julian"),
            Err(ChartError::UnsupportedCalendar(_))
        ));
    }
}
