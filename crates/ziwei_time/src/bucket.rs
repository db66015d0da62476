//! The 13 traditional double-hour buckets.
//!
//! The Rat hour (Zi) is split across midnight: 23:00-23:59 is the early Rat
//! hour (index 0) and 00:00-00:59 the late Rat hour (index 12). Hours 01..=22
//! fall into eleven contiguous two-hour spans (indices 1-11).

use crate::clock::ClockTime;
use crate::error::TimeError;

/// Double-hour labels indexed by bucket (0 = early Rat, 12 = late Rat).
pub const BRANCH_LABELS: [&str; 13] = [
    "早子时", "丑时", "寅时", "卯时", "辰时", "巳时", "午时", "未时", "申时", "酉时", "戌时",
    "亥时", "晚子时",
];

/// Clock span covered by each bucket, in the engine's "HH:MM~HH:MM" form.
pub const CLOCK_RANGES: [&str; 13] = [
    "23:00~01:00",
    "01:00~03:00",
    "03:00~05:00",
    "05:00~07:00",
    "07:00~09:00",
    "09:00~11:00",
    "11:00~13:00",
    "13:00~15:00",
    "15:00~17:00",
    "17:00~19:00",
    "19:00~21:00",
    "21:00~23:00",
    "23:00~01:00",
];

/// A validated double-hour bucket index (0..=12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeBucket(u8);

impl TimeBucket {
    /// Validate a caller-supplied index.
    pub fn new(index: i64) -> Result<Self, TimeError> {
        if !(0..=12).contains(&index) {
            return Err(TimeError::BucketOutOfRange(index));
        }
        Ok(Self(index as u8))
    }

    /// Bucket for a wall-clock time. The minute never shifts the bucket.
    pub fn from_clock(clock: ClockTime) -> Self {
        let index = match clock.hour() {
            23 => 0,
            0 => 12,
            h => ((h - 1) / 2) + 1,
        };
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Chinese double-hour label (早子时, 丑时, ... 晚子时).
    pub fn branch_label(self) -> &'static str {
        BRANCH_LABELS[self.0 as usize]
    }

    /// Clock span covered by this bucket.
    pub fn clock_range(self) -> &'static str {
        CLOCK_RANGES[self.0 as usize]
    }
}

/// Parse "HH:MM" and convert to its bucket.
pub fn bucket_from_hhmm(value: &str) -> Result<TimeBucket, TimeError> {
    Ok(TimeBucket::from_clock(ClockTime::parse(value)?))
}
