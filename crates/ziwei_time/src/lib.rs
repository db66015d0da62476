//! Wall-clock parsing and the traditional double-hour bucket mapping.
//!
//! This crate provides:
//! - `ClockTime`, a validated "HH:MM" wall-clock value
//! - `TimeBucket`, one of the 13 double-hour indices chart engines expect
//! - the branch-label and clock-range tables shared with engine bindings

pub mod bucket;
pub mod clock;
pub mod error;

pub use bucket::{BRANCH_LABELS, CLOCK_RANGES, TimeBucket, bucket_from_hhmm};
pub use clock::ClockTime;
pub use error::TimeError;
