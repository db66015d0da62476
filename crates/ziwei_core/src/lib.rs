//! Request normalization and engine invocation for Zi Wei Dou Shu charts.
//!
//! This crate provides:
//! - the immutable `ChartRequest` value object and date/gender normalization
//! - the injected `ChartEngine` binding surface (entry-point probing,
//!   explicit optional-parameter sets)
//! - the adaptive invoker that degrades the option set across engine
//!   signature drift
//! - the structured `Chart` result types and canonical JSON export

pub mod chart;
pub mod engine;
pub mod error;
pub mod gender;
pub mod invoke;
pub mod request;

pub use chart::{Chart, LocalizedText, PALACE_COUNT, Palace, Star};
pub use engine::{
    CallOptions, ChartEngine, EngineEntry, EntryError, LUNAR_ENTRY_NAMES, OptionKey, OptionValue,
    SOLAR_ENTRY_NAMES,
};
pub use error::ChartError;
pub use gender::Gender;
pub use invoke::{call_adaptive, create_chart};
pub use request::{BirthDate, Calendar, ChartRequest};

// Re-export so downstream crates can assemble requests without depending
// on ziwei_time directly.
pub use ziwei_time::TimeBucket;
