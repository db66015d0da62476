//! Engine binding surface: entry points, option keys, probe names.
//!
//! Chart engines are injected behind `ChartEngine`. The invoker resolves an
//! entry point by probing the primary then the legacy name, and passes
//! optional parameters as an explicit ordered option list so signature
//! drift is handled by removal, not reflection.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::chart::Chart;

/// Probe names for the "compute by solar date" entry point, primary first.
pub const SOLAR_ENTRY_NAMES: (&str, &str) = ("by_solar", "bySolar");
/// Probe names for the "compute by lunar date" entry point, primary first.
pub const LUNAR_ENTRY_NAMES: (&str, &str) = ("by_lunar", "byLunar");

/// Optional parameter names a versioned engine may or may not accept.
///
/// The leap flags appear under both the primary and the legacy spelling
/// because engines have disagreed across versions about which they take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKey {
    Language,
    FixLeap,
    FixLeapCamel,
    IsLeapMonth,
    IsLeapMonthCamel,
}

impl OptionKey {
    /// Wire name of the parameter.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Language => "language",
            Self::FixLeap => "fix_leap",
            Self::FixLeapCamel => "fixLeap",
            Self::IsLeapMonth => "is_leap_month",
            Self::IsLeapMonthCamel => "isLeapMonth",
        }
    }
}

/// Value of an optional parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Text(String),
    Flag(bool),
}

/// Ordered optional-parameter set for one entry-point call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallOptions {
    entries: Vec<(OptionKey, OptionValue)>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: OptionKey, value: OptionValue) {
        self.entries.push((key, value));
    }

    pub fn contains(&self, key: OptionKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Language tag, when offered.
    pub fn language(&self) -> Option<&str> {
        match self.get(OptionKey::Language) {
            Some(OptionValue::Text(lang)) => Some(lang.as_str()),
            _ => None,
        }
    }

    /// Boolean option under `key`, when offered.
    pub fn flag(&self, key: OptionKey) -> Option<bool> {
        match self.get(key) {
            Some(OptionValue::Flag(v)) => Some(*v),
            _ => None,
        }
    }

    /// Copy of this set with one key removed.
    pub fn without(&self, key: OptionKey) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| *k != key)
                .cloned()
                .collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Failure from a single entry-point call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The entry's signature does not accept this parameter (retryable).
    UnexpectedParameter(String),
    /// The engine accepted the call shape but failed to produce a chart.
    Failed(String),
}

impl Display for EntryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedParameter(name) => {
                write!(f, "unexpected parameter: {name}")
            }
            Self::Failed(msg) => write!(f, "{msg}"),
        }
    }
}

impl Error for EntryError {}

/// One resolvable engine entry point ("by solar date" / "by lunar date").
pub trait EngineEntry {
    fn call(
        &self,
        date: &str,
        time_index: u8,
        gender: &str,
        options: &CallOptions,
    ) -> Result<Chart, EntryError>;
}

/// An installed chart engine: a capability table of named entry points.
pub trait ChartEngine {
    /// Look up an entry point by wire name ("by_solar", "bySolar", ...).
    fn entry(&self, name: &str) -> Option<&dyn EngineEntry>;
}
