//! Adaptive invocation across engine signature drift.
//!
//! Versioned engines disagree about which optional parameters their entry
//! points accept. The invoker offers the full option set first, then retries
//! removing exactly one option at a time with language held back to the end
//! (it drives output localization and is the most valuable option to keep),
//! then once more with no options at all. When every attempt fails, the
//! first attempt's error is surfaced: it names the richest call.

use crate::chart::Chart;
use crate::engine::{
    CallOptions, ChartEngine, EngineEntry, EntryError, LUNAR_ENTRY_NAMES, OptionKey, OptionValue,
    SOLAR_ENTRY_NAMES,
};
use crate::error::ChartError;
use crate::gender::Gender;
use crate::request::{Calendar, ChartRequest};

/// Single-removal order; language goes last.
const DROP_ORDER: [OptionKey; 5] = [
    OptionKey::FixLeap,
    OptionKey::FixLeapCamel,
    OptionKey::IsLeapMonth,
    OptionKey::IsLeapMonthCamel,
    OptionKey::Language,
];

/// Invoke `entry`, degrading the option set on signature mismatches.
///
/// Only `EntryError::UnexpectedParameter` triggers a retry; any other
/// failure propagates immediately.
pub fn call_adaptive(
    entry: &dyn EngineEntry,
    date: &str,
    time_index: u8,
    gender: &str,
    options: &CallOptions,
) -> Result<Chart, ChartError> {
    let first = match entry.call(date, time_index, gender, options) {
        Ok(chart) => return Ok(chart),
        Err(EntryError::Failed(msg)) => return Err(ChartError::Invocation(msg)),
        Err(err @ EntryError::UnexpectedParameter(_)) => err,
    };

    for key in DROP_ORDER {
        if !options.contains(key) {
            continue;
        }
        match entry.call(date, time_index, gender, &options.without(key)) {
            Ok(chart) => return Ok(chart),
            Err(EntryError::UnexpectedParameter(_)) => {}
            Err(EntryError::Failed(msg)) => return Err(ChartError::Invocation(msg)),
        }
    }

    // Last resort: required positional values only.
    match entry.call(date, time_index, gender, &CallOptions::new()) {
        Ok(chart) => Ok(chart),
        Err(_) => Err(ChartError::Invocation(first.to_string())),
    }
}

fn resolve_entry<'e>(
    engine: &'e dyn ChartEngine,
    names: (&'static str, &'static str),
) -> Result<&'e dyn EngineEntry, ChartError> {
    engine
        .entry(names.0)
        .or_else(|| engine.entry(names.1))
        .ok_or(ChartError::MissingCapability {
            entry: names.0,
            legacy: names.1,
        })
}

/// Build a chart for `request` against `engine`: normalize the gender,
/// resolve the calendar's entry point, and invoke it adaptively.
pub fn create_chart(request: &ChartRequest, engine: &dyn ChartEngine) -> Result<Chart, ChartError> {
    let gender = Gender::normalize(Some(request.gender.as_str()))?;
    let date = request.date.to_string();
    let time_index = request.time_index.index();

    let mut options = CallOptions::new();
    options.push(
        OptionKey::Language,
        OptionValue::Text(request.language.clone()),
    );
    if request.calendar == Calendar::Lunar {
        options.push(OptionKey::IsLeapMonth, OptionValue::Flag(request.is_leap_month));
        options.push(
            OptionKey::IsLeapMonthCamel,
            OptionValue::Flag(request.is_leap_month),
        );
    }
    options.push(OptionKey::FixLeap, OptionValue::Flag(request.fix_leap));
    options.push(OptionKey::FixLeapCamel, OptionValue::Flag(request.fix_leap));

    let names = match request.calendar {
        Calendar::Solar => SOLAR_ENTRY_NAMES,
        Calendar::Lunar => LUNAR_ENTRY_NAMES,
    };
    let entry = resolve_entry(engine, names)?;
    call_adaptive(entry, &date, time_index, gender.token(), &options)
}
