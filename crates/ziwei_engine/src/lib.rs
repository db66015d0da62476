//! Deterministic reference chart engine.
//!
//! Stands in for an external Zi Wei Dou Shu engine so the CLI, the selftest
//! and the integration tests run without one installed. Palace traversal,
//! stems/branches and the soul/body counting rule follow the traditional
//! conventions; star placement and the five-elements class use simple fixed
//! rotations rather than a full star catalogue, so a given request always
//! produces the same chart.
//!
//! Known limitation: `by_lunar` echoes the input date as the lunar date and
//! performs no calendar conversion; that belongs to a full engine.

pub mod tables;

use ziwei_core::{
    CallOptions, Chart, ChartEngine, EngineEntry, EntryError, LocalizedText, Palace, Star,
};
use ziwei_time::TimeBucket;

use tables::{
    ADJECTIVE_STARS, BOSHI12, BRANCHES, BRIGHTNESS, CHANGSHENG12, FIVE_ELEMENTS, MAJOR_STARS,
    MINOR_STARS, PALACES, SIGN_CUTOFF_DAY, SIGN_STARTING_IN_MONTH, SIGNS, STEMS, ZODIAC,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Calendar {
    Solar,
    Lunar,
}

#[derive(Debug, Clone, Copy)]
enum Locale {
    Zh,
    Ko,
    En,
}

impl Locale {
    fn from_tag(tag: &str) -> Self {
        let lower = tag.trim().to_lowercase();
        if lower.starts_with("ko") {
            Self::Ko
        } else if lower.starts_with("en") {
            Self::En
        } else {
            Self::Zh
        }
    }

    fn pick(self, triple: (&str, &str, &str)) -> String {
        match self {
            Self::Zh => triple.0,
            Self::Ko => triple.1,
            Self::En => triple.2,
        }
        .to_string()
    }
}

fn text(triple: (&str, &str, &str)) -> LocalizedText {
    LocalizedText::new(triple.0)
        .with("zh-CN", triple.0)
        .with("ko-KR", triple.1)
        .with("en-US", triple.2)
}

fn sign_index(month: u32, day: u32) -> usize {
    let m = (month - 1) as usize;
    if day > SIGN_CUTOFF_DAY[m] {
        SIGN_STARTING_IN_MONTH[m]
    } else {
        (SIGN_STARTING_IN_MONTH[m] + 11) % 12
    }
}

fn parse_date(date: &str) -> Result<(i32, u32, u32), EntryError> {
    let parts: Vec<&str> = date.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(EntryError::Failed(format!("invalid date: {date:?}")));
    }
    let year: i32 = parts[0]
        .parse()
        .map_err(|_| EntryError::Failed(format!("invalid date: {date:?}")))?;
    let month: u32 = parts[1]
        .parse()
        .map_err(|_| EntryError::Failed(format!("invalid date: {date:?}")))?;
    let day: u32 = parts[2]
        .parse()
        .map_err(|_| EntryError::Failed(format!("invalid date: {date:?}")))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(EntryError::Failed(format!("date out of range: {date:?}")));
    }
    Ok((year, month, day))
}

fn build_chart(
    calendar: Calendar,
    date: &str,
    time_index: u8,
    gender: &str,
    options: &CallOptions,
) -> Result<Chart, EntryError> {
    let (year, month, day) = parse_date(date)?;
    let bucket = TimeBucket::new(i64::from(time_index))
        .map_err(|e| EntryError::Failed(e.to_string()))?;
    if gender != "男" && gender != "女" {
        return Err(EntryError::Failed(format!(
            "gender must be 男 or 女, got {gender:?}"
        )));
    }
    let locale = Locale::from_tag(options.language().unwrap_or("zh-CN"));

    let year_stem = (year - 4).rem_euclid(10) as usize;
    let year_branch = (year - 4).rem_euclid(12) as usize;
    // Five-tigers rule: the stem of the Yin palace follows the year stem.
    let yin_stem = ((year_stem % 5) * 2 + 2) % 10;

    // Count forward to the birth month, back by the birth hour (soul), and
    // forward by the birth hour (body).
    let t = i64::from(time_index);
    let soul_slot = ((i64::from(month) - 1) - t).rem_euclid(12) as usize;
    let body_slot = ((i64::from(month) - 1) + t).rem_euclid(12) as usize;

    let day_u = day as usize;
    let month_u = month as usize;
    let t_u = time_index as usize;

    let mut palaces = Vec::with_capacity(12);
    for slot in 0..12 {
        let branch = (2 + slot) % 12;
        let major_stars: Vec<Star> = (0..MAJOR_STARS.len())
            .filter(|&s| (s + day_u) % 12 == slot)
            .map(|s| {
                Star::new(text(MAJOR_STARS[s]))
                    .with_brightness(text(BRIGHTNESS[(s + slot) % 7]))
            })
            .collect();
        let minor_stars: Vec<Star> = (0..MINOR_STARS.len())
            .filter(|&s| (s * 3 + month_u) % 12 == slot)
            .map(|s| {
                Star::new(text(MINOR_STARS[s]))
                    .with_brightness(text(BRIGHTNESS[(s + slot + 3) % 7]))
            })
            .collect();
        let adjective_stars: Vec<Star> = (0..ADJECTIVE_STARS.len())
            .filter(|&s| (s * 5 + t_u) % 12 == slot)
            .map(|s| Star::new(text(ADJECTIVE_STARS[s])))
            .collect();

        palaces.push(Palace {
            name: text(PALACES[(slot + 12 - soul_slot) % 12]),
            heavenly_stem: text(STEMS[(yin_stem + slot) % 10]),
            earthly_branch: text(BRANCHES[branch]),
            is_body_palace: slot == body_slot,
            is_original_palace: slot == soul_slot,
            major_stars,
            minor_stars,
            adjective_stars,
            changsheng12: CHANGSHENG12[(slot + day_u) % 12].to_string(),
            boshi12: BOSHI12[(slot + t_u) % 12].to_string(),
        });
    }

    let (solar_date, lunar_date) = match calendar {
        Calendar::Solar => (date.trim().to_string(), String::new()),
        Calendar::Lunar => (String::new(), date.trim().to_string()),
    };

    Ok(Chart {
        solar_date,
        lunar_date,
        chinese_date: format!(
            "{}{}",
            locale.pick(STEMS[year_stem]),
            locale.pick(BRANCHES[year_branch])
        ),
        time: bucket.branch_label().to_string(),
        time_range: bucket.clock_range().to_string(),
        zodiac: locale.pick(ZODIAC[year_branch]),
        sign: locale.pick(SIGNS[sign_index(month, day)]),
        earthly_branch_of_soul_palace: locale.pick(BRANCHES[(2 + soul_slot) % 12]),
        earthly_branch_of_body_palace: locale.pick(BRANCHES[(2 + body_slot) % 12]),
        soul: locale.pick(MAJOR_STARS[day_u % MAJOR_STARS.len()]),
        body: locale.pick(MINOR_STARS[(day_u + t_u) % MINOR_STARS.len()]),
        five_elements_class: locale.pick(FIVE_ELEMENTS[(year_stem + year_branch) % 5]),
        palaces,
    })
}

#[derive(Default)]
struct SolarEntry;

impl EngineEntry for SolarEntry {
    fn call(
        &self,
        date: &str,
        time_index: u8,
        gender: &str,
        options: &CallOptions,
    ) -> Result<Chart, EntryError> {
        build_chart(Calendar::Solar, date, time_index, gender, options)
    }
}

#[derive(Default)]
struct LunarEntry;

impl EngineEntry for LunarEntry {
    fn call(
        &self,
        date: &str,
        time_index: u8,
        gender: &str,
        options: &CallOptions,
    ) -> Result<Chart, EntryError> {
        build_chart(Calendar::Lunar, date, time_index, gender, options)
    }
}

/// The built-in engine binding: both calendars, both entry-name spellings,
/// every known optional parameter accepted.
#[derive(Default)]
pub struct ReferenceEngine {
    solar: SolarEntry,
    lunar: LunarEntry,
}

impl ReferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartEngine for ReferenceEngine {
    fn entry(&self, name: &str) -> Option<&dyn EngineEntry> {
        match name {
            "by_solar" | "bySolar" => Some(&self.solar),
            "by_lunar" | "byLunar" => Some(&self.lunar),
            _ => None,
        }
    }
}
