//! Structured chart result, fixed once at the engine-adapter boundary.
//!
//! Whatever shape a real engine returns, its binding translates it into
//! these types; formatters never probe for fields. Canonical export uses
//! the engine-native camelCase key names so JSON output and the fallback
//! renderer agree on one vocabulary.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ChartError;

/// A successful chart always carries exactly this many palaces.
pub const PALACE_COUNT: usize = 12;

/// A display string with per-language translations.
///
/// `translate(None)` yields the engine's native key; engines that localize
/// attach per-language entries keyed by language tag. Serializes as its key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedText {
    key: String,
    localized: BTreeMap<String, String>,
}

impl LocalizedText {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            localized: BTreeMap::new(),
        }
    }

    pub fn with(mut self, language: &str, text: &str) -> Self {
        self.localized.insert(language.to_string(), text.to_string());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Translation for `language`, falling back to the native key.
    pub fn translate(&self, language: Option<&str>) -> &str {
        match language {
            Some(lang) => self
                .localized
                .get(lang)
                .map(String::as_str)
                .unwrap_or(&self.key),
            None => &self.key,
        }
    }
}

impl Serialize for LocalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key)
    }
}

/// One star entry in a palace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub name: LocalizedText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<LocalizedText>,
}

impl Star {
    pub fn new(name: LocalizedText) -> Self {
        Self {
            name,
            brightness: None,
        }
    }

    pub fn with_brightness(mut self, brightness: LocalizedText) -> Self {
        self.brightness = Some(brightness);
        self
    }
}

/// One of the twelve palaces, in the engine's native order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palace {
    pub name: LocalizedText,
    pub heavenly_stem: LocalizedText,
    pub earthly_branch: LocalizedText,
    pub is_body_palace: bool,
    pub is_original_palace: bool,
    pub major_stars: Vec<Star>,
    pub minor_stars: Vec<Star>,
    pub adjective_stars: Vec<Star>,
    /// Twelve-stage life-cycle label (长生 .. 养).
    pub changsheng12: String,
    /// Twelve-scholar cycle label (博士 .. 官府).
    pub boshi12: String,
}

/// Full natal chart: the fixed shape every engine binding produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub solar_date: String,
    pub lunar_date: String,
    pub chinese_date: String,
    pub time: String,
    pub time_range: String,
    pub zodiac: String,
    pub sign: String,
    pub earthly_branch_of_soul_palace: String,
    pub earthly_branch_of_body_palace: String,
    pub soul: String,
    pub body: String,
    pub five_elements_class: String,
    pub palaces: Vec<Palace>,
}

impl Chart {
    /// Palace flagged as the original (soul) palace, if any.
    pub fn soul_palace(&self) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.is_original_palace)
    }

    /// Palace flagged as the body palace, if any.
    pub fn body_palace(&self) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.is_body_palace)
    }

    /// Export to the canonical JSON mapping (engine-native camelCase keys).
    pub fn to_canonical(&self) -> Result<Map<String, Value>, ChartError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ChartError::Serialization(
                "chart did not serialize to an object".to_string(),
            )),
            Err(e) => Err(ChartError::Serialization(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_chart() -> Chart {
        Chart {
            solar_date: "2000-8-16".to_string(),
            lunar_date: String::new(),
            chinese_date: "庚辰".to_string(),
            time: "寅时".to_string(),
            time_range: "03:00~05:00".to_string(),
            zodiac: "龙".to_string(),
            sign: "狮子座".to_string(),
            earthly_branch_of_soul_palace: "午".to_string(),
            earthly_branch_of_body_palace: "戌".to_string(),
            soul: "贪狼".to_string(),
            body: "文昌".to_string(),
            five_elements_class: "木三局".to_string(),
            palaces: vec![
                Palace {
                    name: LocalizedText::new("命宫").with("en-US", "Life"),
                    heavenly_stem: LocalizedText::new("庚"),
                    earthly_branch: LocalizedText::new("午"),
                    is_body_palace: false,
                    is_original_palace: true,
                    major_stars: vec![
                        Star::new(LocalizedText::new("贪狼"))
                            .with_brightness(LocalizedText::new("庙")),
                    ],
                    minor_stars: Vec::new(),
                    adjective_stars: Vec::new(),
                    changsheng12: "长生".to_string(),
                    boshi12: "博士".to_string(),
                };
                12
            ],
        }
    }

    #[test]
    fn canonical_keys_are_camel_case() {
        let map = minimal_chart().to_canonical().unwrap();
        assert_eq!(map["solarDate"], Value::from("2000-8-16"));
        assert_eq!(map["timeRange"], Value::from("03:00~05:00"));
        assert!(map.contains_key("fiveElementsClass"));
        assert!(map.contains_key("earthlyBranchOfSoulPalace"));
        let palaces = map["palaces"].as_array().unwrap();
        assert_eq!(palaces.len(), 12);
        let p = palaces[0].as_object().unwrap();
        assert!(p.contains_key("heavenlyStem"));
        assert!(p.contains_key("isBodyPalace"));
        assert!(p.contains_key("majorStars"));
        assert!(p.contains_key("changsheng12"));
    }

    #[test]
    fn localized_text_serializes_as_its_key() {
        let map = minimal_chart().to_canonical().unwrap();
        let p = map["palaces"][0].as_object().unwrap();
        assert_eq!(p["name"], Value::from("命宫"));
        assert_eq!(p["majorStars"][0]["name"], Value::from("贪狼"));
        assert_eq!(p["majorStars"][0]["brightness"], Value::from("庙"));
    }

    #[test]
    fn translate_falls_back_to_the_native_key() {
        let t = LocalizedText::new("命宫").with("en-US", "Life");
        assert_eq!(t.translate(Some("en-US")), "Life");
        assert_eq!(t.translate(Some("fr-FR")), "命宫");
        assert_eq!(t.translate(None), "命宫");
    }

    #[test]
    fn soul_and_body_lookups_scan_the_flags() {
        let mut chart = minimal_chart();
        for p in &mut chart.palaces {
            p.is_original_palace = false;
        }
        chart.palaces[3].is_original_palace = true;
        chart.palaces[7].is_body_palace = true;
        assert!(chart.soul_palace().unwrap().is_original_palace);
        assert!(chart.body_palace().unwrap().is_body_palace);
    }
}
