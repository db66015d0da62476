//! Text renderers: rich localized path and canonical-mapping fallback.

use serde_json::{Map, Value};
use ziwei_core::{Chart, PALACE_COUNT, Star};

use crate::error::RenderError;

fn add_kv(lines: &mut Vec<String>, label: &str, value: &str) {
    let v = value.trim();
    if !v.is_empty() {
        lines.push(format!("{label}: {v}"));
    }
}

fn flag_suffix(is_body: bool, is_origin: bool) -> String {
    let mut flags: Vec<&str> = Vec::new();
    if is_body {
        flags.push("body");
    }
    if is_origin {
        flags.push("origin");
    }
    if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(" "))
    }
}

fn finish(lines: Vec<String>) -> String {
    format!("{}\n", lines.join("\n").trim_end())
}

fn render_stars(stars: &[Star], language: Option<&str>) -> String {
    let items: Vec<String> = stars
        .iter()
        .filter_map(|star| {
            let name = star.name.translate(language).trim();
            if name.is_empty() {
                return None;
            }
            let brightness = star
                .brightness
                .as_ref()
                .map(|b| b.translate(language).trim())
                .unwrap_or("");
            if brightness.is_empty() {
                Some(name.to_string())
            } else {
                Some(format!("{name}({brightness})"))
            }
        })
        .collect();
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Localized rendering straight from the structured chart.
///
/// Fails when the chart breaks the twelve-palace shape; the caller catches
/// that and falls back to [`render_text`].
pub fn render_chart(chart: &Chart, language: &str) -> Result<String, RenderError> {
    if chart.palaces.len() != PALACE_COUNT {
        return Err(RenderError::MalformedChart(chart.palaces.len()));
    }
    let lang = Some(language);
    let mut lines: Vec<String> = Vec::new();

    add_kv(&mut lines, "Solar", &chart.solar_date);
    add_kv(&mut lines, "Lunar", &chart.lunar_date);
    add_kv(&mut lines, "Ganzhi", &chart.chinese_date);
    add_kv(&mut lines, "Time", &chart.time);
    add_kv(&mut lines, "TimeRange", &chart.time_range);
    add_kv(&mut lines, "Zodiac", &chart.zodiac);
    add_kv(&mut lines, "Sign", &chart.sign);
    add_kv(&mut lines, "FiveElementsClass", &chart.five_elements_class);
    if let Some(palace) = chart.soul_palace() {
        add_kv(&mut lines, "SoulPalace", palace.name.translate(lang));
    }
    if let Some(palace) = chart.body_palace() {
        add_kv(&mut lines, "BodyPalace", palace.name.translate(lang));
    }

    lines.push(String::new());
    lines.push("Palaces:".to_string());

    for palace in &chart.palaces {
        let name = match palace.name.translate(lang).trim() {
            "" => "?",
            n => n,
        };
        let stem = palace.heavenly_stem.translate(lang).trim();
        let branch = palace.earthly_branch.translate(lang).trim();
        let flags = flag_suffix(palace.is_body_palace, palace.is_original_palace);
        lines.push(format!("- {name} {stem}{branch}{flags}").trim_end().to_string());

        lines.push(format!("  major: {}", render_stars(&palace.major_stars, lang)));
        lines.push(format!("  minor: {}", render_stars(&palace.minor_stars, lang)));
        if !palace.adjective_stars.is_empty() {
            lines.push(format!("  misc: {}", render_stars(&palace.adjective_stars, lang)));
        }
    }

    Ok(finish(lines))
}

fn str_field<'a>(data: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    match data.get(key) {
        Some(Value::String(s)) => {
            let s = s.trim();
            (!s.is_empty()).then_some(s)
        }
        _ => None,
    }
}

fn format_star_value(star: &Value) -> Option<String> {
    let obj = star.as_object()?;
    let name = obj.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    let brightness = obj
        .get("brightness")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim();
    if brightness.is_empty() {
        Some(name.to_string())
    } else {
        Some(format!("{name}({brightness})"))
    }
}

fn format_star_list(stars: Option<&Value>) -> String {
    let items: Vec<String> = stars
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(format_star_value).collect())
        .unwrap_or_default();
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Fallback rendering from the canonical mapping: fixed camelCase keys,
/// names verbatim, plus the cyclical-stage extras when present. Never fails
/// on well-formed canonical data.
pub fn render_text(data: &Map<String, Value>) -> String {
    let mut lines: Vec<String> = Vec::new();

    let header: [(&str, &str); 12] = [
        ("solarDate", "Solar"),
        ("lunarDate", "Lunar"),
        ("chineseDate", "Ganzhi"),
        ("time", "Time"),
        ("timeRange", "TimeRange"),
        ("zodiac", "Zodiac"),
        ("sign", "Sign"),
        ("earthlyBranchOfSoulPalace", "SoulPalace"),
        ("earthlyBranchOfBodyPalace", "BodyPalace"),
        ("soul", "SoulStar"),
        ("body", "BodyStar"),
        ("fiveElementsClass", "FiveElementsClass"),
    ];
    for (key, label) in header {
        if let Some(value) = str_field(data, key) {
            add_kv(&mut lines, label, value);
        }
    }

    let palaces = data.get("palaces").and_then(Value::as_array);
    if let Some(palaces) = palaces.filter(|p| !p.is_empty()) {
        lines.push(String::new());
        lines.push("Palaces:".to_string());

        for palace in palaces {
            let Some(obj) = palace.as_object() else {
                continue;
            };
            let name = match obj.get("name").and_then(Value::as_str).unwrap_or("").trim() {
                "" => "?",
                n => n,
            };
            let stem = obj
                .get("heavenlyStem")
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim();
            let branch = obj
                .get("earthlyBranch")
                .and_then(Value::as_str)
                .unwrap_or("")
                .trim();
            let flags = flag_suffix(
                obj.get("isBodyPalace").and_then(Value::as_bool).unwrap_or(false),
                obj.get("isOriginalPalace")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            );
            lines.push(format!("- {name} {stem}{branch}{flags}").trim_end().to_string());

            lines.push(format!("  major: {}", format_star_list(obj.get("majorStars"))));
            lines.push(format!("  minor: {}", format_star_list(obj.get("minorStars"))));

            let adjective = obj
                .get("adjectiveStars")
                .and_then(Value::as_array)
                .filter(|a| !a.is_empty());
            if let Some(adjective) = adjective {
                let names: Vec<&str> = adjective
                    .iter()
                    .filter_map(|s| s.as_object())
                    .filter_map(|s| s.get("name").and_then(Value::as_str))
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .collect();
                let joined = if names.is_empty() {
                    "-".to_string()
                } else {
                    names.join(", ")
                };
                lines.push(format!("  misc: {joined}"));
            }

            let changsheng = str_field(obj, "changsheng12").unwrap_or("");
            let boshi = str_field(obj, "boshi12").unwrap_or("");
            if !changsheng.is_empty() || !boshi.is_empty() {
                lines.push(format!(
                    "  changsheng12: {}  boshi12: {}",
                    if changsheng.is_empty() { "-" } else { changsheng },
                    if boshi.is_empty() { "-" } else { boshi },
                ));
            }
        }
    }

    finish(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_core::{LocalizedText, Palace};

    fn palace(name: &str) -> Palace {
        Palace {
            name: LocalizedText::new(name),
            heavenly_stem: LocalizedText::new("庚"),
            earthly_branch: LocalizedText::new("午"),
            is_body_palace: false,
            is_original_palace: false,
            major_stars: Vec::new(),
            minor_stars: Vec::new(),
            adjective_stars: Vec::new(),
            changsheng12: String::new(),
            boshi12: String::new(),
        }
    }

    fn chart() -> Chart {
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
            palaces: (0..12).map(|i| palace(if i == 0 { "命宫" } else { "兄弟" })).collect(),
        }
    }

    #[test]
    fn body_flag_renders_exactly() {
        assert_eq!(flag_suffix(true, false), " [body]");
        assert_eq!(flag_suffix(false, true), " [origin]");
        assert_eq!(flag_suffix(true, true), " [body origin]");
        assert_eq!(flag_suffix(false, false), "");
    }

    #[test]
    fn body_flag_appears_in_rich_output() {
        let mut c = chart();
        c.palaces[0].is_body_palace = true;
        let out = render_chart(&c, "zh-CN").unwrap();
        assert!(out.contains("- 命宫 庚午 [body]\n"), "got:\n{out}");
        assert!(!out.contains("[body origin]"));
    }

    #[test]
    fn empty_star_lists_render_as_dash() {
        let out = render_chart(&chart(), "zh-CN").unwrap();
        assert!(out.contains("  major: -\n"));
        assert!(out.contains("  minor: -\n"));
        assert!(!out.contains("  misc:"));
    }

    #[test]
    fn stars_render_with_brightness_in_parentheses() {
        let mut c = chart();
        c.palaces[0].major_stars = vec![
            Star::new(LocalizedText::new("紫微")).with_brightness(LocalizedText::new("庙")),
            Star::new(LocalizedText::new("天府")),
        ];
        let out = render_chart(&c, "zh-CN").unwrap();
        assert!(out.contains("  major: 紫微(庙), 天府\n"), "got:\n{out}");
    }

    #[test]
    fn empty_header_fields_are_omitted() {
        let out = render_chart(&chart(), "zh-CN").unwrap();
        assert!(out.starts_with("Solar: 2000-8-16\n"));
        assert!(!out.contains("Lunar:"));
    }

    #[test]
    fn rich_path_translates_palace_names() {
        let mut c = chart();
        c.palaces[0].name = LocalizedText::new("命宫").with("en-US", "Life");
        c.palaces[0].is_original_palace = true;
        let out = render_chart(&c, "en-US").unwrap();
        assert!(out.contains("SoulPalace: Life\n"), "got:\n{out}");
        assert!(out.contains("- Life 庚午 [origin]\n"));
    }

    #[test]
    fn wrong_palace_count_is_rejected() {
        let mut c = chart();
        c.palaces.truncate(7);
        assert!(matches!(
            render_chart(&c, "zh-CN"),
            Err(RenderError::MalformedChart(7))
        ));
    }

    #[test]
    fn fallback_renders_verbatim_and_emits_cycle_extras() {
        let mut c = chart();
        c.palaces[0].name = LocalizedText::new("命宫").with("en-US", "Life");
        c.palaces[0].changsheng12 = "长生".to_string();
        c.palaces[0].boshi12 = "博士".to_string();
        let data = c.to_canonical().unwrap();
        let out = render_text(&data);
        // verbatim keys, no translation
        assert!(out.contains("- 命宫 庚午\n"), "got:\n{out}");
        assert!(out.contains("  changsheng12: 长生  boshi12: 博士\n"));
        assert!(out.contains("SoulPalace: 午\n"));
        assert!(out.contains("SoulStar: 贪狼\n"));
        assert!(out.contains("BodyStar: 文昌\n"));
    }

    #[test]
    fn fallback_handles_missing_palaces_key() {
        let data = Map::new();
        assert_eq!(render_text(&data), "\n");
    }
}
