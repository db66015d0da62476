//! Canonical-mapping JSON output.
//!
//! Files are written the way the reference charts are archived: 2-space
//! indent, keys sorted lexicographically (serde_json's map is ordered),
//! every non-ASCII character escaped to \uXXXX, trailing newline.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::RenderError;

fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut buf = [0u16; 2];
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

/// Serialize the canonical mapping to its file form (no trailing newline).
pub fn to_json_string(data: &Map<String, Value>) -> Result<String, RenderError> {
    let pretty = serde_json::to_string_pretty(&Value::Object(data.clone()))?;
    Ok(escape_non_ascii(&pretty))
}

/// Write the canonical mapping to `path`.
pub fn write_json(data: &Map<String, Value>, path: &Path) -> Result<(), RenderError> {
    let mut text = to_json_string(data)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("zodiac".to_string(), Value::from("龙"));
        map.insert("solarDate".to_string(), Value::from("2000-8-16"));
        map.insert("palaces".to_string(), Value::Array(vec![]));
        map
    }

    #[test]
    fn non_ascii_is_escaped() {
        let text = to_json_string(&sample()).unwrap();
        assert!(text.contains("\\u9f99"), "got: {text}");
        assert!(text.is_ascii());
    }

    #[test]
    fn keys_come_out_sorted() {
        let text = to_json_string(&sample()).unwrap();
        let palaces = text.find("\"palaces\"").unwrap();
        let solar = text.find("\"solarDate\"").unwrap();
        let zodiac = text.find("\"zodiac\"").unwrap();
        assert!(palaces < solar && solar < zodiac, "got: {text}");
    }

    #[test]
    fn two_space_indent() {
        let text = to_json_string(&sample()).unwrap();
        assert!(text.contains("\n  \"palaces\""), "got: {text}");
    }

    #[test]
    fn surrogate_pairs_for_astral_characters() {
        let mut map = Map::new();
        map.insert("note".to_string(), Value::from("𝄞"));
        let text = to_json_string(&map).unwrap();
        assert!(text.contains("\\ud834\\udd1e"), "got: {text}");
    }

    #[test]
    fn file_roundtrip_preserves_the_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        let data = sample();
        write_json(&data, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, Value::Object(data));
    }
}
