//! Chart rendering: localized text, canonical-mapping fallback, JSON files.
//!
//! Two text paths exist on purpose. The rich path reads the structured
//! `Chart` and localizes names; it may fail, and its caller is expected to
//! catch exactly that failure and fall back to the canonical-mapping
//! renderer, which takes names verbatim and never fails on well-formed data.

pub mod error;
pub mod json;
pub mod text;

pub use error::RenderError;
pub use json::{to_json_string, write_json};
pub use text::{render_chart, render_text};
