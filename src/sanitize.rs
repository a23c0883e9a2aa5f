//! Cell sanitization for Markdown tables.
//!
//! A table cell must stay on one line, so every cell is converted to text
//! with embedded newlines and `<br>` tags turned into single spaces and the
//! surrounding whitespace trimmed.
//!
//! ```rust
//! use content_report::{sanitize_cell, Value};
//!
//! let cell = sanitize_cell(&Value::from("  first line\nsecond<br>third "));
//! assert_eq!(cell, "first line second third");
//! ```

use crate::{Map, Value};
use indexmap::IndexMap;

/// A row of sanitized cells keyed by column name.
pub type SanitizedRow = IndexMap<String, String>;

/// Converts a value to single-line cell text.
#[must_use]
pub fn sanitize_cell(value: &Value) -> String {
    sanitize_text(&value.to_string())
}

/// Replaces newlines and `<br>` tags with spaces and trims the result.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    text.replace('\n', " ")
        .replace("<br>", " ")
        .trim()
        .to_string()
}

/// Sanitizes every cell of every row.
///
/// Row order and key order are preserved and no row is dropped.
#[must_use]
pub fn sanitize_rows(rows: &[&Map]) -> Vec<SanitizedRow> {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(|(key, value)| (key.clone(), sanitize_cell(value)))
                .collect()
        })
        .collect()
}
