//! Per-field fragment formatting.
//!
//! Each field of the schema becomes one fragment:
//!
//! ```text
//! #### **{title}:**
//!  {formatted value}
//! ```
//!
//! The formatting is chosen from the *shape of the value*, not from the
//! declared type, in this order:
//!
//! 1. absent values produce no fragment at all
//! 2. a list whose first element is a mapping becomes a table
//! 3. any other list becomes an indented bullet list
//! 4. a mapping becomes one ``**`key`**: `value` `` line per entry
//! 5. a `date-time` string field is reformatted as `YYYY-MM-DD HH:MM:SS`
//! 6. every other scalar is written as plain text

use crate::datetime::{format_timestamp, parse_flexible_datetime};
use crate::sanitize::sanitize_rows;
use crate::table::write_table;
use crate::{Error, Map, RenderOptions, Result, RowPolicy, SchemaField, Value};
use log::{debug, trace, warn};

/// The shape of an instance value, which decides how it is formatted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldShape<'a> {
    Scalar(&'a Value),
    ScalarList(&'a [Value]),
    RowList(&'a [Value]),
    FlatMapping(&'a Map),
}

impl<'a> FieldShape<'a> {
    /// Determines the shape of `value`.
    ///
    /// A list counts as a row list when its first element is a mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::{value, FieldShape};
    ///
    /// let rows = value!([{ "a": 1 }, { "a": 2 }]);
    /// assert!(matches!(FieldShape::classify(&rows), FieldShape::RowList(_)));
    ///
    /// let tags = value!(["x", "y"]);
    /// assert!(matches!(FieldShape::classify(&tags), FieldShape::ScalarList(_)));
    /// ```
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Array(items) if items.first().is_some_and(Value::is_object) => {
                FieldShape::RowList(items)
            }
            Value::Array(items) => FieldShape::ScalarList(items),
            Value::Object(map) => FieldShape::FlatMapping(map),
            scalar => FieldShape::Scalar(scalar),
        }
    }
}

/// The heading label of a field: its declared title, or its name capitalized.
///
/// Capitalizing upper-cases the first character and lower-cases the rest.
///
/// # Examples
///
/// ```rust
/// use content_report::{resolve_title, SchemaField};
///
/// assert_eq!(resolve_title(&SchemaField::string("createdAt")), "Createdat");
/// assert_eq!(
///     resolve_title(&SchemaField::string("createdAt").with_title("Created")),
///     "Created"
/// );
/// ```
#[must_use]
pub fn resolve_title(field: &SchemaField) -> String {
    match &field.title {
        Some(title) => title.clone(),
        None => capitalize(&field.name),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Formats one field into its Markdown fragment.
///
/// `field` must already be resolved (see [`Schema::resolve`](crate::Schema::resolve)).
/// Returns `Ok(None)` when the value is absent under the configured
/// [`AbsencePolicy`](crate::AbsencePolicy).
///
/// # Errors
///
/// - [`Error::MalformedRow`] when a row list contains a non-mapping row, or
///   rows with differing keys under [`RowPolicy::Strict`]
/// - [`Error::DateFormat`] when a `date-time` value cannot be parsed
///
/// # Examples
///
/// ```rust
/// use content_report::{format_field, value, RenderOptions, SchemaField};
///
/// let field = SchemaField::string("tags");
/// let fragment = format_field(&field, &value!(["x", "y"]), &RenderOptions::new()).unwrap();
/// assert_eq!(fragment.as_deref(), Some("#### **Tags:**\n \n    - x\n    - y\n"));
/// ```
pub fn format_field(
    field: &SchemaField,
    value: &Value,
    options: &RenderOptions,
) -> Result<Option<String>> {
    if options.absence_policy.is_absent(value) {
        debug!("skipping field '{}': no value to show", field.name);
        return Ok(None);
    }

    let shape = FieldShape::classify(value);
    debug!("formatting field '{}' as {:?}", field.name, ShapeName(&shape));

    let body = match shape {
        FieldShape::RowList(rows) => format_rows(field, rows, options)?,
        FieldShape::ScalarList(items) => format_scalar_list(items),
        FieldShape::FlatMapping(map) => format_mapping(map),
        FieldShape::Scalar(scalar) if field.is_date_time() => format_date_time(field, scalar)?,
        FieldShape::Scalar(scalar) => scalar.to_string(),
    };

    let fragment = format!("#### **{}:**\n {}\n", resolve_title(field), body);
    trace!("fragment for '{}': {:?}", field.name, fragment);
    Ok(Some(fragment))
}

fn format_rows(field: &SchemaField, rows: &[Value], options: &RenderOptions) -> Result<String> {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            row.as_object()
                .ok_or_else(|| Error::malformed_row(&field.name, index, "row is not a mapping"))
        })
        .collect::<Result<Vec<&Map>>>()?;

    let mut headers: Vec<String> = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let consistent = row.len() == rows[0].len() && row.keys().all(|k| rows[0].contains_key(k));
        if !consistent {
            match options.row_policy {
                RowPolicy::Strict => {
                    return Err(Error::malformed_row(
                        &field.name,
                        index,
                        "keys differ from the first row",
                    ));
                }
                RowPolicy::Lenient => warn!(
                    "field '{}': row {} keys differ from the first row; missing cells left empty",
                    field.name, index
                ),
            }
        }
        for key in row.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let sanitized = sanitize_rows(&rows);
    Ok(write_table(&headers, &sanitized, options.numeric_alignment))
}

fn format_scalar_list(items: &[Value]) -> String {
    let lines: Vec<String> = items.iter().map(|item| format!("    - {}", item)).collect();
    format!("\n{}", lines.join("\n"))
}

fn format_mapping(map: &Map) -> String {
    map.iter().fold(String::from("\n"), |mut out, (key, value)| {
        out.push_str(&format!("   - **`{}`**: `{}`\n", key, value));
        out
    })
}

fn format_date_time(field: &SchemaField, value: &Value) -> Result<String> {
    match value {
        Value::DateTime(timestamp) => Ok(format_timestamp(timestamp)),
        Value::String(text) => parse_flexible_datetime(text)
            .map(|timestamp| format_timestamp(&timestamp))
            .map_err(|_| Error::date_format(&field.name, text)),
        other => Err(Error::date_format(&field.name, &other.to_string())),
    }
}

/// Debug label for a shape that leaves out the value itself.
struct ShapeName<'a, 'b>(&'b FieldShape<'a>);

impl std::fmt::Debug for ShapeName<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self.0 {
            FieldShape::Scalar(_) => "scalar",
            FieldShape::ScalarList(_) => "scalar list",
            FieldShape::RowList(_) => "row list",
            FieldShape::FlatMapping(_) => "flat mapping",
        })
    }
}
