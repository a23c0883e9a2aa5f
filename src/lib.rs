//! # content_report
//!
//! Renders a model instance, described by a JSON-Schema-like document, as a
//! human-readable Markdown report.
//!
//! ## What does a report look like?
//!
//! Given a schema titled `Order` and an instance, the renderer produces:
//!
//! ```text
//! # Document: Order - A customer order
//! ### Attributes:
//! #### **Customer:**
//!  ACME Corp
//! #### **Lines:**
//!  | sku   |   qty |
//! |-------|-------|
//! | W-1   |     2 |
//! ```
//!
//! Fields appear in schema declaration order. Absent values are left out,
//! lists of mappings become pipe tables, other lists become bullet lists,
//! and `date-time` strings are normalized to `YYYY-MM-DD HH:MM:SS`.
//!
//! ## Key Features
//!
//! - **Serde Compatible**: any `#[derive(Serialize)]` model can be rendered
//! - **JSON Schema input**: `properties`, `$defs` and single-level `$ref`
//!   resolution, as emitted by common schema generators
//! - **Configurable**: absence rules, ragged-row handling and numeric
//!   alignment are chosen through [`RenderOptions`]
//! - **Stateless**: a [`DocumentRenderer`] can be shared between threads
//!
//! ## Quick Start
//!
//! ```rust
//! use content_report::{to_string, Schema, SchemaField, FieldType};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Task {
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let schema = Schema::new()
//!     .with_title("Task")
//!     .with_description("A unit of work")
//!     .with_field(SchemaField::string("name"))
//!     .with_field(SchemaField::new("tags", FieldType::Array));
//!
//! let task = Task { name: "Ship it".into(), tags: vec!["urgent".into()] };
//! let report = to_string(&schema, &task).unwrap();
//! assert_eq!(
//!     report,
//!     "# Document: Task - A unit of work\n### Attributes:\n#### **Name:**\n Ship it\n#### **Tags:**\n \n    - urgent"
//! );
//! ```
//!
//! ### Schemas from JSON
//!
//! ```rust
//! use content_report::render_json_str;
//!
//! let schema = r##"{
//!     "title": "Person",
//!     "properties": {
//!         "born": { "type": "string", "format": "date-time" },
//!         "home": { "$ref": "#/$defs/Address" }
//!     },
//!     "$defs": { "Address": { "type": "object", "title": "Home address" } }
//! }"##;
//! let instance = r#"{ "born": "1990-04-01T08:30:00Z", "home": { "city": "Oslo" } }"#;
//!
//! let report = render_json_str(schema, instance).unwrap();
//! assert!(report.contains("#### **Born:**\n 1990-04-01 08:30:00\n"));
//! assert!(report.contains("#### **Home address:**"));
//! ```
//!
//! ### Dynamic Values with value! Macro
//!
//! ```rust
//! use content_report::{render, value, Schema, SchemaField};
//!
//! let instance = value!({ "note": "hello" });
//! let schema = Schema::new().with_field(SchemaField::string("note"));
//! let report = render(&schema, instance.as_object().unwrap()).unwrap();
//! assert!(report.ends_with("#### **Note:**\n hello"));
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: skipped fields and shape
//! decisions at `debug`, finished fragments at `trace`, and rows with
//! differing keys at `warn`. Install any logger to see them.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Rendering a derived struct
//! - **`macro.rs`** - Building instances with the value! macro
//! - **`tabular_rows.rs`** - Lists of mappings as tables
//! - **`json_schema.rs`** - Schema documents with `$defs` and `$ref`
//! - **`custom_options.rs`** - Absence, row and alignment options
//!
//! Run any of them with: `cargo run --example <name>`

pub mod datetime;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod sanitize;
pub mod schema;
pub mod ser;
pub mod table;
pub mod value;

pub use datetime::{format_timestamp, parse_flexible_datetime};
pub use error::{Error, Result};
pub use format::{format_field, resolve_title, FieldShape};
pub use map::Map;
pub use options::{AbsencePolicy, RenderOptions, RowPolicy};
pub use render::DocumentRenderer;
pub use sanitize::{sanitize_cell, sanitize_rows};
pub use schema::{FieldType, Schema, SchemaField, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// A model that knows its own schema and can describe itself as a report.
///
/// # Examples
///
/// ```rust
/// use content_report::{ContentReport, Schema, SchemaField};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Note { body: String }
///
/// impl ContentReport for Note {
///     fn schema() -> Schema {
///         Schema::new()
///             .with_title("Note")
///             .with_field(SchemaField::string("body"))
///     }
/// }
///
/// let report = Note { body: "Remember the milk".into() }.content_report().unwrap();
/// assert!(report.starts_with("# Document: Note - No description available.\n"));
/// ```
pub trait ContentReport: Serialize {
    /// Schema describing the fields of this model.
    fn schema() -> Schema;

    /// Renders `self` with default options.
    ///
    /// # Errors
    ///
    /// See [`DocumentRenderer::render`].
    fn content_report(&self) -> Result<String> {
        to_string(&Self::schema(), self)
    }
}

/// Renders an instance map with default options.
///
/// # Errors
///
/// Returns an error if a reference cannot be resolved, a date-time value
/// cannot be parsed, or a row list is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render(schema: &Schema, instance: &Map) -> Result<String> {
    DocumentRenderer::default().render(schema, instance)
}

/// Renders any `T: Serialize` with default options.
///
/// `value` must serialize to a mapping (a struct or a map).
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if `value` is not a mapping, plus any
/// error [`render`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(schema: &Schema, value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(schema, value, RenderOptions::default())
}

/// Renders any `T: Serialize` with custom options.
///
/// # Examples
///
/// ```rust
/// use content_report::{to_string_with_options, AbsencePolicy, RenderOptions, Schema, SchemaField, FieldType};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Flags { enabled: bool }
///
/// let schema = Schema::new().with_field(SchemaField::new("enabled", FieldType::Boolean));
/// let options = RenderOptions::new().with_absence_policy(AbsencePolicy::Missing);
/// let report = to_string_with_options(&schema, &Flags { enabled: false }, options).unwrap();
/// assert!(report.ends_with("#### **Enabled:**\n False"));
/// ```
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(schema: &Schema, value: &T, options: RenderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match to_value(value)? {
        Value::Object(instance) => DocumentRenderer::new(options).render(schema, &instance),
        _ => Err(Error::unsupported_type(
            "only structs and maps can be rendered as a report",
        )),
    }
}

/// Renders a report from a JSON schema document and a JSON instance.
///
/// # Errors
///
/// Returns [`Error::InvalidSchema`] if either document is not valid JSON or
/// the schema is not understood, [`Error::UnsupportedType`] if the instance
/// is not a JSON object, plus any error [`render`] can return.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_json_str(schema: &str, instance: &str) -> Result<String> {
    let schema = Schema::from_json_str(schema)?;
    let instance: serde_json::Value =
        serde_json::from_str(instance).map_err(Error::invalid_schema)?;
    match Value::from(instance) {
        Value::Object(instance) => render(&schema, &instance),
        _ => Err(Error::unsupported_type("instance document must be a JSON object")),
    }
}

/// Renders any `T: Serialize` into a writer.
///
/// # Examples
///
/// ```rust
/// use content_report::{to_writer, Schema, SchemaField};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let schema = Schema::new().with_field(SchemaField::new("x", content_report::FieldType::Integer));
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &schema, &Point { x: 1, y: 2 }).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().ends_with("#### **X:**\n 1"));
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, schema: &Schema, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let report = to_string(schema, value)?;
    writer
        .write_all(report.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
