//! Schema model and reference resolution.
//!
//! A [`Schema`] is the part of a JSON Schema document the report needs: the
//! document title and description, the ordered `properties`, and the `$defs`
//! side table used by `$ref` fields.
//!
//! ## Loading a JSON Schema
//!
//! ```rust
//! use content_report::{FieldType, Schema};
//!
//! let schema = Schema::from_json_str(r##"{
//!     "title": "Order",
//!     "properties": {
//!         "id": { "type": "integer" },
//!         "ship_to": { "$ref": "#/$defs/Address" }
//!     },
//!     "$defs": {
//!         "Address": { "type": "object", "title": "Address" }
//!     }
//! }"##).unwrap();
//!
//! assert_eq!(schema.fields.len(), 2);
//! let ship_to = schema.resolve(&schema.fields[1]).unwrap();
//! assert_eq!(ship_to.field_type, FieldType::Object);
//! assert_eq!(ship_to.title.as_deref(), Some("Address"));
//! ```
//!
//! ## Building a Schema in Code
//!
//! ```rust
//! use content_report::{Schema, SchemaField};
//!
//! let schema = Schema::new()
//!     .with_title("Ticket")
//!     .with_field(SchemaField::string("summary"))
//!     .with_field(SchemaField::string("opened").with_format("date-time"));
//!
//! assert!(schema.fields[1].is_date_time());
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

/// Title used in the header when the schema declares none.
pub const DEFAULT_TITLE: &str = "No title available";

/// Description used in the header when the schema declares none.
pub const DEFAULT_DESCRIPTION: &str = "No description available.";

/// The declared type of a schema field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
    /// Resolve through the schema's definition table. Holds the raw `$ref` text.
    Reference(String),
}

impl FieldType {
    /// Parses a JSON Schema `type` keyword.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] for names outside the JSON Schema type set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::FieldType;
    ///
    /// assert_eq!(FieldType::parse("integer").unwrap(), FieldType::Integer);
    /// assert!(FieldType::parse("decimal").is_err());
    /// ```
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "string" => Ok(FieldType::String),
            "integer" => Ok(FieldType::Integer),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "array" => Ok(FieldType::Array),
            "object" => Ok(FieldType::Object),
            "null" => Ok(FieldType::Null),
            other => Err(Error::invalid_schema(format!(
                "unknown field type '{}'",
                other
            ))),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, FieldType::Reference(_))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Null => "null",
            FieldType::Reference(_) => "reference",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named entry of a schema's field list.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaField {
    /// Key of the field in the instance.
    pub name: String,
    pub field_type: FieldType,
    /// Display label. Falls back to the capitalized name.
    pub title: Option<String>,
    /// Format hint such as `date-time`.
    pub format: Option<String>,
}

impl SchemaField {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        SchemaField {
            name: name.into(),
            field_type,
            title: None,
            format: None,
        }
    }

    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::String)
    }

    /// Creates a field that resolves through the definition table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::SchemaField;
    ///
    /// let field = SchemaField::reference("owner", "#/$defs/Person");
    /// assert!(field.field_type.is_reference());
    /// ```
    #[must_use]
    pub fn reference(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(name, FieldType::Reference(target.into()))
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Returns `true` for string fields carrying the `date-time` format hint.
    #[must_use]
    pub fn is_date_time(&self) -> bool {
        self.field_type == FieldType::String && self.format.as_deref() == Some("date-time")
    }
}

/// The schema of a model: header metadata, ordered fields and the definition table.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(try_from = "RawSchema")]
pub struct Schema {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Fields in declaration order, which is also report order.
    pub fields: Vec<SchemaField>,
    /// Named definitions addressed by `$ref` fields.
    pub defs: IndexMap<String, SchemaField>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON Schema document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSchema`] if the text is not JSON or a field
    /// declares an unknown type.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::invalid_schema)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field. Fields render in the order they are added.
    #[must_use]
    pub fn with_field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }

    /// Registers a definition under `key` for `$ref` fields to resolve against.
    #[must_use]
    pub fn with_def(mut self, key: impl Into<String>, definition: SchemaField) -> Self {
        self.defs.insert(key.into(), definition);
        self
    }

    /// The header title, or [`DEFAULT_TITLE`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    /// The header description, or [`DEFAULT_DESCRIPTION`].
    #[must_use]
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Resolves a reference field against the definition table.
    ///
    /// Non-reference fields come back unchanged. A reference is looked up by
    /// the last `/`-separated segment of its target (`#/$defs/Address` uses
    /// key `Address`) and replaced by that definition wholesale, keeping only
    /// the field's name. Exactly one hop is taken.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaResolution`] when the key is missing or when the
    /// definition is itself a reference.
    pub fn resolve<'a>(&'a self, field: &'a SchemaField) -> Result<Cow<'a, SchemaField>> {
        let target = match &field.field_type {
            FieldType::Reference(target) => target,
            _ => return Ok(Cow::Borrowed(field)),
        };

        let key = target.rsplit('/').next().unwrap_or(target);
        let definition = self
            .defs
            .get(key)
            .ok_or_else(|| Error::missing_reference(&field.name, target))?;

        if definition.field_type.is_reference() {
            return Err(Error::nested_reference(&field.name, target));
        }

        Ok(Cow::Owned(SchemaField {
            name: field.name.clone(),
            ..definition.clone()
        }))
    }
}

impl TryFrom<serde_json::Value> for Schema {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::invalid_schema)
    }
}

#[derive(Deserialize)]
struct RawSchema {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    properties: IndexMap<String, RawField>,
    #[serde(default, rename = "$defs", alias = "definitions")]
    defs: IndexMap<String, RawField>,
}

#[derive(Deserialize)]
struct RawField {
    #[serde(default, rename = "type")]
    type_tag: Option<TypeTag>,
    #[serde(default, rename = "$ref")]
    reference: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    format: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeTag {
    Single(String),
    Union(Vec<String>),
}

impl RawField {
    fn into_field(self, name: String) -> Result<SchemaField> {
        let field_type = match (self.reference, self.type_tag) {
            (Some(target), _) => FieldType::Reference(target),
            // An untyped field is treated as a string.
            (None, None) => FieldType::String,
            (None, Some(TypeTag::Single(tag))) => FieldType::parse(&tag)?,
            (None, Some(TypeTag::Union(tags))) => {
                let tag = tags
                    .iter()
                    .find(|t| t.as_str() != "null")
                    .or_else(|| tags.first())
                    .map_or("string", String::as_str);
                FieldType::parse(tag)?
            }
        };

        Ok(SchemaField {
            name,
            field_type,
            title: self.title,
            format: self.format,
        })
    }
}

impl TryFrom<RawSchema> for Schema {
    type Error = Error;

    fn try_from(raw: RawSchema) -> Result<Self> {
        let fields = raw
            .properties
            .into_iter()
            .map(|(name, field)| field.into_field(name))
            .collect::<Result<Vec<_>>>()?;
        let defs = raw
            .defs
            .into_iter()
            .map(|(key, field)| {
                let field = field.into_field(key.clone())?;
                Ok((key, field))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        Ok(Schema {
            title: raw.title,
            description: raw.description,
            fields,
            defs,
        })
    }
}
