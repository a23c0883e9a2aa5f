//! Error types for content report rendering.
//!
//! Every failure is fatal for the document being rendered: the renderer never
//! returns a partial report.
//!
//! ## Error Categories
//!
//! - **Schema resolution**: a `$ref` field points at a definition that is missing
//!   from `$defs`, or at another reference
//! - **Date formatting**: a `date-time` field holds a value the flexible parser rejects
//! - **Malformed rows**: a list of row mappings cannot be laid out as a table
//! - **Invalid schema**: the schema document itself cannot be understood
//!
//! ## Examples
//!
//! ```rust
//! use content_report::{Error, Schema};
//!
//! let result = Schema::from_json_str("{ not json");
//! assert!(matches!(result, Err(Error::InvalidSchema(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while building a content report.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A reference field whose target is absent from the definition table.
    #[error("Cannot resolve field '{field}': reference '{reference}' {reason}")]
    SchemaResolution {
        field: String,
        reference: String,
        reason: String,
    },

    /// A `date-time` value that could not be parsed.
    #[error("Cannot format field '{field}' as date-time: {value:?} is not a recognised date")]
    DateFormat { field: String, value: String },

    /// A row list that cannot be rendered as a table.
    #[error("Malformed row {row} in field '{field}': {reason}")]
    MalformedRow {
        field: String,
        row: usize,
        reason: String,
    },

    /// The schema document could not be interpreted.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Unsupported type for conversion into a [`Value`](crate::Value)
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Header template rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// IO error while writing a report
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a resolution error for a reference missing from `$defs`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::Error;
    ///
    /// let err = Error::missing_reference("address", "#/$defs/Address");
    /// assert!(err.to_string().contains("#/$defs/Address"));
    /// ```
    pub fn missing_reference(field: &str, reference: &str) -> Self {
        Error::SchemaResolution {
            field: field.to_string(),
            reference: reference.to_string(),
            reason: "is not present in $defs".to_string(),
        }
    }

    /// Creates a resolution error for a reference that points at another reference.
    pub fn nested_reference(field: &str, reference: &str) -> Self {
        Error::SchemaResolution {
            field: field.to_string(),
            reference: reference.to_string(),
            reason: "resolves to another reference; only one level is supported".to_string(),
        }
    }

    /// Creates a date formatting error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::Error;
    ///
    /// let err = Error::date_format("created", "yesterday-ish");
    /// assert!(err.to_string().contains("created"));
    /// ```
    pub fn date_format(field: &str, value: &str) -> Self {
        Error::DateFormat {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a malformed row error.
    pub fn malformed_row(field: &str, row: usize, reason: &str) -> Self {
        Error::MalformedRow {
            field: field.to_string(),
            row,
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid schema error.
    pub fn invalid_schema<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidSchema(msg.to_string())
    }

    /// Creates an unsupported type error for values that have no [`Value`](crate::Value) form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for report writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(err: handlebars::RenderError) -> Self {
        Error::Template(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
