//! Dynamic value representation for model instances.
//!
//! This module provides the [`Value`] enum which holds one instance field (or
//! the whole instance) whatever its shape: a scalar, a list of scalars, a list
//! of row mappings, or a flat mapping.
//!
//! ## Creating Values
//!
//! ```rust
//! use content_report::{value, Value};
//!
//! let count = Value::from(3);
//! let tags = value!(["rust", "markdown"]);
//! let owner = value!({ "name": "Alice", "team": "core" });
//!
//! assert_eq!(count.to_string(), "3");
//! assert!(tags.is_array());
//! assert!(owner.is_object());
//! ```
//!
//! ## Converting from Rust Types
//!
//! ```rust
//! use content_report::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert_eq!(value.as_object().map(|o| o.len()), Some(2));
//! ```

use crate::datetime::format_timestamp;
use crate::Map;
use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde::{Serialize, Serializer};
use std::fmt::{self, Write};

/// A dynamically-typed instance value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A timestamp supplied as a timestamp rather than as text. Stored as wall-clock time.
    DateTime(NaiveDateTime),
    Array(Vec<Value>),
    Object(Map),
}

/// A numeric value, either integral or floating point.
///
/// # Examples
///
/// ```rust
/// use content_report::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(2.0).to_string(), "2.0");
/// assert_eq!(Number::Float(2.5).to_string(), "2.5");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` for integer and float zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            // Whole floats keep a trailing ".0" so they read differently from integers.
            Number::Float(fl) if fl.is_finite() && fl.fract() == 0.0 && fl.abs() < 1e16 => {
                write!(f, "{:.1}", fl)
            }
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for `null`, empty strings, empty arrays and empty objects.
    ///
    /// These are the values a report never shows, whatever the absence policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::{value, Value};
    ///
    /// assert!(Value::Null.is_blank());
    /// assert!(value!("").is_blank());
    /// assert!(value!([]).is_blank());
    /// assert!(!Value::from(0).is_blank());
    /// ```
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            Value::Object(obj) => obj.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::DateTime(_) => false,
        }
    }

    /// Returns `true` for blank values and additionally for `false`, `0` and `0.0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::Value;
    ///
    /// assert!(Value::from(false).is_falsy());
    /// assert!(Value::from(0).is_falsy());
    /// assert!(Value::from(0.0).is_falsy());
    /// assert!(!Value::from(f64::NAN).is_falsy());
    /// assert!(!Value::from("0").is_falsy());
    /// ```
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::Number(n) => n.is_zero(),
            other => other.is_blank(),
        }
    }

    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

/// Plain string conversion used wherever a value is inlined into a report.
///
/// Follows the conventions of the models these reports describe: `True`,
/// `False` and `None` for booleans and null, strings verbatim, timestamps as
/// `YYYY-MM-DD HH:MM:SS`, and nested arrays or objects as literals such as
/// `['a', 1]` or `{'k': None}`.
///
/// # Examples
///
/// ```rust
/// use content_report::{value, Value};
///
/// assert_eq!(Value::from(true).to_string(), "True");
/// assert_eq!(Value::Null.to_string(), "None");
/// assert_eq!(value!(["a", 1, null]).to_string(), "['a', 1, None]");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::DateTime(dt) => f.write_str(&format_timestamp(dt)),
            other => write_literal(f, other),
        }
    }
}

/// Writes `value` the way it reads when nested inside a collection, where
/// strings are quoted.
fn write_literal(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("None"),
        Value::Bool(true) => f.write_str("True"),
        Value::Bool(false) => f.write_str("False"),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => write_quoted(f, s),
        Value::DateTime(dt) => write_quoted(f, &format_timestamp(dt)),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_literal(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(map) => {
            f.write_str("{")?;
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_quoted(f, key)?;
                f.write_str(": ")?;
                write_literal(f, item)?;
            }
            f.write_str("}")
        }
    }
}

/// Single quotes, unless the text holds a single quote and no double quote.
fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::DateTime(dt) => {
                serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
            }
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Number(Number::Integer(i)),
                None => Value::Number(Number::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::DateTime(value.naive_local())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}
