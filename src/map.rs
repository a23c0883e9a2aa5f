//! Ordered map type for instance objects and table rows.
//!
//! [`Map`] wraps an [`IndexMap`] so that the keys of a flat mapping and the
//! columns of a row list come out in the order the instance declared them.
//!
//! ## Examples
//!
//! ```rust
//! use content_report::{Map, Value};
//!
//! let mut row = Map::new();
//! row.insert("sku".to_string(), Value::from("W-1"));
//! row.insert("qty".to_string(), Value::from(2));
//!
//! let columns: Vec<_> = row.keys().cloned().collect();
//! assert_eq!(columns, vec!["sku", "qty"]);
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An insertion-ordered map of field names to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(IndexMap<String, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key.
    ///
    /// Replacing a key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key".to_string(), Value::from(1)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(2)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<IndexMap<String, Value>> for Map {
    fn from(map: IndexMap<String, Value>) -> Self {
        Map(map)
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacing_key_keeps_position() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        map.insert("a".to_string(), Value::from(3));

        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_from_iterator_preserves_order() {
        let map: Map = vec![
            ("z".to_string(), Value::from("last")),
            ("a".to_string(), Value::from("first")),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert!(map.contains_key("a"));
        assert!(!map.contains_key("b"));
    }
}
