//! Ordered key/value storage read permissively by attribute name.
//!
//! Every entity keeps its raw wire fields in an [`AttrMap`] and interprets
//! them through typed accessors. Reading an absent key yields
//! [`Value::Null`] instead of failing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::{Deref, Index};

static NULL: Value = Value::Null;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttrMap(Map<String, Value>);

impl AttrMap {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Look up `key`, returning `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Attribute-style read: the value for `key`, or null when absent.
    pub fn attr(&self, key: &str) -> &Value {
        self.0.get(key).unwrap_or(&NULL)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// String field, or `None` for null/missing/non-string values.
    pub fn str_attr(&self, key: &str) -> Option<&str> {
        self.attr(key).as_str()
    }

    /// Integer field. Numeric strings are accepted since the feed sends both.
    pub fn int_attr(&self, key: &str) -> Option<i64> {
        match self.attr(key) {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Truthiness of a field: `0`, `""`, `false`, null and empty
    /// collections are false.
    pub fn flag(&self, key: &str) -> bool {
        truthy(self.attr(key))
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Truthiness the way the service uses it for `0`/`1` and boolean flags.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

impl Deref for AttrMap {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Index<&str> for AttrMap {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.attr(key)
    }
}

impl From<Map<String, Value>> for AttrMap {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
