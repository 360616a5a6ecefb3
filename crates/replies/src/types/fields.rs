use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use crate::interpreter::{RenderError, compute_suggestions};
use crate::types::Value;

/// The named data carried by a reply.
///
/// Fields are open-ended: templates read the names they reference and ignore
/// the rest. Lookups of absent names fail with [`RenderError::FieldMissing`]
/// rather than substituting a default.
///
/// # Example
///
/// ```
/// use replies::{Fields, fields};
///
/// let fields = fields! { "count" => 3, "name" => "Alice" };
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields.number("count").unwrap(), 3);
/// assert!(fields.require("nmae").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, Value>);

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`Fields::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Get a field if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Get a field, failing with `FieldMissing` when absent.
    pub fn require(&self, name: &str) -> Result<&Value, RenderError> {
        self.0.get(name).ok_or_else(|| {
            let available: Vec<String> = self.0.keys().cloned().collect();
            RenderError::FieldMissing {
                name: name.to_string(),
                suggestions: compute_suggestions(name, &available),
            }
        })
    }

    /// Read a field as a condition, using [`Value::is_truthy`].
    pub fn flag(&self, name: &str) -> Result<bool, RenderError> {
        Ok(self.require(name)?.is_truthy())
    }

    /// Read a field that must be an integer.
    pub fn number(&self, name: &str) -> Result<i64, RenderError> {
        let value = self.require(name)?;
        value.as_number().ok_or_else(|| RenderError::FieldType {
            name: name.to_string(),
            expected: "number",
            found: value.type_name(),
        })
    }

    /// Field names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Fields(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
