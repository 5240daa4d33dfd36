//! Enum definitions for code-valued fields.
//!
//! An [`EnumDefinition`] maps the raw code of an enum-typed field to the name
//! shown in its place. Codes are keyed by the general rendering of the raw
//! value, so the number `3` and the text `"3"` find the same entry.

use std::collections::HashMap;

use crate::value::RawValue;

/// A single enum entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumEntry {
    /// Display name for the code.
    pub name: String,
}

impl EnumEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Mapping from raw code to display name.
///
/// Deserializes from a JSON object of the form `{"1": {"name": "Attach"}}`
/// when the `serde` feature is enabled.
///
/// # Examples
///
/// ```
/// use netrec_fmt::{EnumDefinition, RawValue};
///
/// let causes: EnumDefinition = [("1", "Attach"), ("2", "Detach")].into_iter().collect();
///
/// assert_eq!(causes.lookup(&RawValue::Number(2.0)), Some("Detach"));
/// assert_eq!(causes.lookup(&RawValue::from("1")), Some("Attach"));
/// assert_eq!(causes.lookup(&RawValue::Number(9.0)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EnumDefinition {
    entries: HashMap<String, EnumEntry>,
}

impl EnumDefinition {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `code`.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(code.into(), EnumEntry::new(name));
    }

    /// Entry for a code given as text.
    pub fn get(&self, code: &str) -> Option<&EnumEntry> {
        self.entries.get(code)
    }

    /// Display name for a raw value, if the definition has one.
    ///
    /// `Null` never matches.
    pub fn lookup(&self, value: &RawValue) -> Option<&str> {
        if value.is_null() {
            return None;
        }
        self.get(&value.to_string()).map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnumDefinition {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut def = Self::new();
        for (code, name) in iter {
            def.insert(code, name);
        }
        def
    }
}
