//! Open property bag: name → [`PropValue`].
//!
//! Used both as the resolver's input and for the leftover props handed to the
//! rendered primitive.

use std::collections::BTreeMap;

use crate::style::value::PropValue;

/// A set of named props.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    entries: BTreeMap<String, PropValue>,
}

impl Props {
    /// Create an empty prop set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prop (builder).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a prop, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a prop and return its value.
    pub fn take(&mut self, name: &str) -> Option<PropValue> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Props::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}
