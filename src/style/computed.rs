//! Computed style: the flat key → value map handed to a render target.
//!
//! Iteration follows [`StyleKey`] declaration order, so two styles holding the
//! same pairs always iterate, print and hash identically no matter in which
//! order their keys were written.

use std::collections::BTreeMap;

use crate::render::target::RenderTarget;
use crate::style::properties::StyleKey;
use crate::style::value::{format_number, StyleValue};

impl From<&str> for StyleKey {
    fn from(name: &str) -> Self {
        StyleKey::from_name(name)
    }
}

/// A resolved style object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedStyle {
    entries: BTreeMap<StyleKey, StyleValue>,
}

impl ComputedStyle {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seed every box starts from: column direction, relative position,
    /// and on the document target an explicit flex display (native layouts are
    /// flex already and must not receive the key).
    pub fn defaults(target: RenderTarget) -> Self {
        let mut style = Self::new();
        style.set(StyleKey::FlexDirection, "column");
        style.set(StyleKey::Position, "relative");
        if target == RenderTarget::Document {
            style.set(StyleKey::Display, "flex");
        }
        style
    }

    /// Set a key (builder).
    pub fn with(mut self, key: impl Into<StyleKey>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a key, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<StyleKey>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &StyleKey) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Look up a key by its camelCase name.
    pub fn get_named(&self, name: &str) -> Option<&StyleValue> {
        self.entries.get(&StyleKey::from_name(name))
    }

    pub fn contains(&self, key: &StyleKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &StyleKey) -> Option<StyleValue> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleKey, &StyleValue)> {
        self.entries.iter()
    }

    /// Shallow merge: every key of `other` replaces the same key in `self`.
    pub fn merge(&self, other: &ComputedStyle) -> ComputedStyle {
        let mut merged = self.clone();
        for (key, value) in &other.entries {
            merged.entries.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Canonical identity of this style: its keys with their value kinds and
    /// values. Styles equal under `==` always share a shape.
    pub fn shape(&self) -> StyleShape {
        StyleShape(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), ShapeValue::of(value)))
                .collect(),
        )
    }

    /// Stylesheet declarations (`margin-left:16px`), skipping undefined values.
    ///
    /// `margin` and `padding` are written as their per-side longhands, minus
    /// the sides this style sets itself. Every declaration then names a
    /// distinct property, so the order atomic rules land in a stylesheet can
    /// never let a shorthand override a side.
    pub fn declarations(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let Some(text) = css_value(key, value) else {
                continue;
            };
            match key.sides() {
                Some(sides) => {
                    for side in sides.iter().filter(|side| !self.sets(side)) {
                        out.push(format!("{}:{}", side.css_name(), text));
                    }
                }
                None => out.push(format!("{}:{}", key.css_name(), text)),
            }
        }
        out
    }

    /// Whether `key` carries a value that reaches the stylesheet.
    fn sets(&self, key: &StyleKey) -> bool {
        self.entries
            .get(key)
            .is_some_and(|value| !value.is_undefined())
    }
}

/// Hashable identity of a [`ComputedStyle`], used to deduplicate registrations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleShape(Vec<(StyleKey, ShapeValue)>);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ShapeValue {
    Number(u32),
    Text(String),
    Undefined,
}

impl ShapeValue {
    fn of(value: &StyleValue) -> Self {
        match value {
            StyleValue::Number(n) => ShapeValue::Number(canonical_bits(*n)),
            StyleValue::Text(text) => ShapeValue::Text(text.clone()),
            StyleValue::Undefined => ShapeValue::Undefined,
        }
    }
}

/// `-0.0` folds into `0.0` and every NaN into a single pattern.
fn canonical_bits(n: f32) -> u32 {
    if n == 0.0 {
        0.0_f32.to_bits()
    } else if n.is_nan() {
        f32::NAN.to_bits()
    } else {
        n.to_bits()
    }
}

impl<K: Into<StyleKey>, V: Into<StyleValue>> FromIterator<(K, V)> for ComputedStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = ComputedStyle::new();
        for (k, v) in iter {
            style.set(k, v);
        }
        style
    }
}

/// Stylesheet text for one value. Numbers become pixel lengths unless the key
/// is unitless or the number is zero.
pub fn css_value(key: &StyleKey, value: &StyleValue) -> Option<String> {
    match value {
        StyleValue::Undefined => None,
        StyleValue::Text(s) => Some(s.clone()),
        StyleValue::Number(n) if key.is_unitless() || *n == 0.0 => Some(format_number(*n)),
        StyleValue::Number(n) => Some(format!("{}px", format_number(*n))),
    }
}
