//! Property values: what callers pass in ([`PropValue`]) and what ends up in
//! a computed style ([`StyleValue`]).
//!
//! Input values follow loose, script-like rules for "is this set?". A value is
//! *defined* when it is a number (any number, `0` included) or otherwise truthy.
//! Empty strings, `false`, `null` and `undefined` are not defined.

use std::fmt;
use std::sync::Arc;

/// An opaque callable prop (event handler, ref callback, ...).
///
/// Handlers are never interpreted by the resolver; they only travel through
/// as leftover props. Two handlers are equal when they share the same closure.
#[derive(Clone)]
pub struct Handler(Arc<dyn Fn() + Send + Sync>);

impl Handler {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the handler.
    pub fn call(&self) {
        (self.0)()
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// A raw property value as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Explicitly undefined.
    Undefined,
    /// Explicit null.
    Null,
    Bool(bool),
    Number(f32),
    Str(String),
    Handler(Handler),
}

impl PropValue {
    /// Whether the value counts as set for style purposes.
    ///
    /// Numbers short-circuit the check, so `0` and NaN are defined. Everything
    /// else must be truthy.
    pub fn is_defined(&self) -> bool {
        matches!(self, PropValue::Number(_)) || self.is_truthy()
    }

    /// Script-style truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Undefined | PropValue::Null => false,
            PropValue::Bool(b) => *b,
            PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropValue::Str(s) => !s.is_empty(),
            PropValue::Handler(_) => true,
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f32> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string used when this value indexes a name table (e.g. theme colors).
    pub fn lookup_key(&self) -> Option<String> {
        match self {
            PropValue::Str(s) => Some(s.clone()),
            PropValue::Number(n) => Some(format_number(*n)),
            PropValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<f32> for PropValue {
    fn from(n: f32) -> Self {
        PropValue::Number(n)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n as f32)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n as f32)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<Handler> for PropValue {
    fn from(h: Handler) -> Self {
        PropValue::Handler(h)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(PropValue::Undefined)
    }
}

/// A concrete value inside a computed style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A bare number. Lengths in native units, or unitless factors.
    Number(f32),
    /// Keyword or length text, e.g. `"auto"`, `"50%"`, `"1.5rem"`, `"#fff"`.
    Text(String),
    /// Key present but without a value (unknown color name). Targets treat it
    /// as "no value".
    Undefined,
}

impl StyleValue {
    /// Convert a defined input value into a style value.
    ///
    /// Handlers and nullish values carry no style meaning and yield `None`.
    pub fn from_prop(value: &PropValue) -> Option<StyleValue> {
        match value {
            PropValue::Number(n) => Some(StyleValue::Number(*n)),
            PropValue::Str(s) => Some(StyleValue::Text(s.clone())),
            PropValue::Bool(b) => Some(StyleValue::Text(b.to_string())),
            PropValue::Undefined | PropValue::Null | PropValue::Handler(_) => None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, StyleValue::Undefined)
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n as f32)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f32)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_owned())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Undefined => f.write_str("undefined"),
        }
    }
}

/// Format a number without a trailing `.0` for whole values.
pub(crate) fn format_number(n: f32) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
