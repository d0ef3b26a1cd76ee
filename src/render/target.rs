//! Render targets and the primitives rendered on them.

use std::borrow::Cow;
use std::fmt;

use crate::style::error::StyleError;

/// The platform consuming computed styles. Chosen once, at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// Stylesheet-based document renderer (atomic class names).
    Document,
    /// Native renderer (registered style records).
    Native,
}

impl RenderTarget {
    /// The primitive a box renders as when nothing else is specified.
    pub fn default_primitive(self) -> Primitive {
        match self {
            RenderTarget::Document => Primitive::new("div"),
            RenderTarget::Native => Primitive::new("View"),
        }
    }
}

impl fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderTarget::Document => write!(f, "document"),
            RenderTarget::Native => write!(f, "native"),
        }
    }
}

/// A concrete renderable element or component, identified by name
/// (`"div"`, `"View"`, `"Text"`, `"a"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Primitive(Cow<'static, str>);

impl Primitive {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Primitive {
    fn from(name: &'static str) -> Self {
        Primitive::new(name)
    }
}

/// Pick the primitive to render: the explicit override if given, else the
/// ambient default. Neither present is a configuration error.
pub fn select_primitive(
    explicit: Option<&Primitive>,
    ambient: Option<&Primitive>,
) -> Result<Primitive, StyleError> {
    explicit
        .or(ambient)
        .cloned()
        .ok_or(StyleError::MissingPrimitive)
}
