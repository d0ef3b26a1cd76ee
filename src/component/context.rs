//! Render context: the theme, ambient primitive and renderer a box renders with.
//!
//! The context is built once at the application root and passed down
//! explicitly. Nested scopes derive new contexts (`with_theme`,
//! `with_primitive`) rather than mutating the parent's.

use std::sync::Arc;

use crate::render::renderer::StyleRenderer;
use crate::render::target::{Primitive, RenderTarget};
use crate::style::error::StyleError;
use crate::theme::Theme;

/// Everything a box needs from its surroundings.
#[derive(Debug, Clone)]
pub struct RenderContext {
    theme: Option<Arc<Theme>>,
    primitive: Option<Primitive>,
    renderer: Arc<dyn StyleRenderer>,
}

impl RenderContext {
    /// A context with only a renderer. Theme and ambient primitive are unset.
    pub fn new(renderer: Arc<dyn StyleRenderer>) -> Self {
        Self {
            theme: None,
            primitive: None,
            renderer,
        }
    }

    /// Derive a context with a different theme. The previous theme value is
    /// left untouched.
    pub fn with_theme(&self, theme: Arc<Theme>) -> Self {
        Self {
            theme: Some(theme),
            ..self.clone()
        }
    }

    /// Derive a context with a different ambient primitive.
    pub fn with_primitive(&self, primitive: impl Into<Primitive>) -> Self {
        Self {
            primitive: Some(primitive.into()),
            ..self.clone()
        }
    }

    /// The active theme. Missing theme is a configuration error.
    pub fn theme(&self) -> Result<&Arc<Theme>, StyleError> {
        self.theme.as_ref().ok_or(StyleError::MissingTheme)
    }

    /// The ambient primitive, if any.
    pub fn primitive(&self) -> Option<&Primitive> {
        self.primitive.as_ref()
    }

    pub fn renderer(&self) -> &dyn StyleRenderer {
        self.renderer.as_ref()
    }

    /// Target of the context's renderer.
    pub fn target(&self) -> RenderTarget {
        self.renderer.target()
    }
}
