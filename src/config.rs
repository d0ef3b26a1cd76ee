//! Configuration for building a root [`RenderContext`].
//!
//! The render target is picked here, once. Everything downstream asks the
//! context's renderer for its target instead of probing the platform.

use std::sync::Arc;

use crate::component::context::RenderContext;
use crate::render::document::DocumentRenderer;
use crate::render::native::NativeRenderer;
use crate::render::renderer::StyleRenderer;
use crate::render::target::{Primitive, RenderTarget};
use crate::theme::ThemeRegistry;

/// Root rendering configuration.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Which renderer to build.
    pub target: RenderTarget,
    /// Name of the active theme. `None` or an unknown name selects the default.
    pub theme: Option<String>,
    /// Ambient primitive for boxes without an explicit one.
    pub default_primitive: Option<Primitive>,
    /// Prefix for generated class names (document target only).
    pub class_prefix: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::document()
    }
}

impl StyleConfig {
    /// Document target rendering boxes as `div`.
    pub fn document() -> Self {
        Self {
            target: RenderTarget::Document,
            theme: None,
            default_primitive: Some(RenderTarget::Document.default_primitive()),
            class_prefix: String::new(),
        }
    }

    /// Native target rendering boxes as `View`.
    pub fn native() -> Self {
        Self {
            target: RenderTarget::Native,
            theme: None,
            default_primitive: Some(RenderTarget::Native.default_primitive()),
            class_prefix: String::new(),
        }
    }

    /// Select a theme by name (builder).
    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = Some(name.into());
        self
    }

    /// Set the ambient primitive (builder). `None` requires every box to name
    /// its own primitive.
    pub fn with_default_primitive(mut self, primitive: Option<Primitive>) -> Self {
        self.default_primitive = primitive;
        self
    }

    /// Set the class name prefix (builder).
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Build the renderer for the configured target.
    pub fn build_renderer(&self) -> Arc<dyn StyleRenderer> {
        match self.target {
            RenderTarget::Document => {
                Arc::new(DocumentRenderer::with_prefix(self.class_prefix.clone()))
            }
            RenderTarget::Native => Arc::new(NativeRenderer::new()),
        }
    }

    /// Build a root context with the selected theme from `registry`.
    pub fn into_context(self, registry: &ThemeRegistry) -> RenderContext {
        let theme = registry.select(self.theme.as_deref());
        let ctx = RenderContext::new(self.build_renderer()).with_theme(theme);
        match self.default_primitive {
            Some(primitive) => ctx.with_primitive(primitive),
            None => ctx,
        }
    }
}
