//! The renderer interface shared by both targets, plus the override merge.

use std::fmt;
use std::sync::Arc;

use crate::render::native::NativeStyleId;
use crate::render::target::RenderTarget;
use crate::style::computed::ComputedStyle;
use crate::theme::Theme;

/// What a renderer hands back for a style: the identifier its target needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderedStyle {
    /// Space-separated atomic class names.
    ClassName(String),
    /// Id of a registered native style record.
    Native(NativeStyleId),
}

impl RenderedStyle {
    pub fn class_name(&self) -> Option<&str> {
        match self {
            RenderedStyle::ClassName(classes) => Some(classes),
            RenderedStyle::Native(_) => None,
        }
    }

    pub fn native_id(&self) -> Option<NativeStyleId> {
        match self {
            RenderedStyle::Native(id) => Some(*id),
            RenderedStyle::ClassName(_) => None,
        }
    }
}

/// Turns computed styles into render-target identifiers.
///
/// Implementations deduplicate: structurally equal styles always map to the
/// same identifier, and registering a style twice has no further effect.
/// Registration may happen from several threads at once.
pub trait StyleRenderer: Send + Sync + fmt::Debug {
    /// The target this renderer produces for.
    fn target(&self) -> RenderTarget;

    /// Register `style` if it is new and return its identifier.
    fn render_rule(&self, style: &ComputedStyle) -> RenderedStyle;
}

/// A caller-supplied, theme-aware style patch applied on top of a computed style.
#[derive(Clone)]
pub struct StyleOverride(Arc<dyn Fn(&Theme) -> ComputedStyle + Send + Sync>);

impl StyleOverride {
    pub fn new(f: impl Fn(&Theme) -> ComputedStyle + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A patch that ignores the theme.
    pub fn fixed(style: ComputedStyle) -> Self {
        Self::new(move |_| style.clone())
    }

    pub fn apply(&self, theme: &Theme) -> ComputedStyle {
        (self.0)(theme)
    }
}

impl fmt::Debug for StyleOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StyleOverride(..)")
    }
}

/// Merge `computed` with the override (override wins key-for-key) and hand
/// the result to the renderer.
pub fn render_style(
    renderer: &dyn StyleRenderer,
    theme: &Theme,
    computed: &ComputedStyle,
    style_override: Option<&StyleOverride>,
) -> RenderedStyle {
    match style_override {
        Some(patch) => renderer.render_rule(&computed.merge(&patch.apply(theme))),
        None => renderer.render_rule(computed),
    }
}
