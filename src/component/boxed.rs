//! The universal box: one API for both render targets.
//!
//! Rendering a box resolves its layout props into a computed style, picks the
//! primitive to render as, merges the caller's style override on top and hands
//! the result to the context's renderer. Props the resolver does not recognize
//! travel to the primitive unchanged.
//!
//! # Examples
//!
//! ```ignore
//! use rhythm_box::component::{render_box, BoxProps};
//!
//! let element = render_box(&ctx, BoxProps::new().with("padding", 1).with("flex", 1))?;
//! ```

use crate::component::context::RenderContext;
use crate::render::renderer::{render_style, RenderedStyle, StyleOverride};
use crate::render::target::{select_primitive, Primitive};
use crate::style::computed::ComputedStyle;
use crate::style::error::StyleError;
use crate::style::props::Props;
use crate::style::resolve::resolve_box_style;
use crate::style::value::PropValue;

/// Props of a box: layout and pass-through props plus the two box-level
/// options (`as` primitive override and `style` override).
#[derive(Debug, Clone, Default)]
pub struct BoxProps {
    primitive: Option<Primitive>,
    style: Option<StyleOverride>,
    props: Props,
}

impl BoxProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing prop set.
    pub fn from_props(props: Props) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    /// Set a layout or pass-through prop (builder).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name, value);
        self
    }

    /// Render as this primitive instead of the context's default (builder).
    pub fn render_as(mut self, primitive: impl Into<Primitive>) -> Self {
        self.primitive = Some(primitive.into());
        self
    }

    /// Low-level, theme-aware style patch applied last (builder).
    pub fn style(mut self, style: StyleOverride) -> Self {
        self.style = Some(style);
        self
    }

    pub fn props(&self) -> &Props {
        &self.props
    }
}

/// A box ready to hand to the target: which primitive, with which props and
/// which rendered style.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub primitive: Primitive,
    pub props: Props,
    pub style: RenderedStyle,
}

/// Resolve and render a box.
///
/// Fails only on configuration errors: no theme in the context, or no
/// primitive to render as.
pub fn render_box(ctx: &RenderContext, box_props: BoxProps) -> Result<Element, StyleError> {
    let BoxProps {
        primitive,
        style,
        props,
    } = box_props;

    let theme = ctx.theme()?;
    let primitive = select_primitive(primitive.as_ref(), ctx.primitive())?;
    let (computed, props) = resolve_box_style(theme, ctx.target(), props)?;
    let style = render_style(ctx.renderer(), theme, &computed, style.as_ref());

    Ok(Element {
        primitive,
        props,
        style,
    })
}

/// Resolve a box without rendering it: the style the renderer would receive
/// (override included) and the pass-through props.
pub fn compute_box(
    ctx: &RenderContext,
    box_props: BoxProps,
) -> Result<(ComputedStyle, Props), StyleError> {
    let theme = ctx.theme()?;
    let (computed, props) = resolve_box_style(theme, ctx.target(), box_props.props)?;
    let computed = match &box_props.style {
        Some(patch) => computed.merge(&patch.apply(theme)),
        None => computed,
    };
    Ok((computed, props))
}
