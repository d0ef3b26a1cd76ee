//! # rhythm-box
//!
//! Cross-target box style resolution. A box is described once with layout
//! props (spacing in rhythm units, symbolic colors, flex settings) and renders
//! the same way on a stylesheet-based document target and on a native target.
//!
//! ## Core Systems
//!
//! - **[`theme`]**: Themes, the rhythm function, named theme registry
//! - **[`style`]**: Property schema, value rules, the box style resolver
//! - **[`render`]**: Render targets, primitive selection, deduplicating renderers
//! - **[`layout`]**: Native style records to taffy flexbox styles
//! - **[`component`]**: Render context and the box component
//! - **[`config`]**: Root configuration building a render context

// Foundation
pub mod theme;

// Core systems
pub mod style;
pub mod render;
pub mod layout;

// Components
pub mod component;
pub mod config;

pub use component::{render_box, BoxProps, Element, RenderContext};
pub use config::StyleConfig;
pub use style::{resolve_box_style, ComputedStyle, PropValue, Props, StyleError, StyleValue};
pub use theme::{Rhythm, Theme, ThemeRegistry};
