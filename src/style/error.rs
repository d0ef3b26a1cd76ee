//! Errors raised while resolving and rendering styles.
//!
//! Only configuration mistakes are errors. Data-shape problems (unknown color
//! names, unrecognized props, unparseable lengths) degrade to absent values.

use crate::theme::ThemeError;

/// Errors from style resolution and box rendering.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    #[error("render context has no theme")]
    MissingTheme,
    #[error("no primitive to render: no explicit override and no ambient default")]
    MissingPrimitive,
    #[error("non-finite rhythm unit for {property}: {value}")]
    NonFiniteUnit { property: &'static str, value: f32 },
    #[error(transparent)]
    Theme(#[from] ThemeError),
}
