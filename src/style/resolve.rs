//! Box style resolution: raw props + theme → computed style + leftover props.
//!
//! Resolution runs in a fixed order, each stage overwriting the previous one:
//!
//! 1. target defaults (`flexDirection: column`, `position: relative`, and
//!    `display: flex` on the document target)
//! 2. box-model props, rhythm-scaled when numeric, compounds expanded
//! 3. computed props (`flex`, `backgroundColor`)
//! 4. plain value props, copied verbatim
//!
//! Every recognized layout prop is consumed; the rest are returned untouched.

use crate::render::target::RenderTarget;
use crate::style::computed::ComputedStyle;
use crate::style::error::StyleError;
use crate::style::properties::{LayoutProp, StyleKey, BOX_MODEL_ORDER, VALUE_PROPS};
use crate::style::props::Props;
use crate::style::value::{PropValue, StyleValue};
use crate::theme::Theme;

/// Resolve a box's props against a theme for the given target.
///
/// Returns the computed style and every prop that is not a layout prop.
pub fn resolve_box_style(
    theme: &Theme,
    target: RenderTarget,
    mut props: Props,
) -> Result<(ComputedStyle, Props), StyleError> {
    let mut style = ComputedStyle::defaults(target);

    for prop in BOX_MODEL_ORDER {
        let Some(value) = props.take(prop.name()) else {
            continue;
        };
        if let Some(resolved) = resolve_box_model_value(theme, prop, &value)? {
            for key in prop.style_keys() {
                style.set(key.clone(), resolved.clone());
            }
        }
    }

    if let Some(flex) = props.take(LayoutProp::Flex.name()) {
        if let Some(grow) = flex.as_number() {
            style.set(StyleKey::FlexBasis, "auto");
            style.set(StyleKey::FlexGrow, grow);
            style.set(StyleKey::FlexShrink, 1.0);
        }
    }

    if let Some(background) = props.take(LayoutProp::BackgroundColor.name()) {
        if background.is_truthy() {
            style.set(StyleKey::BackgroundColor, resolve_color(theme, &background));
        }
    }

    for prop in VALUE_PROPS {
        let Some(value) = props.take(prop.name()) else {
            continue;
        };
        if !value.is_defined() {
            continue;
        }
        match StyleValue::from_prop(&value) {
            Some(v) => {
                for key in prop.style_keys() {
                    style.set(key.clone(), v.clone());
                }
            }
            None => unrepresentable(prop, &value),
        }
    }

    tracing::trace!(
        keys = style.len(),
        leftovers = props.len(),
        %target,
        "resolved box style"
    );

    Ok((style, props))
}

/// Numbers go through the theme rhythm; other defined values pass as-is.
fn resolve_box_model_value(
    theme: &Theme,
    prop: LayoutProp,
    value: &PropValue,
) -> Result<Option<StyleValue>, StyleError> {
    if !value.is_defined() {
        return Ok(None);
    }
    match value {
        PropValue::Number(unit) if !unit.is_finite() => Err(StyleError::NonFiniteUnit {
            property: prop.name(),
            value: *unit,
        }),
        PropValue::Number(unit) => Ok(Some(theme.rhythm(*unit))),
        other => {
            let resolved = StyleValue::from_prop(other);
            if resolved.is_none() {
                unrepresentable(prop, other);
            }
            Ok(resolved)
        }
    }
}

/// A defined value with no style form (a handler) is consumed and dropped.
fn unrepresentable(prop: LayoutProp, value: &PropValue) {
    tracing::debug!(
        prop = prop.name(),
        value = ?value,
        "layout prop value has no style representation, dropped"
    );
}

/// Unknown color names resolve to [`StyleValue::Undefined`].
fn resolve_color(theme: &Theme, name: &PropValue) -> StyleValue {
    let color = name
        .lookup_key()
        .and_then(|key| theme.color(&key).map(str::to_owned));
    match color {
        Some(color) => StyleValue::Text(color),
        None => {
            tracing::debug!(name = ?name, "unknown theme color");
            StyleValue::Undefined
        }
    }
}
