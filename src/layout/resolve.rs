//! Native style record -> taffy Style conversion.
//!
//! Maps the camelCase keys of a [`ComputedStyle`] onto taffy's flexbox
//! [`taffy::Style`]. Keys taffy has no notion of (colors, opacity, z-index,
//! custom keys) are ignored, as are values that are not valid for the key.

use taffy::prelude::*;

use crate::layout::length::{style_length, Length};
use crate::style::computed::ComputedStyle;
use crate::style::properties::StyleKey;
use crate::style::value::StyleValue;

fn length_percentage_auto(length: Length) -> LengthPercentageAuto {
    match length {
        Length::Points(v) => LengthPercentageAuto::from_length(v),
        Length::Percent(v) => LengthPercentageAuto::from_percent(v),
        Length::Auto => LengthPercentageAuto::AUTO,
    }
}

/// No auto variant here; `auto` maps to zero.
fn length_percentage(length: Length) -> LengthPercentage {
    match length {
        Length::Points(v) => LengthPercentage::from_length(v),
        Length::Percent(v) => LengthPercentage::from_percent(v),
        Length::Auto => LengthPercentage::ZERO,
    }
}

fn dimension(length: Length) -> Dimension {
    match length {
        Length::Points(v) => Dimension::from_length(v),
        Length::Percent(v) => Dimension::from_percent(v),
        Length::Auto => Dimension::AUTO,
    }
}

fn keyword(style: &ComputedStyle, key: StyleKey) -> Option<&str> {
    style.get(&key).and_then(StyleValue::as_text)
}

fn length(style: &ComputedStyle, key: StyleKey) -> Option<Length> {
    style.get(&key).and_then(style_length)
}

fn number(style: &ComputedStyle, key: StyleKey) -> Option<f32> {
    style
        .get(&key)
        .and_then(StyleValue::as_number)
        .filter(|n| n.is_finite())
}

fn flex_direction(name: &str) -> Option<FlexDirection> {
    match name {
        "row" => Some(FlexDirection::Row),
        "row-reverse" => Some(FlexDirection::RowReverse),
        "column" => Some(FlexDirection::Column),
        "column-reverse" => Some(FlexDirection::ColumnReverse),
        _ => None,
    }
}

fn flex_wrap(name: &str) -> Option<FlexWrap> {
    match name {
        "wrap" => Some(FlexWrap::Wrap),
        "nowrap" => Some(FlexWrap::NoWrap),
        "wrap-reverse" => Some(FlexWrap::WrapReverse),
        _ => None,
    }
}

fn align_items(name: &str) -> Option<AlignItems> {
    match name {
        "flex-start" => Some(AlignItems::FlexStart),
        "flex-end" => Some(AlignItems::FlexEnd),
        "center" => Some(AlignItems::Center),
        "stretch" => Some(AlignItems::Stretch),
        "baseline" => Some(AlignItems::Baseline),
        _ => None,
    }
}

fn justify_content(name: &str) -> Option<JustifyContent> {
    match name {
        "flex-start" => Some(JustifyContent::FlexStart),
        "flex-end" => Some(JustifyContent::FlexEnd),
        "center" => Some(JustifyContent::Center),
        "space-between" => Some(JustifyContent::SpaceBetween),
        "space-around" => Some(JustifyContent::SpaceAround),
        "space-evenly" => Some(JustifyContent::SpaceEvenly),
        _ => None,
    }
}

fn overflow(name: &str) -> Option<taffy::style::Overflow> {
    match name {
        "visible" => Some(taffy::style::Overflow::Visible),
        "hidden" => Some(taffy::style::Overflow::Hidden),
        "scroll" => Some(taffy::style::Overflow::Scroll),
        _ => None,
    }
}

/// Convert a native style record into a [`taffy::Style`].
///
/// Mapping summary:
/// - `display: none` -> `Display::None`, anything else -> `Display::Flex`
/// - `flexDirection` defaults to column (native boxes stack vertically)
/// - `margin` / `padding` shorthands first, then the per-side keys
/// - `top/right/bottom/left` -> `inset`
/// - `width/height`, `min*`, `max*` -> `size`, `min_size`, `max_size`
/// - `flexBasis/flexGrow/flexShrink/flexWrap`, alignment, `overflow`, `position`
pub fn resolve_native_style(style: &ComputedStyle) -> taffy::Style {
    let mut out = taffy::Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        ..Default::default()
    };

    if keyword(style, StyleKey::Display) == Some("none") {
        out.display = Display::None;
    }
    if keyword(style, StyleKey::Position) == Some("absolute") {
        out.position = Position::Absolute;
    }
    if let Some(direction) = keyword(style, StyleKey::FlexDirection).and_then(flex_direction) {
        out.flex_direction = direction;
    }
    if let Some(wrap) = keyword(style, StyleKey::FlexWrap).and_then(flex_wrap) {
        out.flex_wrap = wrap;
    }
    out.align_items = keyword(style, StyleKey::AlignItems).and_then(align_items);
    out.align_self = keyword(style, StyleKey::AlignSelf).and_then(align_items);
    out.justify_content = keyword(style, StyleKey::JustifyContent).and_then(justify_content);
    if let Some(o) = keyword(style, StyleKey::Overflow).and_then(overflow) {
        out.overflow = taffy::geometry::Point { x: o, y: o };
    }

    // Flex
    if let Some(grow) = number(style, StyleKey::FlexGrow) {
        out.flex_grow = grow;
    }
    if let Some(shrink) = number(style, StyleKey::FlexShrink) {
        out.flex_shrink = shrink;
    }
    if let Some(basis) = length(style, StyleKey::FlexBasis) {
        out.flex_basis = dimension(basis);
    }

    // Size
    if let Some(l) = length(style, StyleKey::Width) {
        out.size.width = dimension(l);
    }
    if let Some(l) = length(style, StyleKey::Height) {
        out.size.height = dimension(l);
    }
    if let Some(l) = length(style, StyleKey::MinWidth) {
        out.min_size.width = dimension(l);
    }
    if let Some(l) = length(style, StyleKey::MinHeight) {
        out.min_size.height = dimension(l);
    }
    if let Some(l) = length(style, StyleKey::MaxWidth) {
        out.max_size.width = dimension(l);
    }
    if let Some(l) = length(style, StyleKey::MaxHeight) {
        out.max_size.height = dimension(l);
    }

    // Margin
    if let Some(l) = length(style, StyleKey::Margin) {
        let m = length_percentage_auto(l);
        out.margin = taffy::geometry::Rect {
            top: m,
            right: m,
            bottom: m,
            left: m,
        };
    }
    if let Some(l) = length(style, StyleKey::MarginTop) {
        out.margin.top = length_percentage_auto(l);
    }
    if let Some(l) = length(style, StyleKey::MarginRight) {
        out.margin.right = length_percentage_auto(l);
    }
    if let Some(l) = length(style, StyleKey::MarginBottom) {
        out.margin.bottom = length_percentage_auto(l);
    }
    if let Some(l) = length(style, StyleKey::MarginLeft) {
        out.margin.left = length_percentage_auto(l);
    }

    // Padding
    if let Some(l) = length(style, StyleKey::Padding) {
        let p = length_percentage(l);
        out.padding = taffy::geometry::Rect {
            top: p,
            right: p,
            bottom: p,
            left: p,
        };
    }
    if let Some(l) = length(style, StyleKey::PaddingTop) {
        out.padding.top = length_percentage(l);
    }
    if let Some(l) = length(style, StyleKey::PaddingRight) {
        out.padding.right = length_percentage(l);
    }
    if let Some(l) = length(style, StyleKey::PaddingBottom) {
        out.padding.bottom = length_percentage(l);
    }
    if let Some(l) = length(style, StyleKey::PaddingLeft) {
        out.padding.left = length_percentage(l);
    }

    // Inset
    if let Some(l) = length(style, StyleKey::Top) {
        out.inset.top = length_percentage_auto(l);
    }
    if let Some(l) = length(style, StyleKey::Right) {
        out.inset.right = length_percentage_auto(l);
    }
    if let Some(l) = length(style, StyleKey::Bottom) {
        out.inset.bottom = length_percentage_auto(l);
    }
    if let Some(l) = length(style, StyleKey::Left) {
        out.inset.left = length_percentage_auto(l);
    }

    out
}
