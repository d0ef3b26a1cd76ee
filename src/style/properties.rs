//! The closed layout property schema and the computed style key set.
//!
//! Input properties ([`LayoutProp`]) fall into three disjoint categories:
//! rhythm-scalable box-model properties, computed properties, and plain value
//! properties. Anything else is a leftover prop.
//!
//! Output keys ([`StyleKey`]) never include compound names such as
//! `marginHorizontal`; those expand into their directional pair.

use std::fmt;

/// Category of a recognized layout property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropCategory {
    /// Accepts a raw length or a numeric rhythm unit.
    BoxModel,
    /// Needs an expansion rule (`flex`, `backgroundColor`).
    Computed,
    /// Copied verbatim when defined.
    Value,
}

macro_rules! layout_props {
    ($($variant:ident => $name:literal, $category:ident;)*) => {
        /// A recognized layout property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum LayoutProp {
            $($variant,)*
        }

        impl LayoutProp {
            /// Every recognized property.
            pub const ALL: &'static [LayoutProp] = &[$(LayoutProp::$variant,)*];

            /// Property name as written by callers.
            pub fn name(self) -> &'static str {
                match self {
                    $(LayoutProp::$variant => $name,)*
                }
            }

            /// Look up a property by name. `None` means the name is a leftover prop.
            pub fn from_name(name: &str) -> Option<LayoutProp> {
                match name {
                    $($name => Some(LayoutProp::$variant),)*
                    _ => None,
                }
            }

            pub fn category(self) -> PropCategory {
                match self {
                    $(LayoutProp::$variant => PropCategory::$category,)*
                }
            }
        }
    };
}

layout_props! {
    Margin => "margin", BoxModel;
    MarginHorizontal => "marginHorizontal", BoxModel;
    MarginVertical => "marginVertical", BoxModel;
    MarginBottom => "marginBottom", BoxModel;
    MarginLeft => "marginLeft", BoxModel;
    MarginRight => "marginRight", BoxModel;
    MarginTop => "marginTop", BoxModel;
    Padding => "padding", BoxModel;
    PaddingHorizontal => "paddingHorizontal", BoxModel;
    PaddingVertical => "paddingVertical", BoxModel;
    PaddingBottom => "paddingBottom", BoxModel;
    PaddingLeft => "paddingLeft", BoxModel;
    PaddingRight => "paddingRight", BoxModel;
    PaddingTop => "paddingTop", BoxModel;
    Height => "height", BoxModel;
    MaxHeight => "maxHeight", BoxModel;
    MaxWidth => "maxWidth", BoxModel;
    MinHeight => "minHeight", BoxModel;
    MinWidth => "minWidth", BoxModel;
    Width => "width", BoxModel;
    Bottom => "bottom", BoxModel;
    Left => "left", BoxModel;
    Right => "right", BoxModel;
    Top => "top", BoxModel;

    Flex => "flex", Computed;
    BackgroundColor => "backgroundColor", Computed;

    AlignItems => "alignItems", Value;
    AlignSelf => "alignSelf", Value;
    FlexBasis => "flexBasis", Value;
    FlexDirection => "flexDirection", Value;
    FlexGrow => "flexGrow", Value;
    FlexShrink => "flexShrink", Value;
    FlexWrap => "flexWrap", Value;
    JustifyContent => "justifyContent", Value;
    Opacity => "opacity", Value;
    Overflow => "overflow", Value;
    Position => "position", Value;
    ZIndex => "zIndex", Value;
}

/// Box-model properties in processing order.
///
/// Shorthand first, then the two-sided compounds, then single directions, so a
/// more specific property always overwrites a broader one.
pub const BOX_MODEL_ORDER: [LayoutProp; 24] = [
    LayoutProp::Margin,
    LayoutProp::MarginHorizontal,
    LayoutProp::MarginVertical,
    LayoutProp::MarginBottom,
    LayoutProp::MarginLeft,
    LayoutProp::MarginRight,
    LayoutProp::MarginTop,
    LayoutProp::Padding,
    LayoutProp::PaddingHorizontal,
    LayoutProp::PaddingVertical,
    LayoutProp::PaddingBottom,
    LayoutProp::PaddingLeft,
    LayoutProp::PaddingRight,
    LayoutProp::PaddingTop,
    LayoutProp::Height,
    LayoutProp::MaxHeight,
    LayoutProp::MaxWidth,
    LayoutProp::MinHeight,
    LayoutProp::MinWidth,
    LayoutProp::Width,
    LayoutProp::Bottom,
    LayoutProp::Left,
    LayoutProp::Right,
    LayoutProp::Top,
];

/// Value properties in processing order.
pub const VALUE_PROPS: [LayoutProp; 12] = [
    LayoutProp::AlignItems,
    LayoutProp::AlignSelf,
    LayoutProp::FlexBasis,
    LayoutProp::FlexDirection,
    LayoutProp::FlexGrow,
    LayoutProp::FlexShrink,
    LayoutProp::FlexWrap,
    LayoutProp::JustifyContent,
    LayoutProp::Opacity,
    LayoutProp::Overflow,
    LayoutProp::Position,
    LayoutProp::ZIndex,
];

impl LayoutProp {
    /// The computed style keys a box-model or value property writes to.
    ///
    /// Compound properties fan out to two directional keys. Computed
    /// properties (`flex`, `backgroundColor`) have bespoke rules and return
    /// an empty slice.
    pub fn style_keys(self) -> &'static [StyleKey] {
        use StyleKey as K;
        match self {
            LayoutProp::Margin => &[K::Margin],
            LayoutProp::MarginHorizontal => &[K::MarginLeft, K::MarginRight],
            LayoutProp::MarginVertical => &[K::MarginTop, K::MarginBottom],
            LayoutProp::MarginBottom => &[K::MarginBottom],
            LayoutProp::MarginLeft => &[K::MarginLeft],
            LayoutProp::MarginRight => &[K::MarginRight],
            LayoutProp::MarginTop => &[K::MarginTop],
            LayoutProp::Padding => &[K::Padding],
            LayoutProp::PaddingHorizontal => &[K::PaddingLeft, K::PaddingRight],
            LayoutProp::PaddingVertical => &[K::PaddingTop, K::PaddingBottom],
            LayoutProp::PaddingBottom => &[K::PaddingBottom],
            LayoutProp::PaddingLeft => &[K::PaddingLeft],
            LayoutProp::PaddingRight => &[K::PaddingRight],
            LayoutProp::PaddingTop => &[K::PaddingTop],
            LayoutProp::Height => &[K::Height],
            LayoutProp::MaxHeight => &[K::MaxHeight],
            LayoutProp::MaxWidth => &[K::MaxWidth],
            LayoutProp::MinHeight => &[K::MinHeight],
            LayoutProp::MinWidth => &[K::MinWidth],
            LayoutProp::Width => &[K::Width],
            LayoutProp::Bottom => &[K::Bottom],
            LayoutProp::Left => &[K::Left],
            LayoutProp::Right => &[K::Right],
            LayoutProp::Top => &[K::Top],
            LayoutProp::Flex | LayoutProp::BackgroundColor => &[],
            LayoutProp::AlignItems => &[K::AlignItems],
            LayoutProp::AlignSelf => &[K::AlignSelf],
            LayoutProp::FlexBasis => &[K::FlexBasis],
            LayoutProp::FlexDirection => &[K::FlexDirection],
            LayoutProp::FlexGrow => &[K::FlexGrow],
            LayoutProp::FlexShrink => &[K::FlexShrink],
            LayoutProp::FlexWrap => &[K::FlexWrap],
            LayoutProp::JustifyContent => &[K::JustifyContent],
            LayoutProp::Opacity => &[K::Opacity],
            LayoutProp::Overflow => &[K::Overflow],
            LayoutProp::Position => &[K::Position],
            LayoutProp::ZIndex => &[K::ZIndex],
        }
    }

    /// Whether this property expands into two directional keys.
    pub fn is_compound(self) -> bool {
        self.style_keys().len() > 1
    }
}

/// A key in a computed style.
///
/// Declaration order defines iteration order of [`ComputedStyle`](super::computed::ComputedStyle).
/// `Custom` carries keys introduced by caller style overrides that the engine
/// does not model.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    Display,
    FlexDirection,
    Position,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    Height,
    Width,
    MinHeight,
    MinWidth,
    MaxHeight,
    MaxWidth,
    Top,
    Right,
    Bottom,
    Left,
    FlexBasis,
    FlexGrow,
    FlexShrink,
    FlexWrap,
    AlignItems,
    AlignSelf,
    JustifyContent,
    Opacity,
    Overflow,
    ZIndex,
    BackgroundColor,
    Custom(String),
}

const NAMED_KEYS: &[(StyleKey, &str)] = &[
    (StyleKey::Display, "display"),
    (StyleKey::FlexDirection, "flexDirection"),
    (StyleKey::Position, "position"),
    (StyleKey::Margin, "margin"),
    (StyleKey::MarginTop, "marginTop"),
    (StyleKey::MarginRight, "marginRight"),
    (StyleKey::MarginBottom, "marginBottom"),
    (StyleKey::MarginLeft, "marginLeft"),
    (StyleKey::Padding, "padding"),
    (StyleKey::PaddingTop, "paddingTop"),
    (StyleKey::PaddingRight, "paddingRight"),
    (StyleKey::PaddingBottom, "paddingBottom"),
    (StyleKey::PaddingLeft, "paddingLeft"),
    (StyleKey::Height, "height"),
    (StyleKey::Width, "width"),
    (StyleKey::MinHeight, "minHeight"),
    (StyleKey::MinWidth, "minWidth"),
    (StyleKey::MaxHeight, "maxHeight"),
    (StyleKey::MaxWidth, "maxWidth"),
    (StyleKey::Top, "top"),
    (StyleKey::Right, "right"),
    (StyleKey::Bottom, "bottom"),
    (StyleKey::Left, "left"),
    (StyleKey::FlexBasis, "flexBasis"),
    (StyleKey::FlexGrow, "flexGrow"),
    (StyleKey::FlexShrink, "flexShrink"),
    (StyleKey::FlexWrap, "flexWrap"),
    (StyleKey::AlignItems, "alignItems"),
    (StyleKey::AlignSelf, "alignSelf"),
    (StyleKey::JustifyContent, "justifyContent"),
    (StyleKey::Opacity, "opacity"),
    (StyleKey::Overflow, "overflow"),
    (StyleKey::ZIndex, "zIndex"),
    (StyleKey::BackgroundColor, "backgroundColor"),
];

/// Unitless properties a caller style override may introduce as
/// [`StyleKey::Custom`] keys. The engine's own keys are matched in
/// [`StyleKey::is_unitless`].
const UNITLESS_OVERRIDE_KEYS: &[&str] = &["flex", "fontWeight", "lineHeight", "order", "zoom"];

impl StyleKey {
    /// Map a camelCase key name to a key. Unknown names become `Custom`.
    pub fn from_name(name: &str) -> StyleKey {
        NAMED_KEYS
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(k, _)| k.clone())
            .unwrap_or_else(|| StyleKey::Custom(name.to_owned()))
    }

    /// camelCase name, as native style records spell it.
    pub fn name(&self) -> &str {
        match self {
            StyleKey::Custom(name) => name,
            known => NAMED_KEYS
                .iter()
                .find(|(k, _)| k == known)
                .map(|(_, n)| *n)
                .unwrap_or_default(),
        }
    }

    /// kebab-case name, as stylesheets spell it.
    pub fn css_name(&self) -> String {
        let name = self.name();
        let mut out = String::with_capacity(name.len() + 4);
        for ch in name.chars() {
            if ch.is_ascii_uppercase() {
                out.push('-');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Whether bare numbers for this key are unitless in stylesheets.
    pub fn is_unitless(&self) -> bool {
        match self {
            StyleKey::FlexGrow | StyleKey::FlexShrink | StyleKey::Opacity | StyleKey::ZIndex => {
                true
            }
            StyleKey::Custom(name) => UNITLESS_OVERRIDE_KEYS.contains(&name.as_str()),
            _ => false,
        }
    }

    /// Per-side longhands of a shorthand key, top/right/bottom/left.
    pub fn sides(&self) -> Option<&'static [StyleKey]> {
        use StyleKey as K;
        match self {
            K::Margin => Some(&[K::MarginTop, K::MarginRight, K::MarginBottom, K::MarginLeft]),
            K::Padding => Some(&[K::PaddingTop, K::PaddingRight, K::PaddingBottom, K::PaddingLeft]),
            _ => None,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
