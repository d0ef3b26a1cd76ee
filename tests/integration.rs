//! Integration tests for rhythm-box.
//!
//! These tests exercise the public API from outside the crate: configuration,
//! theme selection, box rendering on both targets and style deduplication.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rhythm_box::component::{compute_box, render_box, BoxProps, RenderContext};
use rhythm_box::config::StyleConfig;
use rhythm_box::layout::resolve_native_style;
use rhythm_box::render::{DocumentRenderer, NativeRenderer, StyleOverride, StyleRenderer};
use rhythm_box::style::{resolve_box_style, ComputedStyle, Handler, Props, StyleError, StyleValue};
use rhythm_box::theme::{Rhythm, Theme, ThemeRegistry};
use taffy::prelude::*;

fn default_theme() -> Theme {
    Theme::builder()
        .colors([("bg", "white"), ("brand", "#123456"), ("text", "black")])
        .rhythm(Rhythm::linear(8.0))
        .build()
        .unwrap()
}

fn dark_theme() -> Theme {
    Theme::builder()
        .colors([("bg", "black"), ("brand", "#654321"), ("text", "white")])
        .rhythm(Rhythm::linear(8.0))
        .build()
        .unwrap()
}

fn registry() -> ThemeRegistry {
    ThemeRegistry::new("defaultTheme", default_theme()).with_theme("darkTheme", dark_theme())
}

fn scenario_props(on_click: &Handler) -> BoxProps {
    BoxProps::new()
        .with("paddingHorizontal", 2)
        .with("paddingTop", 1)
        .with("flex", 1)
        .with("backgroundColor", "bg")
        .with("onClick", on_click.clone())
}

// ---------------------------------------------------------------------------
// Document target
// ---------------------------------------------------------------------------

#[test]
fn test_document_scenario_stylesheet() {
    let renderer = Arc::new(DocumentRenderer::new());
    let ctx = RenderContext::new(renderer.clone())
        .with_theme(registry().select(None))
        .with_primitive("div");
    let on_click = Handler::new(|| {});

    let element = render_box(&ctx, scenario_props(&on_click)).unwrap();

    assert_eq!(element.primitive.name(), "div");
    assert_eq!(element.props, Props::new().with("onClick", on_click));
    assert_eq!(element.style.class_name(), Some("a b c d e f g h i j"));
    insta::assert_snapshot!(renderer.css_text(), @r"
    .a{display:flex}
    .b{flex-direction:column}
    .c{position:relative}
    .d{padding-top:8px}
    .e{padding-right:16px}
    .f{padding-left:16px}
    .g{flex-basis:auto}
    .h{flex-grow:1}
    .i{flex-shrink:1}
    .j{background-color:white}
    ");
}

#[test]
fn test_document_unknown_color_emits_no_rule() {
    let renderer = Arc::new(DocumentRenderer::new());
    let ctx = RenderContext::new(renderer.clone())
        .with_theme(Arc::new(default_theme()))
        .with_primitive("div");

    let element = render_box(&ctx, BoxProps::new().with("backgroundColor", "unknown")).unwrap();

    assert_eq!(element.style.class_name(), Some("a b c"));
    assert!(!renderer.css_text().contains("background"));
}

#[test]
fn test_document_rem_rhythm() {
    let theme = Theme::builder().rhythm(Rhythm::rem(1.5)).build().unwrap();
    let renderer = Arc::new(DocumentRenderer::new());
    let ctx = RenderContext::new(renderer.clone())
        .with_theme(Arc::new(theme))
        .with_primitive("div");

    render_box(&ctx, BoxProps::new().with("marginVertical", 2)).unwrap();

    let css = renderer.css_text();
    assert!(css.contains("{margin-top:3rem}"));
    assert!(css.contains("{margin-bottom:3rem}"));
}

#[test]
fn test_document_side_wins_over_later_shorthand_rule() {
    let renderer = Arc::new(DocumentRenderer::new());
    let ctx = RenderContext::new(renderer.clone())
        .with_theme(Arc::new(default_theme()))
        .with_primitive("div");

    render_box(&ctx, BoxProps::new().with("marginLeft", 5)).unwrap();
    let element = render_box(&ctx, BoxProps::new().with("margin", 2).with("marginLeft", 5)).unwrap();

    let css = renderer.css_text();
    let margin_left: Vec<&str> = element
        .style
        .class_name()
        .unwrap()
        .split(' ')
        .filter_map(|class| {
            let open = format!(".{class}{{");
            css.lines().find_map(|line| line.strip_prefix(open.as_str()))
        })
        .filter(|declaration| declaration.starts_with("margin-left:"))
        .collect();
    assert_eq!(margin_left, vec!["margin-left:40px}"]);
    assert!(!css.contains("{margin:"));
}

// ---------------------------------------------------------------------------
// Native target
// ---------------------------------------------------------------------------

#[test]
fn test_native_scenario_record() {
    let renderer = Arc::new(NativeRenderer::new());
    let ctx = RenderContext::new(renderer.clone())
        .with_theme(registry().select(None))
        .with_primitive("View");
    let on_click = Handler::new(|| {});

    let element = render_box(&ctx, scenario_props(&on_click)).unwrap();
    let record = renderer.get(element.style.native_id().unwrap()).unwrap();

    let expected = ComputedStyle::new()
        .with("flexDirection", "column")
        .with("position", "relative")
        .with("paddingLeft", 16.0)
        .with("paddingRight", 16.0)
        .with("paddingTop", 8.0)
        .with("flexBasis", "auto")
        .with("flexGrow", 1.0)
        .with("flexShrink", 1.0)
        .with("backgroundColor", "white");
    assert_eq!(*record, expected);
    assert_eq!(element.props, Props::new().with("onClick", on_click));
}

#[test]
fn test_native_layout_from_record() {
    let renderer = Arc::new(NativeRenderer::new());
    let ctx = RenderContext::new(renderer.clone())
        .with_theme(Arc::new(default_theme()))
        .with_primitive("View");

    let element = render_box(
        &ctx,
        BoxProps::new()
            .with("padding", 1)
            .with("paddingLeft", 3)
            .with("width", "50%")
            .with("flex", 2),
    )
    .unwrap();
    let id = element.style.native_id().unwrap();
    let layout = renderer.layout_style(id).unwrap();

    assert_eq!(layout.flex_grow, 2.0);
    assert_eq!(layout.flex_shrink, 1.0);
    assert_eq!(layout.padding.top, LengthPercentage::from_length(8.0));
    assert_eq!(layout.padding.left, LengthPercentage::from_length(24.0));
    assert_eq!(layout.size.width, Dimension::from_percent(0.5));
    assert_eq!(layout, resolve_native_style(&renderer.get(id).unwrap()));
}

// ---------------------------------------------------------------------------
// Deduplication
// ---------------------------------------------------------------------------

#[test]
fn test_independent_resolutions_share_identifier() {
    let theme = default_theme();
    for renderer in [
        Arc::new(DocumentRenderer::new()) as Arc<dyn StyleRenderer>,
        Arc::new(NativeRenderer::new()) as Arc<dyn StyleRenderer>,
    ] {
        let props = || Props::new().with("margin", 2).with("marginLeft", 5);
        let (a, _) = resolve_box_style(&theme, renderer.target(), props()).unwrap();
        let (b, _) = resolve_box_style(&theme, renderer.target(), props()).unwrap();
        assert_eq!(renderer.render_rule(&a), renderer.render_rule(&b));
    }
}

#[test]
fn test_override_producing_same_shape_dedupes() {
    let renderer = Arc::new(NativeRenderer::new());
    let ctx = RenderContext::new(renderer.clone())
        .with_theme(Arc::new(default_theme()))
        .with_primitive("View");

    let via_prop = render_box(&ctx, BoxProps::new().with("opacity", 0.5)).unwrap();
    let via_override = render_box(
        &ctx,
        BoxProps::new().style(StyleOverride::fixed(ComputedStyle::new().with("opacity", 0.5))),
    )
    .unwrap();

    assert_eq!(via_prop.style, via_override.style);
    assert_eq!(renderer.len(), 1);
}

// ---------------------------------------------------------------------------
// Themes and configuration
// ---------------------------------------------------------------------------

#[test]
fn test_theme_switch_changes_colors_only() {
    let root = StyleConfig::native().into_context(&registry());
    let dark = root.with_theme(registry().select(Some("darkTheme")));
    let props = || BoxProps::new().with("backgroundColor", "brand").with("padding", 1);

    let (light_style, _) = compute_box(&root, props()).unwrap();
    let (dark_style, _) = compute_box(&dark, props()).unwrap();

    assert_eq!(light_style.get_named("backgroundColor"), Some(&StyleValue::from("#123456")));
    assert_eq!(dark_style.get_named("backgroundColor"), Some(&StyleValue::from("#654321")));
    assert_eq!(light_style.get_named("padding"), dark_style.get_named("padding"));
}

#[test]
fn test_config_built_document_context() {
    let ctx = StyleConfig::document()
        .with_theme("darkTheme")
        .with_class_prefix("rb-")
        .into_context(&registry());

    let element = render_box(&ctx, BoxProps::new().with("backgroundColor", "text")).unwrap();

    assert_eq!(element.primitive.name(), "div");
    assert_eq!(element.style.class_name(), Some("rb-a rb-b rb-c rb-d"));
}

#[test]
fn test_style_override_sees_active_theme() {
    let ctx = StyleConfig::native()
        .with_theme("darkTheme")
        .into_context(&registry());
    let (style, _) = compute_box(
        &ctx,
        BoxProps::new().style(StyleOverride::new(|theme| {
            ComputedStyle::new().with("color", theme.color("text").unwrap_or_default())
        })),
    )
    .unwrap();
    assert_eq!(style.get_named("color"), Some(&StyleValue::from("white")));
}

#[test]
fn test_configuration_errors_propagate() {
    let no_primitive = StyleConfig::native()
        .with_default_primitive(None)
        .into_context(&registry());
    assert_eq!(
        render_box(&no_primitive, BoxProps::new()).unwrap_err(),
        StyleError::MissingPrimitive
    );
    assert!(render_box(&no_primitive, BoxProps::new().render_as("Text")).is_ok());

    let no_theme = RenderContext::new(Arc::new(NativeRenderer::new())).with_primitive("View");
    assert_eq!(
        render_box(&no_theme, BoxProps::new()).unwrap_err(),
        StyleError::MissingTheme
    );
}

#[test]
fn test_recognized_props_never_leak() {
    let ctx = StyleConfig::native().into_context(&registry());
    let mut props = BoxProps::new();
    for prop in rhythm_box::style::LayoutProp::ALL {
        props = props.with(prop.name(), "");
    }
    let element = render_box(&ctx, props.with("nativeID", "root")).unwrap();
    assert_eq!(element.props, Props::new().with("nativeID", "root"));
}
