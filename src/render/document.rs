//! Document renderer: one atomic class per declaration.
//!
//! Each distinct `property:value` declaration gets a short class name the
//! first time it is seen (`a`, `b`, ..., `z`, `aa`, ...). A style renders to
//! the space-separated classes of its declarations, so equal styles always
//! yield the same class string and share the same rules.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::render::renderer::{RenderedStyle, StyleRenderer};
use crate::render::target::RenderTarget;
use crate::style::computed::ComputedStyle;

#[derive(Debug, Default)]
struct AtomicCache {
    /// declaration -> class name
    classes: HashMap<String, String>,
    /// (class name, declaration) in registration order
    rules: Vec<(String, String)>,
}

/// Stylesheet-target renderer with an append-only atomic rule cache.
#[derive(Debug, Default)]
pub struct DocumentRenderer {
    prefix: String,
    cache: RwLock<AtomicCache>,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every generated class name, e.g. `"x-"` → `x-a`, `x-b`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            cache: RwLock::default(),
        }
    }

    /// Number of registered atomic rules.
    pub fn rule_count(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rules
            .len()
    }

    /// All registered rules as stylesheet text, one rule per line.
    pub fn css_text(&self) -> String {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache
            .rules
            .iter()
            .map(|(class, declaration)| format!(".{class}{{{declaration}}}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn class_for(&self, declaration: &str) -> String {
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(class) = cache.classes.get(declaration) {
                return class.clone();
            }
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have registered it between the two locks.
        if let Some(class) = cache.classes.get(declaration) {
            return class.clone();
        }
        let class = format!("{}{}", self.prefix, atomic_name(cache.rules.len()));
        tracing::debug!(%class, declaration, "registered atomic rule");
        cache
            .classes
            .insert(declaration.to_owned(), class.clone());
        cache.rules.push((class.clone(), declaration.to_owned()));
        class
    }
}

impl StyleRenderer for DocumentRenderer {
    fn target(&self) -> RenderTarget {
        RenderTarget::Document
    }

    fn render_rule(&self, style: &ComputedStyle) -> RenderedStyle {
        let classes: Vec<String> = style
            .declarations()
            .iter()
            .map(|declaration| self.class_for(declaration))
            .collect();
        RenderedStyle::ClassName(classes.join(" "))
    }
}

/// Bijective base-26 name for the `index`-th rule: 0 → `a`, 25 → `z`, 26 → `aa`.
fn atomic_name(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        n -= 1;
        out.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn atomic_names() {
        assert_eq!(atomic_name(0), "a");
        assert_eq!(atomic_name(25), "z");
        assert_eq!(atomic_name(26), "aa");
        assert_eq!(atomic_name(27), "ab");
        assert_eq!(atomic_name(26 + 26 * 26), "aaa");
    }

    #[test]
    fn one_class_per_declaration() {
        let renderer = DocumentRenderer::new();
        let style = ComputedStyle::new()
            .with("display", "flex")
            .with("paddingTop", 8.0);
        let rendered = renderer.render_rule(&style);
        assert_eq!(rendered, RenderedStyle::ClassName("a b".into()));
        assert_eq!(renderer.rule_count(), 2);
    }

    #[test]
    fn identical_styles_share_classes() {
        let renderer = DocumentRenderer::new();
        let a = ComputedStyle::new().with("width", 10.0).with("height", 20.0);
        let b = ComputedStyle::new().with("height", 20.0).with("width", 10.0);
        assert_eq!(renderer.render_rule(&a), renderer.render_rule(&b));
        assert_eq!(renderer.rule_count(), 2);
    }

    #[test]
    fn overlapping_styles_reuse_declarations() {
        let renderer = DocumentRenderer::new();
        let a = ComputedStyle::new().with("width", 10.0).with("height", 20.0);
        let b = ComputedStyle::new().with("width", 10.0).with("height", 30.0);
        assert_eq!(renderer.render_rule(&a).class_name(), Some("a b"));
        // height sorts before width
        assert_eq!(renderer.render_rule(&b).class_name(), Some("c b"));
        assert_eq!(renderer.rule_count(), 3);
    }

    /// Declarations behind the classes of `rendered`, in class order.
    fn applied(renderer: &DocumentRenderer, rendered: &RenderedStyle) -> Vec<String> {
        let css = renderer.css_text();
        rendered
            .class_name()
            .unwrap_or_default()
            .split(' ')
            .filter_map(|class| {
                let open = format!(".{class}{{");
                css.lines()
                    .find_map(|line| line.strip_prefix(open.as_str()))
                    .map(|rest| rest.trim_end_matches('}').to_string())
            })
            .collect()
    }

    #[test]
    fn side_registered_first_still_beats_shorthand() {
        let renderer = DocumentRenderer::new();
        renderer.render_rule(&ComputedStyle::new().with("marginLeft", 40.0));
        let rendered = renderer.render_rule(
            &ComputedStyle::new()
                .with("margin", 16.0)
                .with("marginLeft", 40.0),
        );
        assert_eq!(rendered.class_name(), Some("b c d a"));
        assert_eq!(
            applied(&renderer, &rendered),
            vec![
                "margin-top:16px",
                "margin-right:16px",
                "margin-bottom:16px",
                "margin-left:40px",
            ]
        );
        assert!(!renderer.css_text().contains("{margin:"));
    }

    #[test]
    fn unitless_override_keys_skip_px() {
        let renderer = DocumentRenderer::new();
        renderer.render_rule(
            &ComputedStyle::new()
                .with("fontWeight", 700.0)
                .with("borderWidth", 2.0),
        );
        assert_eq!(renderer.css_text(), ".a{border-width:2px}\n.b{font-weight:700}");
    }

    #[test]
    fn prefix_is_applied() {
        let renderer = DocumentRenderer::with_prefix("x-");
        let rendered = renderer.render_rule(&ComputedStyle::new().with("opacity", 0.5));
        assert_eq!(rendered.class_name(), Some("x-a"));
        assert_eq!(renderer.css_text(), ".x-a{opacity:0.5}");
    }

    #[test]
    fn concurrent_registration_is_idempotent() {
        let renderer = Arc::new(DocumentRenderer::new());
        let style = ComputedStyle::new()
            .with("marginLeft", 16.0)
            .with("marginRight", 16.0)
            .with("flexGrow", 1.0);
        let results: Vec<RenderedStyle> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| renderer.render_rule(&style)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(renderer.rule_count(), 3);
    }
}
