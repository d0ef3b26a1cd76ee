//! Native renderer: a registry of equal-by-value style records.
//!
//! Every distinct style shape is stored once and addressed by a
//! [`NativeStyleId`]; rendering an equal style again returns the same id.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use slotmap::{new_key_type, SlotMap};

use crate::layout::resolve::resolve_native_style;
use crate::render::renderer::{RenderedStyle, StyleRenderer};
use crate::render::target::RenderTarget;
use crate::style::computed::{ComputedStyle, StyleShape};

new_key_type! {
    /// Identifier of a registered native style record.
    pub struct NativeStyleId;
}

#[derive(Debug, Default)]
struct NativeRegistry {
    records: SlotMap<NativeStyleId, Arc<ComputedStyle>>,
    by_shape: HashMap<StyleShape, NativeStyleId>,
}

/// Native-target renderer.
#[derive(Debug, Default)]
pub struct NativeRenderer {
    registry: RwLock<NativeRegistry>,
}

impl NativeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style record registered under `id`.
    pub fn get(&self, id: NativeStyleId) -> Option<Arc<ComputedStyle>> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .get(id)
            .cloned()
    }

    /// Number of distinct registered records.
    pub fn len(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The flexbox layout record for a registered style.
    pub fn layout_style(&self, id: NativeStyleId) -> Option<taffy::Style> {
        self.get(id).map(|style| resolve_native_style(&style))
    }

    fn register(&self, style: &ComputedStyle) -> NativeStyleId {
        let shape = style.shape();
        {
            let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(id) = registry.by_shape.get(&shape) {
                return *id;
            }
        }

        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(id) = registry.by_shape.get(&shape) {
            return *id;
        }
        let id = registry.records.insert(Arc::new(style.clone()));
        tracing::debug!(?id, keys = style.len(), "registered native style");
        registry.by_shape.insert(shape, id);
        id
    }
}

impl StyleRenderer for NativeRenderer {
    fn target(&self) -> RenderTarget {
        RenderTarget::Native
    }

    fn render_rule(&self, style: &ComputedStyle) -> RenderedStyle {
        RenderedStyle::Native(self.register(style))
    }
}
