//! Renderers: targets, primitive selection, document and native adapters.

pub mod document;
pub mod native;
pub mod renderer;
pub mod target;

pub use document::DocumentRenderer;
pub use native::{NativeRenderer, NativeStyleId};
pub use renderer::{render_style, RenderedStyle, StyleOverride, StyleRenderer};
pub use target::{select_primitive, Primitive, RenderTarget};
