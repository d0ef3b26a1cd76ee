//! Box component and the render context it draws from.

pub mod boxed;
pub mod context;

pub use boxed::{compute_box, render_box, BoxProps, Element};
pub use context::RenderContext;
