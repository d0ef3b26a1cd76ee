//! Layout bridge: length parsing and native style -> taffy conversion.

pub mod length;
pub mod resolve;

pub use length::{parse_length, Length};
pub use resolve::resolve_native_style;
