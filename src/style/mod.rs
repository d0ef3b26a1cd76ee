//! Style engine: property schema, values, resolution.

pub mod computed;
pub mod error;
pub mod properties;
pub mod props;
pub mod resolve;
pub mod value;

pub use computed::{ComputedStyle, StyleShape};
pub use error::StyleError;
pub use properties::{LayoutProp, PropCategory, StyleKey};
pub use props::Props;
pub use resolve::resolve_box_style;
pub use value::{Handler, PropValue, StyleValue};
