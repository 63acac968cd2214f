//! Small value types shared between the core logic and the components.

pub mod selection;
pub mod transform;

pub use selection::{CategoryFilter, LightboxState, TypeFilter};
pub use transform::ViewTransform;
