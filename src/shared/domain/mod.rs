/// Shared domain concepts used by every catalog module
pub mod value_objects;

pub use value_objects::{EntityId, Slug};
