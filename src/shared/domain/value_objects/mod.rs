mod entity_id;
mod slug;

pub use entity_id::EntityId;
pub use slug::Slug;
