pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Brand, CatalogEntity, Railway, Scale};
pub use repositories::CatalogLookup;
pub use value_objects::{Cat, Category, Era, PowerMethod};
