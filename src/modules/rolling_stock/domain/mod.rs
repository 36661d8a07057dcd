pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{fields, RollingStock};
pub use repositories::RollingStockRepository;
pub use value_objects::{CatalogRef, ResolvedEntities, SearchCriteria, SearchCriteriaBuilder};
