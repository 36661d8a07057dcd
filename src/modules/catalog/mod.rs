//! Catalog reference data: brands, railways, scales and the fixed
//! vocabularies (categories, eras, power methods) used to classify models.
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::{Brand, Cat, CatalogEntity, CatalogLookup, Category, Era, PowerMethod, Railway, Scale};
pub use infrastructure::CatalogLookupImpl;
