//! Rolling stock search: criteria, query translation and paged results.
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    CriteriaResolver, SearchRollingStocksHandler, SearchRollingStocksQuery,
    SearchRollingStocksResult,
};
pub use domain::{
    CatalogRef, ResolvedEntities, RollingStock, RollingStockRepository, SearchCriteria,
    SearchCriteriaBuilder,
};
pub use infrastructure::{RollingStockQueryTranslator, RollingStockRepositoryImpl};
