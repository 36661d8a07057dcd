pub mod catalog_ref;
pub mod search_criteria;

pub use catalog_ref::CatalogRef;
pub use search_criteria::{ResolvedEntities, SearchCriteria, SearchCriteriaBuilder};
