pub mod criteria_resolver;
pub mod use_cases;

pub use criteria_resolver::CriteriaResolver;
pub use use_cases::{SearchRollingStocksHandler, SearchRollingStocksQuery, SearchRollingStocksResult};
