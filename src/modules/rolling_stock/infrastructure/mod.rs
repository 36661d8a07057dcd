pub mod query_translator;
pub mod rolling_stock_repository_impl;

pub use query_translator::RollingStockQueryTranslator;
pub use rolling_stock_repository_impl::{RollingStockRepositoryImpl, ROLLING_STOCKS_COLLECTION};
