mod handler;
mod query;
mod result;

pub use handler::SearchRollingStocksHandler;
pub use query::SearchRollingStocksQuery;
pub use result::SearchRollingStocksResult;
