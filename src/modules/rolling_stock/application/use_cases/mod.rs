pub mod search_rolling_stocks;

pub use search_rolling_stocks::{
    SearchRollingStocksHandler, SearchRollingStocksQuery, SearchRollingStocksResult,
};
