pub mod rolling_stock_repository;

pub use rolling_stock_repository::RollingStockRepository;

#[cfg(test)]
pub use rolling_stock_repository::MockRollingStockRepository;
