pub mod rolling_stock;

pub use rolling_stock::{fields, RollingStock};
