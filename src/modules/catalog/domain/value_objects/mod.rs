//! Catalog vocabularies

pub mod cat;
pub mod category;
pub mod era;
pub mod power_method;

pub use cat::Cat;
pub use category::Category;
pub use era::Era;
pub use power_method::PowerMethod;
