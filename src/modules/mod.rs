// Bounded contexts
pub mod catalog; // Brands, railways, scales and classification vocabularies
pub mod rolling_stock; // Rolling stock search
