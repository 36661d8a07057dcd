pub mod catalog_lookup;

pub use catalog_lookup::CatalogLookup;

#[cfg(test)]
pub use catalog_lookup::MockCatalogLookup;
