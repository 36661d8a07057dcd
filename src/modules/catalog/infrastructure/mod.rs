pub mod catalog_lookup_impl;

pub use catalog_lookup_impl::{
    CatalogLookupImpl, BRANDS_COLLECTION, RAILWAYS_COLLECTION, SCALES_COLLECTION,
};
