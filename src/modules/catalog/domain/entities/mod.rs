pub mod brand;
pub mod railway;
pub mod scale;

pub use brand::Brand;
pub use railway::Railway;
pub use scale::Scale;

use crate::shared::domain::Slug;

/// Catalog entities addressed by slug
pub trait CatalogEntity {
    fn slug(&self) -> &Slug;
}
