use std::fmt;

use crate::modules::catalog::domain::{Brand, CatalogEntity, Railway, Scale};
use crate::shared::domain::Slug;
use crate::shared::errors::{AppError, AppResult};

/// Reference to a brand, railway or scale inside search criteria.
///
/// Starts out as a bare slug and may later carry the entity it resolved to.
/// Once resolved it stays resolved. Two references are equal when their slugs
/// are equal, whichever state they are in.
#[derive(Debug, Clone)]
pub enum CatalogRef<T> {
    BySlug(Slug),
    Resolved(T),
}

impl<T: CatalogEntity> CatalogRef<T> {
    pub fn slug(&self) -> &Slug {
        match self {
            CatalogRef::BySlug(slug) => slug,
            CatalogRef::Resolved(entity) => entity.slug(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, CatalogRef::Resolved(_))
    }

    pub fn entity(&self) -> Option<&T> {
        match self {
            CatalogRef::BySlug(_) => None,
            CatalogRef::Resolved(entity) => Some(entity),
        }
    }

    /// Attaches the entity found for this slug
    pub fn resolve(self, entity: T) -> AppResult<Self> {
        if entity.slug() != self.slug() {
            return Err(AppError::InvalidInput(format!(
                "Cannot resolve '{}' with entity '{}'",
                self.slug(),
                entity.slug()
            )));
        }
        Ok(CatalogRef::Resolved(entity))
    }
}

impl<T: CatalogEntity> PartialEq for CatalogRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slug() == other.slug()
    }
}

impl<T: CatalogEntity> Eq for CatalogRef<T> {}

impl<T: CatalogEntity> fmt::Display for CatalogRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl<T> From<Slug> for CatalogRef<T> {
    fn from(slug: Slug) -> Self {
        CatalogRef::BySlug(slug)
    }
}

impl From<Brand> for CatalogRef<Brand> {
    fn from(brand: Brand) -> Self {
        CatalogRef::Resolved(brand)
    }
}

impl From<Railway> for CatalogRef<Railway> {
    fn from(railway: Railway) -> Self {
        CatalogRef::Resolved(railway)
    }
}

impl From<Scale> for CatalogRef<Scale> {
    fn from(scale: Scale) -> Self {
        CatalogRef::Resolved(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_keeps_slug_and_equality() {
        let brand = Brand::new("ACME").unwrap();
        let by_slug: CatalogRef<Brand> = Slug::parse("acme").unwrap().into();

        let resolved = by_slug.clone().resolve(brand.clone()).unwrap();

        assert!(resolved.is_resolved());
        assert_eq!(resolved.entity(), Some(&brand));
        assert_eq!(resolved.slug().as_str(), "acme");
        assert_eq!(resolved, by_slug);
    }

    #[test]
    fn test_resolve_rejects_other_entity() {
        let by_slug: CatalogRef<Brand> = Slug::parse("acme").unwrap().into();

        let result = by_slug.resolve(Brand::new("Roco").unwrap());
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
