use std::sync::Arc;

use crate::log_debug;
use crate::modules::catalog::domain::{CatalogEntity, CatalogLookup};
use crate::modules::rolling_stock::domain::{CatalogRef, ResolvedEntities, SearchCriteria};
use crate::shared::domain::Slug;
use crate::shared::errors::AppResult;

/// Swaps the slug references of search criteria for catalog entities.
///
/// Only references still holding a bare slug are looked up. A slug that
/// matches nothing stays a slug; lookup failures are returned as-is.
pub struct CriteriaResolver {
    lookup: Arc<dyn CatalogLookup>,
}

impl CriteriaResolver {
    pub fn new(lookup: Arc<dyn CatalogLookup>) -> Self {
        Self { lookup }
    }

    pub async fn resolve(&self, criteria: &SearchCriteria) -> AppResult<SearchCriteria> {
        if criteria.is_fully_resolved() {
            return Ok(criteria.clone());
        }

        let (brand, railway, scale) = tokio::try_join!(
            async {
                match pending_slug(criteria.brand()) {
                    Some(slug) => self.lookup.find_brand(slug).await,
                    None => Ok(None),
                }
            },
            async {
                match pending_slug(criteria.railway()) {
                    Some(slug) => self.lookup.find_railway(slug).await,
                    None => Ok(None),
                }
            },
            async {
                match pending_slug(criteria.scale()) {
                    Some(slug) => self.lookup.find_scale(slug).await,
                    None => Ok(None),
                }
            },
        )?;

        let resolved = criteria.with_resolved(ResolvedEntities {
            brand,
            railway,
            scale,
        });
        log_debug!("Resolved criteria: {}", resolved);

        Ok(resolved)
    }
}

fn pending_slug<T: CatalogEntity>(reference: Option<&CatalogRef<T>>) -> Option<&Slug> {
    reference.filter(|r| !r.is_resolved()).map(CatalogRef::slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::repositories::MockCatalogLookup;
    use crate::modules::catalog::domain::{Brand, Railway, Scale};
    use crate::shared::errors::AppError;

    fn slug(value: &str) -> Slug {
        Slug::parse(value).unwrap()
    }

    #[tokio::test]
    async fn test_resolves_known_slugs() {
        let mut lookup = MockCatalogLookup::new();
        lookup
            .expect_find_brand()
            .returning(|_| Ok(Some(Brand::new("ACME").unwrap())));
        lookup
            .expect_find_scale()
            .returning(|_| Ok(Some(Scale::new("H0", 87.0).unwrap())));
        lookup.expect_find_railway().never();

        let resolver = CriteriaResolver::new(Arc::new(lookup));
        let criteria = SearchCriteria::builder()
            .brand(slug("acme"))
            .scale(slug("h0"))
            .build();

        let resolved = resolver.resolve(&criteria).await.unwrap();

        assert!(resolved.is_fully_resolved());
        let brand = resolved.brand().and_then(CatalogRef::entity).unwrap();
        assert_eq!(brand.name, "ACME");
        assert_eq!(resolved, criteria);
    }

    #[tokio::test]
    async fn test_unknown_slug_stays_unresolved() {
        let mut lookup = MockCatalogLookup::new();
        lookup.expect_find_railway().returning(|_| Ok(None));

        let resolver = CriteriaResolver::new(Arc::new(lookup));
        let criteria = SearchCriteria::builder().railway(slug("xyz")).build();

        let resolved = resolver.resolve(&criteria).await.unwrap();

        let railway = resolved.railway().unwrap();
        assert!(!railway.is_resolved());
        assert_eq!(railway.slug().as_str(), "xyz");
    }

    #[tokio::test]
    async fn test_resolved_references_are_not_looked_up_again() {
        let mut lookup = MockCatalogLookup::new();
        lookup.expect_find_brand().never();
        lookup.expect_find_railway().never();
        lookup.expect_find_scale().never();

        let resolver = CriteriaResolver::new(Arc::new(lookup));
        let criteria = SearchCriteria::builder()
            .brand(Brand::new("ACME").unwrap())
            .railway(Railway::new("FS").unwrap())
            .build();

        let resolved = resolver.resolve(&criteria).await.unwrap();
        assert_eq!(resolved, criteria);
    }

    #[tokio::test]
    async fn test_lookup_failure_is_returned() {
        let mut lookup = MockCatalogLookup::new();
        lookup
            .expect_find_brand()
            .returning(|_| Err(AppError::DatabaseError("down".to_string())));

        let resolver = CriteriaResolver::new(Arc::new(lookup));
        let criteria = SearchCriteria::builder().brand(slug("acme")).build();

        let result = resolver.resolve(&criteria).await;
        assert_eq!(result.unwrap_err(), AppError::DatabaseError("down".to_string()));
    }
}
