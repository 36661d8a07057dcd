use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::log_debug;
use crate::modules::catalog::domain::{Brand, CatalogLookup, Railway, Scale};
use crate::shared::domain::Slug;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{DocumentCollection, Filter};

pub const BRANDS_COLLECTION: &str = "brands";
pub const RAILWAYS_COLLECTION: &str = "railways";
pub const SCALES_COLLECTION: &str = "scales";

const SLUG_FIELD: &str = "slug";

/// Catalog lookups backed by one document collection per entity
pub struct CatalogLookupImpl {
    brands: Arc<dyn DocumentCollection>,
    railways: Arc<dyn DocumentCollection>,
    scales: Arc<dyn DocumentCollection>,
}

impl CatalogLookupImpl {
    pub fn new(
        brands: Arc<dyn DocumentCollection>,
        railways: Arc<dyn DocumentCollection>,
        scales: Arc<dyn DocumentCollection>,
    ) -> Self {
        Self {
            brands,
            railways,
            scales,
        }
    }

    pub async fn save_brand(&self, brand: &Brand) -> AppResult<()> {
        save(self.brands.as_ref(), brand).await
    }

    pub async fn save_railway(&self, railway: &Railway) -> AppResult<()> {
        save(self.railways.as_ref(), railway).await
    }

    pub async fn save_scale(&self, scale: &Scale) -> AppResult<()> {
        save(self.scales.as_ref(), scale).await
    }
}

async fn find_by_slug<T: DeserializeOwned>(
    collection: &dyn DocumentCollection,
    collection_name: &str,
    slug: &Slug,
) -> AppResult<Option<T>> {
    let document = collection
        .find_one(&Filter::eq(SLUG_FIELD, slug.as_str()))
        .await?;

    if document.is_none() {
        log_debug!("Lookup: no {} entry for slug '{}'", collection_name, slug);
    }

    Ok(document.map(serde_json::from_value::<T>).transpose()?)
}

async fn save<T: Serialize>(collection: &dyn DocumentCollection, entity: &T) -> AppResult<()> {
    collection.save(serde_json::to_value(entity)?).await
}

#[async_trait]
impl CatalogLookup for CatalogLookupImpl {
    async fn find_brand(&self, slug: &Slug) -> AppResult<Option<Brand>> {
        find_by_slug(self.brands.as_ref(), BRANDS_COLLECTION, slug).await
    }

    async fn find_railway(&self, slug: &Slug) -> AppResult<Option<Railway>> {
        find_by_slug(self.railways.as_ref(), RAILWAYS_COLLECTION, slug).await
    }

    async fn find_scale(&self, slug: &Slug) -> AppResult<Option<Scale>> {
        find_by_slug(self.scales.as_ref(), SCALES_COLLECTION, slug).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;
    use crate::shared::infrastructure::{InMemoryCollection, MockDocumentCollection};

    fn in_memory_lookup() -> CatalogLookupImpl {
        CatalogLookupImpl::new(
            Arc::new(InMemoryCollection::new(BRANDS_COLLECTION)),
            Arc::new(InMemoryCollection::new(RAILWAYS_COLLECTION)),
            Arc::new(InMemoryCollection::new(SCALES_COLLECTION)),
        )
    }

    #[tokio::test]
    async fn test_saved_entities_are_found_by_slug() {
        let lookup = in_memory_lookup();
        let brand = Brand::new("ACME").unwrap();
        let railway = Railway::new("FS").unwrap().with_country("IT");
        let scale = Scale::new("H0", 87.0).unwrap();

        lookup.save_brand(&brand).await.unwrap();
        lookup.save_railway(&railway).await.unwrap();
        lookup.save_scale(&scale).await.unwrap();

        let found = lookup.find_brand(&brand.slug).await.unwrap().unwrap();
        assert_eq!(found.id, brand.id);
        assert_eq!(
            lookup
                .find_railway(&railway.slug)
                .await
                .unwrap()
                .unwrap()
                .country
                .as_deref(),
            Some("it")
        );
        assert!(lookup.find_scale(&scale.slug).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_slug_is_none() {
        let lookup = in_memory_lookup();
        let slug = Slug::parse("missing").unwrap();

        assert!(lookup.find_brand(&slug).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut brands = MockDocumentCollection::new();
        brands
            .expect_find_one()
            .returning(|_| Err(AppError::DatabaseError("connection refused".to_string())));

        let lookup = CatalogLookupImpl::new(
            Arc::new(brands),
            Arc::new(InMemoryCollection::new(RAILWAYS_COLLECTION)),
            Arc::new(InMemoryCollection::new(SCALES_COLLECTION)),
        );

        let result = lookup.find_brand(&Slug::parse("acme").unwrap()).await;
        assert_eq!(
            result.unwrap_err(),
            AppError::DatabaseError("connection refused".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_document_is_serialization_error() {
        let brands = InMemoryCollection::with_documents(
            BRANDS_COLLECTION,
            vec![serde_json::json!({ "_id": "x", "slug": "acme" })],
        );
        let lookup = CatalogLookupImpl::new(
            Arc::new(brands),
            Arc::new(InMemoryCollection::new(RAILWAYS_COLLECTION)),
            Arc::new(InMemoryCollection::new(SCALES_COLLECTION)),
        );

        let result = lookup.find_brand(&Slug::parse("acme").unwrap()).await;
        assert!(matches!(result, Err(AppError::SerializationError(_))));
    }
}
