use async_trait::async_trait;

use crate::modules::catalog::domain::entities::{Brand, Railway, Scale};
use crate::shared::domain::Slug;
use crate::shared::errors::AppResult;

/// Port for resolving catalog slugs into full entities.
///
/// A slug that matches nothing is `Ok(None)`, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn find_brand(&self, slug: &Slug) -> AppResult<Option<Brand>>;

    async fn find_railway(&self, slug: &Slug) -> AppResult<Option<Railway>>;

    async fn find_scale(&self, slug: &Slug) -> AppResult<Option<Scale>>;
}
