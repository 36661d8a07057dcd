use async_trait::async_trait;

use super::document::{Document, Filter, SortSpec};
use crate::shared::errors::AppResult;

/// Port to a document-store collection.
///
/// Implementations surface connectivity and query failures as
/// `AppError::DatabaseError`; callers propagate them unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Documents matching `filter`, ordered by `sort`, at most `limit` of them
    async fn find(
        &self,
        filter: &Filter,
        sort: &SortSpec,
        limit: Option<usize>,
    ) -> AppResult<Vec<Document>>;

    /// First document matching `filter`
    async fn find_one(&self, filter: &Filter) -> AppResult<Option<Document>>;

    /// Number of documents matching `filter`
    async fn count(&self, filter: &Filter) -> AppResult<u64>;

    /// Insert or replace the document with the same `_id`
    async fn save(&self, document: Document) -> AppResult<()>;
}
