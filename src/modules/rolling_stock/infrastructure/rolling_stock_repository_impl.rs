use async_trait::async_trait;
use std::sync::Arc;

use super::query_translator::RollingStockQueryTranslator;
use crate::modules::rolling_stock::domain::{fields, RollingStock, RollingStockRepository, SearchCriteria};
use crate::shared::application::{PaginatedResults, RangeRequest};
use crate::shared::domain::Slug;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::{Document, DocumentCollection, Filter};
use crate::shared::utils::{LogContext, TimedOperation};

pub const ROLLING_STOCKS_COLLECTION: &str = "rollingStocks";

/// Rolling stock repository over a document collection
pub struct RollingStockRepositoryImpl {
    collection: Arc<dyn DocumentCollection>,
    translator: RollingStockQueryTranslator,
}

impl RollingStockRepositoryImpl {
    pub fn new(collection: Arc<dyn DocumentCollection>, translator: RollingStockQueryTranslator) -> Self {
        Self {
            collection,
            translator,
        }
    }

    fn to_model(document: Document) -> AppResult<RollingStock> {
        Ok(serde_json::from_value(document)?)
    }
}

#[async_trait]
impl RollingStockRepository for RollingStockRepositoryImpl {
    async fn find_by_criteria(
        &self,
        criteria: &SearchCriteria,
        range: &RangeRequest,
    ) -> AppResult<PaginatedResults<RollingStock>> {
        let query = self.translator.translate(criteria, range);
        let page_size = self.translator.page_size(range);

        LogContext::db_operation("find", ROLLING_STOCKS_COLLECTION, None);
        tracing::debug!(query = %query.to_document(), "rolling stock query");
        let timer = TimedOperation::new("rolling stock find");

        let documents = self
            .collection
            .find(&query.filter, &query.sort, query.limit)
            .await?;

        timer.finish_with_info(&format!("{} documents", documents.len()));

        let items = documents
            .into_iter()
            .map(Self::to_model)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PaginatedResults::from_sentinel_page(
            items,
            range.clone(),
            page_size,
        ))
    }

    async fn count_by_criteria(&self, criteria: &SearchCriteria) -> AppResult<u64> {
        LogContext::db_operation("count", ROLLING_STOCKS_COLLECTION, None);

        let filter = RollingStockQueryTranslator::criteria_filter(criteria);
        self.collection.count(&filter).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> AppResult<Option<RollingStock>> {
        LogContext::db_operation("find_one", ROLLING_STOCKS_COLLECTION, None);

        let filter = Filter::eq(fields::SLUG, slug.as_str());
        self.collection
            .find_one(&filter)
            .await?
            .map(Self::to_model)
            .transpose()
    }

    async fn save(&self, rolling_stock: &RollingStock) -> AppResult<()> {
        LogContext::db_operation("save", ROLLING_STOCKS_COLLECTION, None);

        let document = serde_json::to_value(rolling_stock)?;
        self.collection.save(document).await
    }
}
