use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::rolling_stock::application::criteria_resolver::CriteriaResolver;
use crate::modules::rolling_stock::domain::RollingStockRepository;
use crate::shared::application::{Query, RangeRequest};
use crate::shared::config::SearchConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};
use crate::{log_debug, log_warn};

use super::{query::SearchRollingStocksQuery, result::SearchRollingStocksResult};

/// Query handler for browsing rolling stock page by page
pub struct SearchRollingStocksHandler {
    repository: Arc<dyn RollingStockRepository>,
    resolver: Option<Arc<CriteriaResolver>>,
    config: SearchConfig,
}

impl SearchRollingStocksHandler {
    pub fn new(repository: Arc<dyn RollingStockRepository>, config: SearchConfig) -> Self {
        Self {
            repository,
            resolver: None,
            config,
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<CriteriaResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Caps the requested page size at the configured maximum
    fn bounded_range(&self, range: RangeRequest) -> AppResult<RangeRequest> {
        match range.count() {
            Some(count) if count > self.config.max_page_size => {
                let clamped = self.config.clamp_page_size(count);
                log_warn!(
                    "Requested page size {} exceeds maximum, using {}",
                    count,
                    clamped
                );
                range.with_count(clamped)
            }
            _ => Ok(range),
        }
    }
}

#[async_trait]
impl Query<SearchRollingStocksQuery, SearchRollingStocksResult> for SearchRollingStocksHandler {
    async fn execute(&self, query: SearchRollingStocksQuery) -> AppResult<SearchRollingStocksResult> {
        let range = self.bounded_range(query.range)?;

        let criteria = match (&self.resolver, query.resolve_references) {
            (Some(resolver), true) => resolver.resolve(&query.criteria).await?,
            (None, true) => {
                log_debug!("No catalog resolver configured, searching by slug");
                query.criteria
            }
            (_, false) => query.criteria,
        };

        let timer = TimedOperation::new("search rolling stocks");
        let page = match self.repository.find_by_criteria(&criteria, &range).await {
            Ok(page) => page,
            Err(e) => {
                if e.is_store_failure() {
                    LogContext::error_with_context(&e, "Rolling stock search failed");
                }
                return Err(e);
            }
        };
        timer.finish();

        LogContext::search_operation(&criteria.to_string(), range.count(), Some(page.len()));

        Ok(SearchRollingStocksResult { criteria, page })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::repositories::MockCatalogLookup;
    use crate::modules::catalog::domain::Brand;
    use crate::modules::rolling_stock::domain::repositories::MockRollingStockRepository;
    use crate::modules::rolling_stock::domain::SearchCriteria;
    use crate::shared::application::PaginatedResults;
    use crate::shared::domain::Slug;
    use crate::shared::errors::AppError;

    fn acme_criteria() -> SearchCriteria {
        SearchCriteria::builder()
            .brand(Slug::parse("acme").unwrap())
            .build()
    }

    #[tokio::test]
    async fn test_oversized_page_is_clamped() {
        let mut repository = MockRollingStockRepository::new();
        repository
            .expect_find_by_criteria()
            .withf(|_, range| range.count() == Some(100))
            .times(1)
            .returning(|_, range| Ok(PaginatedResults::empty(range.clone(), 100)));

        let handler = SearchRollingStocksHandler::new(Arc::new(repository), SearchConfig::default());
        let query = SearchRollingStocksQuery::new(
            SearchCriteria::empty(),
            RangeRequest::new(500).unwrap(),
        );

        let result = handler.execute(query).await.unwrap();
        assert_eq!(result.page.page_size(), 100);
    }

    #[tokio::test]
    async fn test_range_within_limit_is_passed_through() {
        let mut repository = MockRollingStockRepository::new();
        repository
            .expect_find_by_criteria()
            .withf(|criteria, range| *criteria == acme_criteria() && range.count() == Some(10))
            .returning(|_, range| Ok(PaginatedResults::empty(range.clone(), 10)));

        let handler = SearchRollingStocksHandler::new(Arc::new(repository), SearchConfig::default());
        let result = handler
            .execute(SearchRollingStocksQuery::new(
                acme_criteria(),
                RangeRequest::new(10).unwrap(),
            ))
            .await
            .unwrap();

        assert!(result.page.is_empty());
        assert!(result.next_range().is_none());
    }

    #[tokio::test]
    async fn test_resolves_references_when_asked() {
        let mut lookup = MockCatalogLookup::new();
        lookup
            .expect_find_brand()
            .times(1)
            .returning(|_| Ok(Some(Brand::new("ACME").unwrap())));

        let mut repository = MockRollingStockRepository::new();
        repository
            .expect_find_by_criteria()
            .withf(|criteria, _| criteria.is_fully_resolved())
            .returning(|_, range| Ok(PaginatedResults::empty(range.clone(), 10)));

        let handler = SearchRollingStocksHandler::new(Arc::new(repository), SearchConfig::default())
            .with_resolver(Arc::new(CriteriaResolver::new(Arc::new(lookup))));
        let query = SearchRollingStocksQuery::new(acme_criteria(), RangeRequest::latest())
            .resolving_references();

        let result = handler.execute(query).await.unwrap();

        assert!(result.criteria.brand().unwrap().is_resolved());
        assert_eq!(result.criteria, acme_criteria());
    }

    #[tokio::test]
    async fn test_resolver_is_skipped_by_default() {
        let mut lookup = MockCatalogLookup::new();
        lookup.expect_find_brand().never();

        let mut repository = MockRollingStockRepository::new();
        repository
            .expect_find_by_criteria()
            .returning(|_, range| Ok(PaginatedResults::empty(range.clone(), 10)));

        let handler = SearchRollingStocksHandler::new(Arc::new(repository), SearchConfig::default())
            .with_resolver(Arc::new(CriteriaResolver::new(Arc::new(lookup))));

        let result = handler
            .execute(SearchRollingStocksQuery::new(acme_criteria(), RangeRequest::latest()))
            .await
            .unwrap();

        assert!(!result.criteria.brand().unwrap().is_resolved());
    }

    #[tokio::test]
    async fn test_repository_failure_is_returned() {
        let mut repository = MockRollingStockRepository::new();
        repository
            .expect_find_by_criteria()
            .returning(|_, _| Err(AppError::DatabaseError("connection reset".to_string())));

        let handler = SearchRollingStocksHandler::new(Arc::new(repository), SearchConfig::default());
        let result = handler
            .execute(SearchRollingStocksQuery::new(acme_criteria(), RangeRequest::latest()))
            .await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
