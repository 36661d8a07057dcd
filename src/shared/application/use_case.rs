use crate::shared::errors::AppResult;
/// Base trait for query handlers following the CQRS pattern
///
/// # Example
///
/// ```ignore
/// struct SearchRollingStocksHandler {
///     repository: Arc<dyn RollingStockRepository>,
/// }
///
/// #[async_trait]
/// impl Query<SearchRollingStocksQuery, SearchRollingStocksResult> for SearchRollingStocksHandler {
///     async fn execute(&self, query: SearchRollingStocksQuery) -> AppResult<SearchRollingStocksResult> {
///         let page = self.repository.find_by_criteria(&query.criteria, &query.range).await?;
///         Ok(SearchRollingStocksResult { criteria: query.criteria, page })
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
