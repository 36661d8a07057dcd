use async_trait::async_trait;

use crate::modules::rolling_stock::domain::{RollingStock, SearchCriteria};
use crate::shared::application::{PaginatedResults, RangeRequest};
use crate::shared::domain::Slug;
use crate::shared::errors::AppResult;

/// Port (interface) for rolling stock persistence following Hexagonal Architecture
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RollingStockRepository: Send + Sync {
    /// One page of rolling stock matching `criteria`, most recently modified first
    async fn find_by_criteria(
        &self,
        criteria: &SearchCriteria,
        range: &RangeRequest,
    ) -> AppResult<PaginatedResults<RollingStock>>;

    /// Count rolling stock matching criteria
    async fn count_by_criteria(&self, criteria: &SearchCriteria) -> AppResult<u64>;

    async fn find_by_slug(&self, slug: &Slug) -> AppResult<Option<RollingStock>>;

    /// Insert or replace
    async fn save(&self, rolling_stock: &RollingStock) -> AppResult<()>;
}
