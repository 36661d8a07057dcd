use serde::Serialize;

use crate::modules::rolling_stock::domain::{RollingStock, SearchCriteria};
use crate::shared::application::{PaginatedResults, RangeRequest};

/// One page of search results together with the criteria that produced it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRollingStocksResult {
    #[serde(serialize_with = "criteria_as_string")]
    pub criteria: SearchCriteria,
    pub page: PaginatedResults<RollingStock>,
}

impl SearchRollingStocksResult {
    /// Query for the next (older) page with the same criteria
    pub fn next_range(&self) -> Option<RangeRequest> {
        self.page.next_range()
    }
}

fn criteria_as_string<S: serde::Serializer>(
    criteria: &SearchCriteria,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(criteria)
}
