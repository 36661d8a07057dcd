use crate::modules::rolling_stock::domain::SearchCriteria;
use crate::shared::application::RangeRequest;

/// Query for one page of rolling stock matching some criteria
#[derive(Debug, Clone, Default)]
pub struct SearchRollingStocksQuery {
    pub criteria: SearchCriteria,
    pub range: RangeRequest,
    /// Look up brand/railway/scale entities before searching
    pub resolve_references: bool,
}

impl SearchRollingStocksQuery {
    pub fn new(criteria: SearchCriteria, range: RangeRequest) -> Self {
        Self {
            criteria,
            range,
            resolve_references: false,
        }
    }

    pub fn resolving_references(mut self) -> Self {
        self.resolve_references = true;
        self
    }
}
