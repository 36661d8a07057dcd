use serde_json::Value;

use crate::modules::rolling_stock::domain::{fields, SearchCriteria};
use crate::shared::application::RangeRequest;
use crate::shared::config::SearchConfig;
use crate::shared::infrastructure::{Filter, FindQuery, SortSpec};

/// Turns search criteria and a range request into a document query.
///
/// Equality predicates are emitted in a fixed field order (brand, railway,
/// scale, category, era, power method) followed by the id bounds. Results
/// are always sorted by `lastModified` descending and the limit is one more
/// than the page size, so the caller can tell whether another page exists.
#[derive(Debug, Clone)]
pub struct RollingStockQueryTranslator {
    default_page_size: u32,
}

impl RollingStockQueryTranslator {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            default_page_size: config.default_page_size,
        }
    }

    pub fn page_size(&self, range: &RangeRequest) -> u32 {
        range.effective_count(self.default_page_size)
    }

    pub fn translate(&self, criteria: &SearchCriteria, range: &RangeRequest) -> FindQuery {
        FindQuery {
            filter: Filter::and(vec![Self::criteria_filter(criteria), Self::range_filter(range)]),
            sort: Self::sort(),
            limit: Some(self.page_size(range) as usize + 1),
        }
    }

    /// Filter for the criteria alone, without pagination bounds
    pub fn criteria_filter(criteria: &SearchCriteria) -> Filter {
        if criteria.is_empty() {
            return Filter::All;
        }

        let mut predicates = Vec::new();
        if let Some(brand) = criteria.brand() {
            predicates.push(Filter::eq(fields::BRAND_NAME, brand.slug().as_str()));
        }
        if let Some(railway) = criteria.railway() {
            predicates.push(Filter::eq(fields::RAILWAY_NAME, railway.slug().as_str()));
        }
        if let Some(scale) = criteria.scale() {
            predicates.push(Filter::eq(fields::SCALE_NAME, scale.slug().as_str()));
        }
        if let Some(category) = criteria.category() {
            predicates.push(Filter::eq(fields::CATEGORY, category.label()));
        }
        if let Some(era) = criteria.era() {
            predicates.push(Filter::eq(fields::ERA, era.label()));
        }
        if let Some(power_method) = criteria.power_method() {
            predicates.push(Filter::eq(fields::POWER_METHOD, power_method.label()));
        }

        Filter::and(predicates)
    }

    /// Exclusive id bounds from the range request
    pub fn range_filter(range: &RangeRequest) -> Filter {
        Filter::range(
            fields::ID,
            range.since_id().map(|id| Value::String(id.to_string())),
            range.max_id().map(|id| Value::String(id.to_string())),
        )
    }

    pub fn sort() -> SortSpec {
        SortSpec::descending(fields::LAST_MODIFIED)
    }
}

impl Default for RollingStockQueryTranslator {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}
