/// Cursor pagination support for queries
///
/// Pages are addressed by identifier bounds rather than page numbers: a
/// `RangeRequest` says "give me `count` items strictly between these ids",
/// and `PaginatedResults` carries the ids needed to ask for the next page.
use serde::Serialize;

use crate::shared::domain::EntityId;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Anything that can be paged by id
pub trait Identified {
    fn entity_id(&self) -> EntityId;
}

/// Requested page boundary and size.
///
/// `since_id` and `max_id` are exclusive bounds and are passed through to the
/// store untouched. A missing `count` means the caller accepts the configured
/// default page size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeRequest {
    since_id: Option<EntityId>,
    max_id: Option<EntityId>,
    count: Option<u32>,
}

impl RangeRequest {
    /// A request for the `count` most recent items
    pub fn new(count: u32) -> AppResult<Self> {
        Validator::validate_page_size(count)?;
        Ok(Self {
            since_id: None,
            max_id: None,
            count: Some(count),
        })
    }

    /// Most recent items, default page size
    pub fn latest() -> Self {
        Self::default()
    }

    pub fn with_since_id(mut self, since_id: EntityId) -> Self {
        self.since_id = Some(since_id);
        self
    }

    pub fn with_max_id(mut self, max_id: EntityId) -> Self {
        self.max_id = Some(max_id);
        self
    }

    pub fn with_count(mut self, count: u32) -> AppResult<Self> {
        Validator::validate_page_size(count)?;
        self.count = Some(count);
        Ok(self)
    }

    pub fn since_id(&self) -> Option<EntityId> {
        self.since_id
    }

    pub fn max_id(&self) -> Option<EntityId> {
        self.max_id
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// Page size to use, falling back to `default` when no count was given
    pub fn effective_count(&self, default: u32) -> u32 {
        self.count.unwrap_or(default)
    }

    /// True when neither bound is set ("start from the most recent")
    pub fn is_unbounded(&self) -> bool {
        self.since_id.is_none() && self.max_id.is_none()
    }
}

/// One page of results plus what is needed to fetch the next one
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResults<T> {
    items: Vec<T>,
    has_more: bool,
    min_id: Option<EntityId>,
    max_id: Option<EntityId>,
    page_size: u32,
    range: RangeRequest,
}

impl<T: Identified> PaginatedResults<T> {
    /// Shapes a result fetched with limit `page_size + 1`.
    ///
    /// The extra row, when present, only signals that another page exists and
    /// is dropped from the returned items.
    pub fn from_sentinel_page(mut raw: Vec<T>, range: RangeRequest, page_size: u32) -> Self {
        let page_len = page_size as usize;
        let has_more = raw.len() > page_len;
        raw.truncate(page_len);

        let min_id = raw.iter().map(Identified::entity_id).min();
        let max_id = raw.iter().map(Identified::entity_id).max();

        Self {
            items: raw,
            has_more,
            min_id,
            max_id,
            page_size,
            range,
        }
    }

    /// Id of the first item in result order
    pub fn first_id(&self) -> Option<EntityId> {
        self.items.first().map(Identified::entity_id)
    }

    /// Id of the last item in result order
    pub fn last_id(&self) -> Option<EntityId> {
        self.items.last().map(Identified::entity_id)
    }
}

impl<T> PaginatedResults<T> {
    pub fn empty(range: RangeRequest, page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
            min_id: None,
            max_id: None,
            page_size,
            range,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Smallest id on this page
    pub fn min_id(&self) -> Option<EntityId> {
        self.min_id
    }

    /// Largest id on this page
    pub fn max_id(&self) -> Option<EntityId> {
        self.max_id
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// The request this page answers
    pub fn range(&self) -> &RangeRequest {
        &self.range
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Request for the following (older) page, `None` on the last page.
    ///
    /// Every item on this page has an id `>= min_id`, so bounding the next
    /// query with `max_id = min_id` can never return one of them again.
    ///
    /// Pages are ordered by `lastModified` while the bound is on ids. When an
    /// item with a low id was modified recently it lands on an early page and
    /// pulls the bound down with it; items with higher ids that were not yet
    /// served are then skipped by the following pages.
    pub fn next_range(&self) -> Option<RangeRequest> {
        if !self.has_more {
            return None;
        }

        Some(RangeRequest {
            since_id: self.range.since_id,
            max_id: Some(self.min_id?),
            count: Some(self.page_size),
        })
    }

    /// Request for items added after this page was produced
    pub fn newer_range(&self) -> RangeRequest {
        RangeRequest {
            since_id: self.max_id.or(self.range.since_id),
            max_id: None,
            count: Some(self.page_size),
        }
    }

    /// Converts the items while keeping the page metadata
    pub fn map<U, F>(self, f: F) -> PaginatedResults<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResults {
            items: self.items.into_iter().map(f).collect(),
            has_more: self.has_more,
            min_id: self.min_id,
            max_id: self.max_id,
            page_size: self.page_size,
            range: self.range,
        }
    }
}

impl<T> IntoIterator for PaginatedResults<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PaginatedResults<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
