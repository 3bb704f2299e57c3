//! Query parameters and paginated list results

use crate::core::compare::Predicate;
use crate::core::error::EquipmentsResult;
use crate::core::extension::Extension;
use crate::core::selector::Selector;
use serde::{Deserialize, Serialize};

/// Page used when the caller gives none (pages start at 1)
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the caller gives none
pub const DEFAULT_SIZE: usize = 10;

/// Generic list parameters shared by every listing endpoint
///
/// # Example
/// ```text
/// GET /equipmentgroups?page=2&size=5
/// GET /equipmentgroups?labelSelector=tier=gold,!hidden
/// GET /equipmentgroups?labelSelector=tier=gold&labelSelector=!hidden
/// GET /equipmentgroups?fieldSelector=metadata.name=desk
/// ```
///
/// Selectors may be repeated; every requirement of every occurrence must
/// hold. Extract with `axum_extra::extract::Query` so repeated keys collect
/// into the lists.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Page number (starts at 1), defaults to [`DEFAULT_PAGE`]
    pub page: Option<usize>,

    /// Items per page, defaults to [`DEFAULT_SIZE`]
    pub size: Option<usize>,

    /// Label requirements, comma-separated within one occurrence
    #[serde(default)]
    pub label_selector: Vec<String>,

    /// Field requirements, comma-separated within one occurrence
    #[serde(default)]
    pub field_selector: Vec<String>,
}

impl ListQuery {
    /// Predicate built from the label and field selectors
    pub fn selector_predicate<E: Extension>(&self) -> EquipmentsResult<Predicate<E>> {
        Selector::parse(self.label_selector.as_slice(), self.field_selector.as_slice()).map(Selector::into_predicate)
    }
}

/// Value of an optional parameter, `None` when blank
///
/// A non-blank value is returned as sent, surrounding whitespace included.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

/// One page of a listing
///
/// Serialized with the page flags so templates and API clients do not need
/// to recompute them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page (0 means unpaged)
    pub size: usize,

    /// Total number of matching items
    pub total: usize,

    /// The items of this page
    pub items: Vec<T>,

    /// Whether this is the first page
    pub first: bool,

    /// Whether this is the last page
    pub last: bool,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_previous: bool,

    /// Total number of pages
    pub total_pages: usize,
}

impl<T> ListResult<T> {
    /// Build a page and compute its flags
    pub fn new(page: usize, size: usize, total: usize, items: Vec<T>) -> Self {
        let total_pages = total_pages(total, size);
        Self {
            page,
            size,
            total,
            items,
            first: page <= 1,
            last: page >= total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
            total_pages,
        }
    }

    /// A page with no items and a total of zero
    pub fn empty(page: usize, size: usize) -> Self {
        Self::new(page, size, 0, Vec::new())
    }

    /// Slice an already filtered and sorted collection
    ///
    /// A `size` of 0 returns every item on a single page.
    pub fn paginate(all: Vec<T>, page: usize, size: usize) -> Self {
        let total = all.len();
        if size == 0 {
            return Self::new(page, size, total, all);
        }
        let start = page.saturating_sub(1).saturating_mul(size);
        let items = all.into_iter().skip(start).take(size).collect();
        Self::new(page, size, total, items)
    }

    /// Map the items while keeping the page information
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListResult<U> {
        ListResult {
            page: self.page,
            size: self.size,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
            first: self.first,
            last: self.last,
            has_next: self.has_next,
            has_previous: self.has_previous,
            total_pages: self.total_pages,
        }
    }

    /// Whether the page carries no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// `ceil(total / size)`, with an unpaged listing counting as one page
pub fn total_pages(total: usize, size: usize) -> usize {
    if size == 0 {
        return 1;
    }
    total.div_ceil(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_to_none() {
        let query = ListQuery::default();
        assert_eq!(query.page, None);
        assert_eq!(query.size, None);
        assert!(query.label_selector.is_empty());
        assert!(query.field_selector.is_empty());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&Some("peripherals".to_string())), Some("peripherals"));
        assert_eq!(non_blank(&Some("Keyboard ".to_string())), Some("Keyboard "));
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&None), None);
    }

    #[test]
    fn test_page_flags() {
        let page = ListResult::new(1, 20, 145, vec![(); 20]);
        assert_eq!(page.total_pages, 8);
        assert!(page.first);
        assert!(!page.has_previous);
        assert!(page.has_next);
        assert!(!page.last);

        let page = ListResult::new(8, 20, 145, vec![(); 5]);
        assert!(page.last);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_empty_page_is_well_formed() {
        let page: ListResult<u8> = ListResult::empty(3, 7);
        assert_eq!(page.page, 3);
        assert_eq!(page.size, 7);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_paginate_slices() {
        let page = ListResult::paginate((1..=12).collect::<Vec<_>>(), 2, 5);
        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);

        let past_end = ListResult::paginate((1..=12).collect::<Vec<_>>(), 4, 5);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 12);
    }

    #[test]
    fn test_paginate_unpaged() {
        let page = ListResult::paginate(vec!['a', 'b', 'c'], 1, 0);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(ListResult::new(1, 10, 0, Vec::<u8>::new())).unwrap();
        assert_eq!(value["hasNext"], false);
        assert_eq!(value["totalPages"], 0);
        assert_eq!(value["items"], serde_json::json!([]));
    }
}
