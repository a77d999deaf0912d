//! Dataset list responses and their reconciliation with client-only filters.
//!
//! The server paginates by its own license-unaware query; the license filter is
//! applied afterwards on the page that came back. Navigation keeps following the
//! server's `total` and page count, so a page can render fewer items than
//! `page_size` (or none at all, see [`EmptyReason::FilteredOut`]) while later
//! pages still hold matches.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::category::CategoryLookup;
use crate::dataset::{Dataset, RawDataset};
use crate::filter_state::{FilterState, License};
use crate::remote_query::{RemoteQuery, project};

/// Dataset list page as returned to the discovery page.
///
/// `query` echoes the request this page answers, so a response that arrives
/// after the filters moved on can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetListResponse {
    pub query: RemoteQuery,
    pub items: Vec<RawDataset>,
    pub total: u64,
    pub page_size: u32,
}

/// Observable state of one asynchronous fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Failed(String),
    Loaded(T),
}

impl<T, E: std::fmt::Display> From<Option<Result<T, E>>> for FetchState<T> {
    fn from(value: Option<Result<T, E>>) -> Self {
        match value {
            None => FetchState::Pending,
            Some(Err(e)) => FetchState::Failed(e.to_string()),
            Some(Ok(v)) => FetchState::Loaded(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub page_size: u32,
}

impl Pagination {
    /// `total_pages = ceil(total / page_size)`, 0 when there is nothing to page.
    pub fn new(page: u32, total: u64, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size as u64).min(u32::MAX as u64) as u32
        };
        Self { page, total_pages, total, page_size }
    }

    pub fn previous_disabled(&self) -> bool {
        self.page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn previous_page(&self) -> u32 {
        self.page.saturating_sub(1).clamp(1, self.total_pages.max(1))
    }

    pub fn next_page(&self) -> u32 {
        self.page.saturating_add(1).clamp(1, self.total_pages.max(1))
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Keep the datasets whose license is selected; everything when none is selected.
pub fn filter_by_license(datasets: &[Dataset], licenses: &BTreeSet<License>) -> Vec<Dataset> {
    datasets
        .iter()
        .filter(|d| licenses.is_empty() || d.license_kind().is_some_and(|l| licenses.contains(&l)))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The server returned no items for the query.
    NoResults,
    /// The server returned items but the license filter removed all of them.
    FilteredOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub datasets: Vec<Dataset>,
    pub pagination: Pagination,
    /// Items on this page before the license filter.
    pub server_item_count: usize,
}

/// The rendering branches of the discovery result list.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscoveryView {
    Loading,
    Failed { message: String },
    Empty { reason: EmptyReason, pagination: Pagination },
    Ready(ResultPage),
}

impl DiscoveryView {
    /// Navigation facts, when the current query has an answer.
    pub fn pagination(&self) -> Option<Pagination> {
        match self {
            DiscoveryView::Ready(page) => Some(page.pagination),
            DiscoveryView::Empty { pagination, .. } => Some(*pagination),
            DiscoveryView::Loading | DiscoveryView::Failed { .. } => None,
        }
    }
}

/// Combine the fetch state of the dataset list with the current filters.
///
/// A loaded response whose echoed query differs from the projection of `state`
/// is stale and reported as [`DiscoveryView::Loading`].
pub fn reconcile(
    state: &FilterState,
    fetch: &FetchState<DatasetListResponse>,
    categories: &CategoryLookup,
) -> DiscoveryView {
    let response = match fetch {
        FetchState::Pending => return DiscoveryView::Loading,
        FetchState::Failed(message) => return DiscoveryView::Failed { message: message.clone() },
        FetchState::Loaded(response) => response,
    };

    let current = project(state);
    if response.query != current {
        tracing::debug!(
            response_key = %response.query.request_key(),
            current_key = %current.request_key(),
            "dropping stale dataset response"
        );
        return DiscoveryView::Loading;
    }

    let pagination = Pagination::new(state.page, response.total, response.page_size);
    if response.items.is_empty() {
        return DiscoveryView::Empty { reason: EmptyReason::NoResults, pagination };
    }

    let projected = response
        .items
        .iter()
        .map(|raw| Dataset::from_raw(raw, categories, state.currency))
        .collect::<Vec<_>>();
    let datasets = filter_by_license(&projected, &state.licenses);
    if datasets.is_empty() {
        return DiscoveryView::Empty { reason: EmptyReason::FilteredOut, pagination };
    }

    DiscoveryView::Ready(ResultPage {
        datasets,
        pagination,
        server_item_count: response.items.len(),
    })
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::filter_state::{FilterPatch, FilterStore};

    fn response_for(state: &FilterState, items: Vec<serde_json::Value>, total: u64) -> DatasetListResponse {
        DatasetListResponse {
            query: project(state),
            items: items.into_iter().map(RawDataset).collect(),
            total,
            page_size: state.page_size,
        }
    }

    #[test]
    fn pagination_facts() {
        let p = Pagination::new(1, 47, 10);
        assert_eq!(p.total_pages, 5);
        assert!(p.previous_disabled());
        assert!(!p.next_disabled());
        assert_eq!(p.label(), "Page 1 of 5");
        assert_eq!(p.previous_page(), 1);

        let p = Pagination::new(5, 47, 10);
        assert!(p.next_disabled());
        assert!(!p.previous_disabled());
        assert_eq!(p.next_page(), 5);
        assert_eq!(p.previous_page(), 4);
    }

    #[test]
    fn pagination_without_results() {
        let p = Pagination::new(1, 0, 10);
        assert_eq!(p.total_pages, 0);
        assert!(p.next_disabled());
        assert_eq!(Pagination::new(1, 30, 0).total_pages, 0);
    }

    #[test]
    fn pending_and_failed_states() {
        let state = FilterState::default();
        let lookup = CategoryLookup::default();
        assert_eq!(reconcile(&state, &FetchState::Pending, &lookup), DiscoveryView::Loading);
        let failed = FetchState::Failed("connection refused".to_string());
        assert_eq!(
            reconcile(&state, &failed, &lookup),
            DiscoveryView::Failed { message: "connection refused".to_string() }
        );
    }

    #[test]
    fn list_response_uses_camel_case_on_the_wire() {
        let state = FilterState::default();
        let json = serde_json::to_value(response_for(&state, vec![json!({"id": "a"})], 1)).unwrap();
        assert_eq!(json["pageSize"], state.page_size);
        assert!(json.get("page_size").is_none());
        assert_eq!(json["query"]["pageSize"], state.page_size);

        let back: DatasetListResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back.page_size, state.page_size);
    }

    #[test]
    fn fetch_state_from_resource_value() {
        let value: Option<Result<u32, String>> = Some(Err("boom".to_string()));
        assert_eq!(FetchState::from(value), FetchState::Failed("boom".to_string()));
        assert_eq!(FetchState::<u32>::from(None::<Result<u32, String>>), FetchState::Pending);
    }

    #[test]
    fn stale_response_is_loading() {
        let mut store = FilterStore::new();
        let old = response_for(store.state(), vec![json!({"title": "a"})], 1);
        store.update_filter(FilterPatch::default().search("grid"));
        let view = reconcile(store.state(), &FetchState::Loaded(old), &CategoryLookup::default());
        assert_eq!(view, DiscoveryView::Loading);
    }

    #[test]
    fn server_empty_and_filtered_empty_are_distinct() {
        let mut store = FilterStore::new();
        let lookup = CategoryLookup::default();

        let empty = response_for(store.state(), vec![], 0);
        assert!(matches!(
            reconcile(store.state(), &FetchState::Loaded(empty), &lookup),
            DiscoveryView::Empty { reason: EmptyReason::NoResults, .. }
        ));

        store.toggle_license(License::OpenData);
        let only_commercial = response_for(store.state(), vec![json!({"license": "Commercial"})], 30);
        match reconcile(store.state(), &FetchState::Loaded(only_commercial), &lookup) {
            DiscoveryView::Empty { reason: EmptyReason::FilteredOut, pagination } => {
                assert_eq!(pagination.total_pages, 3);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn license_filter_keeps_server_pagination() {
        let mut store = FilterStore::new();
        store.update_filter(FilterPatch::default().page_size(3));
        store.toggle_license(License::OpenData);
        let response = response_for(
            store.state(),
            vec![
                json!({"id": "1", "license": "Open Data"}),
                json!({"id": "2", "license": "Commercial"}),
                json!({"id": "3"}),
            ],
            9,
        );
        let DiscoveryView::Ready(page) = reconcile(store.state(), &FetchState::Loaded(response), &CategoryLookup::default()) else {
            panic!("expected results");
        };
        assert_eq!(page.datasets.len(), 1);
        assert_eq!(page.datasets[0].id, "1");
        assert_eq!(page.server_item_count, 3);
        // navigation follows the server total, not the filtered count
        assert_eq!(page.pagination.total, 9);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn no_license_selection_keeps_everything() {
        let datasets = vec![
            Dataset::from_raw(&RawDataset(json!({"license": "Commercial"})), &CategoryLookup::default(), Default::default()),
            Dataset::from_raw(&RawDataset(json!({})), &CategoryLookup::default(), Default::default()),
        ];
        assert_eq!(filter_by_license(&datasets, &BTreeSet::new()), datasets);
    }
}
