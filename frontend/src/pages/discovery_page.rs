use dioxus::{logger::tracing, prelude::*};

use common::{
    category::CategoryLookup,
    discovery_const::CATEGORY_PAGE_SIZE_HINT,
    discovery_result::{DiscoveryView, FetchState, reconcile},
    filter_state::{FilterPatch, FilterStore, License},
    remote_query::project,
};
use crate::{
    api::discovery_api::{list_categories, list_datasets},
    components::{
        discovery_components::{
            filter_panel::FilterPanel, result_list_controls::ResultListControls,
            result_list_view::ResultListView, search_input_bar::SearchInputBar,
        },
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::{discovery_context::DiscoveryContext, display_context::DisplayContext},
};

/// Dataset discovery page
#[component]
pub fn DiscoveryPage() -> Element {
    let display = use_context::<DisplayContext>();
    let theme = display.theme;

    let mut filters = use_signal(FilterStore::new);
    // the projection is derived from the store after the page reset has been applied,
    // so a filter change never goes out with the previous page number
    let remote_query = use_memo(move || project(filters.read().state()));

    let datasets = use_resource(move || list_datasets(remote_query()));
    let categories = use_resource(move || list_categories(CATEGORY_PAGE_SIZE_HINT));

    let category_lookup = use_memo(move || match &*categories.read() {
        Some(Ok(response)) => CategoryLookup::from_response(response),
        Some(Err(e)) => {
            tracing::warn!("categories unavailable: {e}");
            CategoryLookup::default()
        }
        None => CategoryLookup::default(),
    });

    let view = use_memo(move || {
        let fetch = FetchState::from((*datasets.read()).clone());
        reconcile(filters.read().state(), &fetch, &category_lookup.read())
    });

    let update_filter = use_callback(move |patch: FilterPatch| {
        tracing::debug!("filter update: {patch:?}");
        filters.write().update_filter(patch);
    });
    let toggle_license = use_callback(move |license: License| {
        filters.write().toggle_license(license);
    });
    let go_to_page = use_callback(move |page: u32| {
        // read the shown answer before writing: the view memo depends on the store
        let shown = view.read().clone();
        go_to_page_in_view(&mut filters.write(), page, &shown);
    });
    let clear_filters = use_callback(move |_: ()| {
        filters.write().clear_filters();
    });

    use_context_provider(move || DiscoveryContext {
        filters: filters.into(),
        categories: category_lookup.into(),
        view: view.into(),
        update_filter,
        toggle_license,
        go_to_page,
        clear_filters,
    });

    let page_background = theme().page_background();
    let text_color = theme().text_color();

    rsx! {
        Title { "Dataset Marketplace - Discover" }
        div {
            id: "x-discovery-page-root",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
                background: {page_background};
                color: {text_color};
            ",
            div {
                id: "x-discovery-search-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputBar {}
            }
            div {
                id: "x-discovery-bottom-space",
                style: "
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                ",
                div {
                    id: "x-discovery-filter-panel",
                    style: "
                        height: 100%;
                        width: 280px;
                        flex-shrink: 0;
                        overflow-y: auto;
                        border-right: 1px solid rgba(0,0,0,0.1);
                    ",
                    FilterPanel {}
                }
                div {
                    id: "x-discovery-results",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        min-width: 400px;
                        display: flex;
                        flex-direction: column;
                    ",
                    ResultListControls {}
                    div {
                        style: "
                            flex-grow: 1;
                            width: 100%;
                            max-height: calc(100% - 56px);
                        ",
                        SuspendWrapper {
                            ResultListView {}
                        }
                    }
                }
            }
        }
    }
}

/// Navigate within the page count of the answer currently shown; before any
/// answer only page 1 is reachable.
fn go_to_page_in_view(store: &mut FilterStore, page: u32, view: &DiscoveryView) {
    let total_pages = view.pagination().map(|p| p.total_pages).unwrap_or(1);
    store.go_to_page(page, total_pages);
}


#[cfg(test)]
mod tests {
    use common::discovery_result::{EmptyReason, Pagination};

    use super::*;

    #[test]
    fn navigation_is_bounded_by_the_shown_answer() {
        let mut store = FilterStore::new();
        let view = DiscoveryView::Empty { reason: EmptyReason::FilteredOut, pagination: Pagination::new(1, 47, 10) };

        go_to_page_in_view(&mut store, 3, &view);
        assert_eq!(store.state().page, 3);
        go_to_page_in_view(&mut store, 9, &view);
        assert_eq!(store.state().page, 5);
    }

    #[test]
    fn navigation_waits_for_an_answer() {
        let mut store = FilterStore::new();
        go_to_page_in_view(&mut store, 4, &DiscoveryView::Loading);
        assert_eq!(store.state().page, 1);
    }
}
