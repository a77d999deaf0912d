//! Result count, sort order and pagination controls above the result list.

use common::{
    discovery_result::DiscoveryView,
    filter_state::{FilterPatch, SortOption},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};

use crate::{
    components::discovery_components::filter_panel::SELECT_STYLE,
    data_definitions::discovery_context::DiscoveryContext,
};

#[component]
pub fn ResultListControls() -> Element {
    rsx! {
        div {
            id: "x-discovery-controls-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 7px 16px;
                height: 56px;
                width: 100%;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112);",
                ResultCountString {}
            }
            // empty space
            div {
                style: "
                flex-grow: 1;"
            }
            SortSelect {}
            PaginationControls {}
        }
    }
}

#[component]
fn ResultCountString() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let view = ctx.view;

    match &*view.read() {
        DiscoveryView::Loading => rsx! { "..." },
        DiscoveryView::Failed { .. } => rsx! { "! error" },
        DiscoveryView::Empty { pagination, .. } => rsx! { "{pagination.total} datasets found" },
        DiscoveryView::Ready(page) => {
            let total = page.pagination.total;
            if page.datasets.len() < page.server_item_count {
                let shown = page.datasets.len();
                rsx! { "{total} datasets found ({shown} on this page match the selected licenses)" }
            } else {
                rsx! { "{total} datasets found" }
            }
        }
    }
}

#[component]
fn SortSelect() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let selected = use_memo(move || ctx.filters.read().state().sort_order);

    rsx! {
        select {
            style: SELECT_STYLE,
            onchange: move |event: Event<FormData>| {
                match event.value().parse::<SortOption>() {
                    Ok(sort_order) => ctx.update_filter.call(FilterPatch::default().sort_order(sort_order)),
                    Err(e) => dioxus::logger::tracing::warn!("ignoring sort selection: {e}"),
                }
            },
            for sort_order in SortOption::ALL {
                option {
                    key: "{sort_order.as_str()}",
                    value: "{sort_order.as_str()}",
                    selected: selected() == sort_order,
                    "{sort_order.label()}"
                }
            }
        }
    }
}

#[component]
fn PaginationControls() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let view = ctx.view;
    let go_to_page = ctx.go_to_page;
    let pagination = use_memo(move || view.read().pagination());

    let Some(pagination) = pagination() else {
        return rsx! {};
    };
    if pagination.total_pages == 0 {
        return rsx! {};
    }

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 16px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: pagination.previous_disabled(),
                onclick: move |_| go_to_page.call(pagination.previous_page()),
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 21px;
                    font-weight: 400;
                ",
                "{pagination.label()}"
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: pagination.next_disabled(),
                onclick: move |_| go_to_page.call(pagination.next_page()),
            }
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                border: none;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 24px; height: 24px; color: {btn_color};" }
        }
    }
}
