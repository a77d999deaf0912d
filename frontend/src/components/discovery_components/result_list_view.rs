//! Result list for the discovery page: one branch per [`DiscoveryView`] state.

use common::discovery_result::{DiscoveryView, EmptyReason};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdInfo};

use crate::{
    components::{
        discovery_components::dataset_card::DatasetCard,
        error_boundary::ComponentErrorDisplay,
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::discovery_context::DiscoveryContext,
};

#[component]
pub fn ResultListView() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let view = ctx.view;

    match &*view.read() {
        DiscoveryView::Loading => rsx! {
            div {
                style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center;",
                LoadingIndicator {}
            }
        },
        DiscoveryView::Failed { message } => rsx! {
            ComponentErrorDisplay {
                error_txt: message.clone(),
                p { style: "margin: 10px;", "The filters stay available; change them or try again later." }
            }
        },
        DiscoveryView::Empty { reason: EmptyReason::NoResults, .. } => rsx! {
            EmptyMessage {
                title: "No datasets found",
                hint: "Try a different search or fewer filters.",
            }
        },
        DiscoveryView::Empty { reason: EmptyReason::FilteredOut, .. } => rsx! {
            EmptyMessage {
                title: "No datasets on this page match the selected licenses",
                hint: "Other pages may still have matches, or clear the license filter.",
            }
        },
        DiscoveryView::Ready(page) => {
            let offset = (page.pagination.page.saturating_sub(1) as usize) * page.pagination.page_size as usize;
            rsx! {
                div {
                    id: "x-discovery-result-list",
                    style: "
                        height: 100%;
                        width: 100%;
                        overflow-y: auto;
                        padding-bottom: 20px;
                        box-sizing: border-box;
                    ",
                    for (index, dataset) in page.datasets.iter().cloned().enumerate() {
                        DatasetCard {
                            key: "{index}-{dataset.id}",
                            dataset,
                            position: offset + index + 1,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmptyMessage(title: String, hint: String) -> Element {
    rsx! {
        div {
            style: "
                width: 100%;
                height: 100%;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 8px;
            ",
            Icon { icon: MdInfo, style: "width: 40px; height: 40px; opacity: 0.5;" }
            h2 { style: "font-size: 22px; font-weight: 400; margin: 0;", "{title}" }
            p { style: "font-size: 15px; opacity: 0.7; margin: 0;", "{hint}" }
        }
    }
}
