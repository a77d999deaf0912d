use common::filter_state::FilterPatch;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::data_definitions::{discovery_context::DiscoveryContext, display_context::DisplayContext};


#[component]
pub fn SearchInputBar() -> Element {
    let ctx = use_context::<DiscoveryContext>();
    let theme = use_context::<DisplayContext>().theme;
    let filters = ctx.filters;
    let update_filter = ctx.update_filter;

    let committed_search = use_memo(move || filters.read().state().search.clone());
    let mut draft_search = use_signal(|| committed_search());
    // clearing filters (or any other change of the committed value) must show up in the box
    use_effect(move || {
        draft_search.set(committed_search());
    });
    let search_has_changed = use_memo(move || draft_search() != committed_search());
    let search_button_color = use_memo(move || if search_has_changed() { "blue" } else { "#6B7280" });

    let trigger_search = move |_: ()| {
        update_filter.call(FilterPatch::default().search(draft_search.read().trim().to_string()));
    };
    let search_oninput = move |event: Event<FormData>| {
        draft_search.set(event.value());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    let box_background = theme().card_background();
    let text_color = theme().text_color();

    rsx! {
        div {
            id: "x-discovery-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: {box_background};
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: {text_color};
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search datasets",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: {text_color};
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{draft_search}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
    }
}
