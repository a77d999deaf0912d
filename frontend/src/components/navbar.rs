//! Top bar with the marketplace title and the theme toggle.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{go_icons::GoDatabase, md_action_icons::MdInvertColors}};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::display_context::{DisplayContext, Theme};
use crate::routes::Route;

/// Shared layout: top bar above the routed page.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",
            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 14px;
                    height: 52px;
                    flex-shrink: 0;
                    padding: 0 16px;
                    background-color: #1C212D;
                    color: white;
                ",
                Link {
                    to: Route::DiscoveryPage {},
                    span {
                        style: "display: flex; align-items: center; gap: 10px; color: white;",
                        Icon { icon: GoDatabase, style: "width: 24px; height: 24px;" }
                        span { style: "font-size: 18px; font-weight: 500;", "Dataset Marketplace" }
                    }
                }
                div { style: "flex-grow: 1;" }
                ThemeToggle {}
            }
            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 0;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_context::<DisplayContext>().theme;
    let label = match theme() {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };
    rsx! {
        button {
            title: "{label}",
            style: "background: none; border: none; color: white; cursor: pointer; padding: 4px;",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            Icon { icon: MdInvertColors, style: "width: 24px; height: 24px;" }
        }
    }
}
