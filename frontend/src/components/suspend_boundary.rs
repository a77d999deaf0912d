use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

/// Suspense plus error boundary around a panel of the discovery page.
#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    height: "100%",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "font-size: 20px; opacity: 0.7; padding: 10px 16px; margin: 15px;",
            "Loading datasets..."
        }
    }
}
