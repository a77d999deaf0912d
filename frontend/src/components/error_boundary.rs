//! Error boundaries and the error panel shared with the result list.

use dioxus::prelude::*;

const ERROR_BOX_STYLE: &str = "border: 1px solid #DC2626; padding: 10px; border-radius: 5px; margin: 10px;";

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {boundary_name}: {err:?}");
                rsx! {
                    h1 {
                        style: "color: #DC2626; font-size: 40px; {ERROR_BOX_STYLE}",
                        "Something went wrong"
                    }
                    p {
                        style: "color: #991B1B; font-size: 20px; {ERROR_BOX_STYLE}",
                        "Boundary: {boundary_name}"
                    }
                    a {
                        href: "/",
                        style: "color: #4F46E5; font-size: 20px; border: 1px solid #4F46E5; padding: 10px; border-radius: 5px; margin: 10px;",
                        "Back to dataset discovery"
                    }
                    pre {
                        style: "{ERROR_BOX_STYLE} text-wrap: auto;",
                        "{err:#?}"
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #4F46E5; font-size: 18px; border: 1px solid #4F46E5; padding: 8px 14px; border-radius: 5px; margin: 10px; cursor: pointer;",
                            onclick: move |_| err.clear_errors(),
                            "Try again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// Error panel that leaves the surrounding layout usable.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h2 {
                style: "color: #DC2626; font-size: 26px; margin: 5px;",
                "Could not load datasets"
            }

            pre {
                style: "color: #991B1B; {ERROR_BOX_STYLE} text-wrap: auto; max-width: 520px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
