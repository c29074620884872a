//! Error boundary wrapping the routed pages.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    div {
                        style: "display:flex; flex-direction:column; gap: 12px; margin: 15px; padding: 10px; border: 1px solid red; border-radius: 5px;",
                        h1 { style: "color:red; font-size: 34px; margin: 0;", "Something went wrong" }
                        p { style: "color:darkred; font-size: 18px; margin: 0;", "Boundary: {boundary_name}" }
                        pre { style: "color:black; text-wrap: auto; max-height: 400px; overflow-y: auto;", "{error_txt}" }
                        a { href: "/", style: "color:blue; font-size: 18px;", "Back to search" }
                    }
                }
            },
            children
        }
    }
}
