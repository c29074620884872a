use dioxus::prelude::*;

/// Shown while at least one search is in flight.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color:black; font-size: 20px; border: 1px solid black; padding: 10px; border-radius: 5px; margin: 15px;",
            "Searching..."
        }
    }
}
