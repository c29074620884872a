use dioxus::prelude::*;


/// Shows the latest search response as indented JSON, or nothing before the first success.
#[component]
pub fn SearchResultsView(rendered: ReadSignal<Option<String>>) -> Element {
    let Some(text) = rendered() else {
        return rsx! {};
    };
    rsx! {
        div {
            id: "x-search-results",
            style: "
                width: 100%;
                max-width: 900px;
            ",
            h2 { "Search Results:" }
            pre {
                style: "
                    text-align: left;
                    background-color: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 8px;
                    padding: 14px;
                    overflow: auto;
                    text-wrap: auto;
                ",
                "{text}"
            }
        }
    }
}
