//! Product search form: category, price range, source sets and submit.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::{
    search_query::ProductSearchForm,
    search_result::SearchResultState,
    search_sources::{DiscussionSite, Retailer, SearchSource},
    source_selection::SourceSelection,
    submission::SubmissionTracker,
};
use crate::{
    api::search_api::run_product_search,
    components::{
        product_search::{search_results_view::SearchResultsView, source_toggle::SourceToggle},
        suspend_boundary::LoadingIndicator,
    },
};


const FIELD_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 6px;
    width: 100%;
    max-width: 300px;
    margin-bottom: 8px;
    text-align: left;
";

const INPUT_STYLE: &str = "
    flex: 1;
    min-width: 0;
    padding: 6px 12px;
    font-size: 16px;
    border: 1px solid #CED4DA;
    border-radius: 6px;
";

#[component]
pub fn ProductSearch() -> Element {
    let form = use_signal(ProductSearchForm::default);
    let mut results = use_signal(SearchResultState::default);
    let mut tracker = use_signal(SubmissionTracker::default);

    // Submissions are not serialized: a second submit while one is in flight starts
    // another attempt, and whichever answers last owns the result.
    let on_submit = move |e: Event<FormData>| {
        e.prevent_default();
        let unparsable = form.read().unparsable_price_fields();
        if !unparsable.is_empty() {
            tracing::warn!("No numeric prefix in {:?}, sending null", unparsable);
        }
        let (ticket, request) = tracker.write().begin(&form.read());
        tracing::info!("Search {:?} started: {:?}", ticket, request);
        spawn(async move {
            let outcome = run_product_search(request).await;
            if let Err(e) = tracker.write().finish(ticket, outcome, &mut results.write()) {
                tracing::error!("Search {:?} failed: {e}", ticket);
            }
        });
    };

    let rendered = results.read().latest().map(|r| r.pretty());
    let searching = tracker.read().in_flight() > 0;

    rsx! {
        form {
            id: "x-product-search-form",
            style: "
                display: flex;
                flex-direction: column;
                justify-content: center;
                align-items: center;
                width: 100%;
            ",
            onsubmit: on_submit,

            CategoryInput { form }
            PriceRangeInputs { form }
            SiteToggles { form }
            RetailerToggles { form }

            div {
                style: FIELD_STYLE,
                button {
                    class: "x-search-submit",
                    r#type: "submit",
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 6px;
                        width: 100%;
                        padding: 8px;
                        font-size: 16px;
                        color: #198754;
                        background: white;
                        border: 1px solid #198754;
                        border-radius: 6px;
                        cursor: pointer;
                    ",
                    Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                    "Search"
                }
            }
        }
        if searching {
            LoadingIndicator {}
        }
        SearchResultsView { rendered }
    }
}

#[component]
fn CategoryInput(mut form: Signal<ProductSearchForm>) -> Element {
    rsx! {
        div {
            style: FIELD_STYLE,
            label { r#for: "productType", "Product Category" }
            input {
                id: "productType",
                r#type: "text",
                placeholder: "Enter a product category",
                style: INPUT_STYLE,
                value: "{form.read().category}",
                oninput: move |e| form.write().set_category(e.value()),
            }
        }
    }
}

#[component]
fn PriceRangeInputs(mut form: Signal<ProductSearchForm>) -> Element {
    rsx! {
        div {
            style: FIELD_STYLE,
            label { r#for: "minPrice", "Price Range" }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                input {
                    id: "minPrice",
                    r#type: "text",
                    placeholder: "Min price",
                    style: INPUT_STYLE,
                    value: "{form.read().min_price_text}",
                    oninput: move |e| form.write().set_min_price_text(e.value()),
                }
                input {
                    id: "maxPrice",
                    r#type: "text",
                    placeholder: "Max price",
                    style: INPUT_STYLE,
                    value: "{form.read().max_price_text}",
                    oninput: move |e| form.write().set_max_price_text(e.value()),
                }
            }
        }
    }
}

#[component]
fn SiteToggles(mut form: Signal<ProductSearchForm>) -> Element {
    rsx! {
        div {
            style: FIELD_STYLE,
            label { "Sites to search" }
            div {
                style: "display: flex; flex-direction: row; justify-content: space-between;",
                for site in DiscussionSite::ALL.iter().copied() {
                    SourceToggle {
                        key: "{site.wire_id()}",
                        label: site.display_label().to_string(),
                        checked: form.read().sites.is_selected(site),
                        on_change: move |checked: bool| form.write().set_site(site, checked),
                    }
                }
            }
        }
    }
}

#[component]
fn RetailerToggles(mut form: Signal<ProductSearchForm>) -> Element {
    rsx! {
        div {
            style: FIELD_STYLE,
            label { "Pick a retailer" }
            div {
                style: "display: flex; flex-direction: row; justify-content: space-between;",
                for retailer in Retailer::ALL.iter().copied() {
                    SourceToggle {
                        key: "{retailer.wire_id()}",
                        label: retailer.display_label().to_string(),
                        checked: form.read().retailers.is_selected(retailer),
                        on_change: move |checked: bool| form.write().set_retailer(retailer, checked),
                    }
                }
            }
        }
    }
}
