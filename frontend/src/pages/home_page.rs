use dioxus::prelude::*;

use crate::components::product_search::product_search_form::ProductSearch;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Smart Search" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                align-items: center;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            ProductSearch {}
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        h1 {
            style: "
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
                margin: 0;
            ",
            "SmartSearch"
        }
    }
}
