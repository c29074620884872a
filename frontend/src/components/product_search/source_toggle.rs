use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};


/// One checkbox of a source set. `on_change` receives the new checked state.
#[component]
pub fn SourceToggle(label: ReadSignal<String>, checked: ReadSignal<bool>, on_change: Callback<bool>) -> Element {
    rsx! {
        div {
            class: "x-source-toggle",
            role: "checkbox",
            aria_checked: "{checked}",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                cursor: pointer;
                padding: 4px 10px;
                border: 1px solid #0D6EFD;
                border-radius: 6px;
                align-items: center;
                user-select: none;
            ",
            onclick: move |_e| {
                on_change(!checked());
            },

            if checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: #0D6EFD; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: #0D6EFD; flex-shrink: 0;" }
            }
            span {
                style: "font-size: 16px; color: #0D6EFD;",
                "{label}"
            }
        }
    }
}
