//! Search-as-you-type input box.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

/// Text input bound to `query`. The caller decides what happens with the
/// value (debounced remote search or direct client-side filtering).
#[component]
pub fn DirectorySearchBar(mut query: Signal<String>, placeholder: String) -> Element {
    rsx! {
        div {
            id: "x-directory-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                flex: 1;
                min-width: 260px;
                max-width: 500px;
                box-sizing: border-box;
            ",

            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 16px;
                    font-weight: 400;
                ",
                value: "{query}",
                oninput: move |event: Event<FormData>| {
                    query.set(event.value());
                },
            }
        }
    }
}
