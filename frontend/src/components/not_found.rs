//! Generic not-found view for detail lookups that miss.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundView(message: String) -> Element {
    rsx! {
        div {
            id: "x-not-found",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 16px;
                min-height: 60vh;
                color: #111827;
            ",
            h1 {
                style: "font-size: 34px; font-weight: 500; margin: 0;",
                "{message}"
            }
            Link {
                to: Route::HomePage {},
                span {
                    style: "color: #4F46E5; font-size: 20px;",
                    "Return to the directory"
                }
            }
        }
    }
}
