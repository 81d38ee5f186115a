//! Suspense wrapper shared by the directory pages.
//!
//! Every page body loads its data through a suspended resource; this wrapper
//! provides the loading view and the error boundary around it.

use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

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
            style: "color: #111827; font-size: 20px; border: 1px solid #D1D5DB; background: white; padding: 10px 16px; border-radius: 8px; margin: 15px;",
            "Loading the directory..."
        }
    }
}
