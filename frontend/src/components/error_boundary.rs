//! Error boundaries for rendering failures.
//!
//! The global boundary replaces the whole page and offers a way back to the
//! directory; the component boundary keeps the rest of the page alive and
//! only swaps out the section that failed.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |context: ErrorContext| {
                rsx! {
                    div {
                        id: "x-global-error",
                        style: "
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            gap: 12px;
                            padding: 40px;
                        ",
                        h1 {
                            style: "color: #B91C1C; font-size: 40px; margin: 0;",
                            "The directory hit an unexpected error"
                        }
                        p {
                            style: "color: #7F1D1D; font-size: 20px; margin: 0;",
                            "Failed in: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "color: #1D4ED8; font-size: 20px; border: 1px solid #1D4ED8; padding: 10px 16px; border-radius: 8px;",
                            "Back to the directory"
                        }
                        pre {
                            style: "color: #111827; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; text-wrap: auto; max-width: 700px;",
                            "{context:#?}"
                        }
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
            handle_error: |context: ErrorContext| {
                let error_txt = match context.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: #1D4ED8; font-size: 18px; border: 1px solid #1D4ED8; background: white; padding: 8px 14px; border-radius: 8px; margin: 15px; cursor: pointer;",
                            onclick: move |_| {
                                context.clear_errors();
                            },
                            "Try Again"
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

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            id: "x-component-error",
            width: "100%",
            height: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",

            h1 {
                style: "color: #B91C1C; font-size: 26px; margin: 5px;",
                "This section of the directory failed to load"
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #B91C1C; padding: 10px; border-radius: 8px; margin: 5px; text-wrap: auto; max-width: 500px; max-height: 400px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
