//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdHome, MdSearch};
use dioxus_free_icons::icons::md_image_icons::MdStyle;
use dioxus_free_icons::{Icon, IconShape};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

/// Shared navbar layout wrapping every page.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                min-height: 100%;
            ",

            div {
                id: "x-nav-top-bar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 28px;
                    height: 60px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    border-bottom: 1px solid #000000;
                    flex-shrink: 0;
                ",

                NavbarLogo {}

                NavLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                NavLink { to: Route::GymsPage {}, icon: MdSearch, label: "Find a Gym" }
                NavLink { to: Route::TrainingPlansPage {}, icon: MdStyle, label: "Training Plans" }
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            span {
                style: "color: white; font-size: 22px; font-weight: 700; letter-spacing: 0.04em;",
                "HYROX "
                span { style: "color: #F472B6;", "DIRECTORY" }
            }
        }
    }
}

#[component]
fn NavLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    color: white;
                    font-size: 16px;
                ",
                Icon { icon: icon, style: "width: 20px; height: 20px;" }
                "{label}"
            }
        }
    }
}
