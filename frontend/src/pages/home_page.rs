use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_image_icons::MdStyle;

use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Hyrox Directory - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                FindGymCard {}
                TrainingPlansCard {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Find Your Perfect" }
            span { style: "color:#DB2777;", "Hyrox Training" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 28px;
                line-height: 1.6;
                max-width: 640px;
                font-weight: 500;
            ",
            "We reviewed 40+ Hyrox workout programs and hundreds of training centres so you don't have to. Save hours of research and pick the right one for you."
        }
    }
}

#[component]
fn FindGymCard() -> Element {
    rsx! {
        div {
            id: "x-card-find-gym",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 480px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #1E3A8A 0%, #3B82F6 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "display:flex; align-items:center; gap: 10px; font-size: 28px; font-weight: 500;",
                Icon { icon: MdSearch, style: "width: 28px; height: 28px;" }
                "Find a Gym"
            }

            div {
                style: "
                    font-size: 18px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Discover Hyrox-friendly training centres worldwide. Start typing a name and filter by city or country."
            }

            div { style: "flex-grow: 1;" }

            Link {
                to: Route::GymsPage {},
                span {
                    style: "
                        display: inline-block;
                        background: white;
                        color: #1E3A8A;
                        font-weight: 700;
                        padding: 10px 18px;
                        border-radius: 9999px;
                    ",
                    "Browse Gyms"
                }
            }
        }
    }
}

#[component]
fn TrainingPlansCard() -> Element {
    rsx! {
        div {
            id: "x-card-training-plans",
            style: "
                display:flex;
                flex-direction: column;
                gap: 14px;
                width: 480px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #831843 0%, #EC4899 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",

            div {
                style: "display:flex; align-items:center; gap: 10px; font-size: 28px; font-weight: 500;",
                Icon { icon: MdStyle, style: "width: 28px; height: 28px;" }
                "Training Plans"
            }

            div {
                style: "
                    font-size: 18px;
                    font-weight: 500;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                ",
                "Compare top-rated Hyrox training plans by fitness level, weekly commitment and cost, from beginner to Rx."
            }

            div { style: "flex-grow: 1;" }

            Link {
                to: Route::TrainingPlansPage {},
                span {
                    style: "
                        display: inline-block;
                        background: white;
                        color: #831843;
                        font-weight: 700;
                        padding: 10px 18px;
                        border-radius: 9999px;
                    ",
                    "Browse Plans"
                }
            }
        }
    }
}
