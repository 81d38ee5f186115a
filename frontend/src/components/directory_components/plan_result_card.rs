//! Training-plan result card component.

use dioxus::prelude::*;

use common::training_plan::PlanRecord;

use crate::routes::Route;

const PLAN_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400?text=Plan";

#[component]
pub fn PlanResultCard(plan: ReadSignal<PlanRecord>) -> Element {
    let plan = plan.read().clone();
    let image = plan
        .main_image_url
        .clone()
        .unwrap_or_else(|| PLAN_PLACEHOLDER_IMAGE.to_string());

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid #AAAAAA33;
                border-radius: 12px;
                overflow: hidden;
                box-shadow: 0 2px 8px 0 rgba(0, 0, 0, 0.08);
                width: 100%;
                box-sizing: border-box;
            ",

            img {
                src: "{image}",
                alt: "{plan.display_title()}",
                style: "width: 100%; height: 180px; object-fit: cover; background: #E5E7EB;",
            }

            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                    padding: 14px 16px;
                    text-align: left;
                ",
                div {
                    style: "font-size: 18px; font-weight: 700; color: rgb(0,0,0);",
                    "{plan.display_title()}"
                }
                if let Some(price_text) = plan.price_text.as_deref() {
                    div {
                        style: "font-size: 14px; color: #374151;",
                        "{price_text}"
                    }
                }
                if let Some(snippet) = plan.short_description() {
                    div {
                        style: "font-size: 13px; color: #6B7280;",
                        "{snippet}"
                    }
                }
                if let Some(slug) = plan.slug.clone() {
                    Link {
                        to: Route::PlanDetailPage { slug },
                        span {
                            style: "font-size: 14px; font-weight: 600; color: #DB2777;",
                            "View Plan"
                        }
                    }
                }
            }
        }
    }
}
