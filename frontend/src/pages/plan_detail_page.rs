//! Training-plan detail page, looked up by slug.

use dioxus::prelude::*;

use common::training_plan::PlanRecord;

use crate::api::plans_api::get_plan_by_slug;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::not_found::NotFoundView;
use crate::components::suspend_boundary::SuspendWrapper;

const PLAN_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x600?text=Plan";

#[component]
pub fn PlanDetailPage(slug: String) -> Element {
    rsx! {
        SuspendWrapper { PlanDetailLoader { slug } }
    }
}

#[component]
fn PlanDetailLoader(slug: ReadSignal<String>) -> Element {
    let plan = use_resource(move || {
        let slug = slug.read().clone();
        get_plan_by_slug(slug)
    })
    .suspend()?
    .cloned();

    match plan {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(None) => rsx! {
            Title { "Plan Not Found | Hyrox Directory" }
            NotFoundView { message: "Training plan not found".to_string() }
        },
        Ok(Some(plan)) => rsx! { PlanDetailView { plan } },
    }
}

#[component]
fn PlanDetailView(plan: ReadSignal<PlanRecord>) -> Element {
    let plan = plan.read().clone();
    let image = plan
        .main_image_url
        .clone()
        .unwrap_or_else(|| PLAN_PLACEHOLDER_IMAGE.to_string());
    let coaches_line = plan.coaches.clone().map(|coaches| coaches.join(", "));

    rsx! {
        Title { "{plan.display_title()} | Hyrox Training Plan" }
        div {
            id: "x-plan-detail",
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                padding: 40px;
                max-width: 900px;
                margin: 0 auto;
                box-sizing: border-box;
            ",

            h1 {
                style: "font-size: 36px; font-weight: 700; color: #0F172A; margin: 0;",
                "{plan.display_title()}"
            }

            img {
                src: "{image}",
                alt: "{plan.display_title()}",
                style: "width: 100%; max-height: 420px; object-fit: cover; border-radius: 8px;",
            }

            QuickHitterGrid { plan: plan.clone() }

            if let Some(description) = plan.description.as_deref() {
                p {
                    style: "font-size: 16px; color: #374151; line-height: 1.7;",
                    "{description}"
                }
            }

            if let Some(coaches) = coaches_line {
                div {
                    style: "font-size: 15px; color: #111827;",
                    strong { "Coaches: " }
                    "{coaches}"
                }
            }

            if let Some(link) = plan.external_link.as_deref() {
                a {
                    href: "{link}",
                    target: "_blank",
                    style: "color: #2563EB; font-size: 15px;",
                    "Get This Plan"
                }
            }
        }
    }
}

/// Compact label/value grid for the plan's key facts. Missing values render
/// a literal dash rather than dropping the row.
#[component]
fn QuickHitterGrid(plan: PlanRecord) -> Element {
    let quick_hitters: Vec<(&str, String)> = vec![
        ("Category", plan.category.clone()),
        ("Fitness Level", plan.fitness_level.clone()),
        ("Daily Training Time", plan.daily_training_time.clone()),
        ("Sessions per Day", plan.sessions_per_day.clone()),
        ("Days per Week", plan.days_per_week.clone()),
        ("Hours per Week", plan.hours_per_week.clone()),
        ("Price", plan.price_text.clone()),
    ]
    .into_iter()
    .map(|(label, value)| (label, value.unwrap_or_else(|| "-".to_string())))
    .collect();

    rsx! {
        div {
            id: "x-plan-quick-hitters",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                gap: 12px;
            ",
            for (label, value) in quick_hitters {
                div {
                    key: "{label}",
                    style: "
                        background: white;
                        border: 1px solid #E5E7EB;
                        border-radius: 8px;
                        padding: 10px 14px;
                    ",
                    div {
                        style: "font-size: 12px; color: #6B7280; text-transform: uppercase; letter-spacing: 0.05em;",
                        "{label}"
                    }
                    div {
                        style: "font-size: 16px; color: #111827; font-weight: 600;",
                        "{value}"
                    }
                }
            }
        }
    }
}
