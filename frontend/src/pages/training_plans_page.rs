//! Training-plan directory page. The full plan list is fetched once; title
//! search and every facet run client side over that set.

use dioxus::prelude::*;

use common::facet_filter::{FacetSelection, derive_displayed};
use common::search_const::{
    DAYS_PER_WEEK_OPTIONS, FACET_DAYS_PER_WEEK, FACET_FITNESS_LEVEL, FITNESS_LEVELS,
};
use common::training_plan::PlanRecord;

use crate::api::plans_api::list_plans;
use crate::components::directory_components::facet_menu::{FacetSection, FilterMenu};
use crate::components::directory_components::plan_result_card::PlanResultCard;
use crate::components::directory_components::search_bar::DirectorySearchBar;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::pages::gyms_page::ResetButton;

#[component]
pub fn TrainingPlansPage() -> Element {
    rsx! {
        Title { "Training Plans | Hyrox Directory" }
        div {
            id: "x-plans-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 36px 40px;
                max-width: 1100px;
                margin: 0 auto;
                box-sizing: border-box;
            ",
            h1 {
                style: "font-size: 38px; font-weight: 800; color: #0F172A; margin: 0;",
                "Browse Training Plans"
            }
            p {
                style: "font-size: 18px; color: #374151; max-width: 640px; margin: 0;",
                "Top-rated Hyrox training plans from beginner to advanced. Filter by fitness level, days per week, or cost."
            }
            SuspendWrapper { PlansDirectoryLoader {} }
        }
    }
}

#[component]
fn PlansDirectoryLoader() -> Element {
    let plans = use_resource(move || list_plans()).suspend()?.cloned();
    match plans {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(all_plans) => rsx! { PlansDirectoryClient { all_plans } },
    }
}

#[component]
fn PlansDirectoryClient(all_plans: ReadSignal<Vec<PlanRecord>>) -> Element {
    let mut selection = use_signal(FacetSelection::default);
    // the title facet is evaluated client side on every keystroke, without
    // debounce; it layers on top of the fetched baseline
    let mut title_query = use_signal(String::new);

    use_effect(move || {
        let q = title_query.read().clone();
        selection.write().title_query = q;
    });

    let displayed = use_memo(move || derive_displayed(&all_plans.read(), &selection.read()));
    let placeholder = use_memo(move || format!("Search among {} plans", all_plans.read().len()));

    let reset = move |_| {
        title_query.set(String::new());
        selection.write().clear();
    };

    rsx! {
        div {
            id: "x-plans-controls-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                flex-wrap: wrap;
            ",
            DirectorySearchBar { query: title_query, placeholder: placeholder() }
            FilterMenu {
                selection,
                sections: vec![
                    FacetSection::new(
                        "Fitness Level",
                        FACET_FITNESS_LEVEL,
                        FITNESS_LEVELS.iter().map(|s| s.to_string()).collect(),
                    ),
                    FacetSection::new(
                        "Days/Week",
                        FACET_DAYS_PER_WEEK,
                        DAYS_PER_WEEK_OPTIONS.iter().map(|s| s.to_string()).collect(),
                    ),
                ],
                with_cost_ranges: true,
            }
            ResetButton { onclick: reset }
        }

        PlanResultGrid { displayed }
    }
}

#[component]
fn PlanResultGrid(displayed: ReadSignal<Vec<PlanRecord>>) -> Element {
    if displayed.read().is_empty() {
        return rsx! {
            div {
                id: "x-plans-no-results",
                style: "margin-top: 32px; font-size: 18px; color: #374151; text-align: center;",
                "No training plans match your criteria."
            }
        };
    }
    rsx! {
        div {
            id: "x-plans-result-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 20px;
                margin-top: 8px;
            ",
            for plan in displayed.read().iter().cloned() {
                div {
                    key: "{plan.id}",
                    PlanResultCard { plan }
                }
            }
        }
    }
}
