//! Gym directory page: debounced store-name search plus local city/country
//! facets over the fetched baseline.

use std::collections::BTreeSet;

use dioxus::prelude::*;

use common::facet_filter::{FacetSelection, derive_displayed};
use common::gym::GymRecord;
use common::search_const::{FACET_CITY, FACET_COUNTRY, SEARCH_DEBOUNCE_MS};

use crate::api::gyms_api::{featured_gyms, search_gyms};
use crate::components::directory_components::facet_menu::{FacetSection, FilterMenu};
use crate::components::directory_components::gym_result_card::GymResultCard;
use crate::components::directory_components::search_bar::DirectorySearchBar;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::state::debounce::use_debounced;
use crate::state::search_controller::{SearchController, SearchPhase};

#[component]
pub fn GymsPage() -> Element {
    rsx! {
        Title { "Find Gyms | Hyrox Directory" }
        div {
            id: "x-gyms-page",
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
                "Find a Gym"
            }
            p {
                style: "font-size: 18px; color: #374151; max-width: 640px; margin: 0;",
                "Browse our curated list of Hyrox-friendly training centres worldwide. Type a gym name, or filter by city and country."
            }
            SuspendWrapper { GymsDirectoryLoader {} }
        }
    }
}

#[component]
fn GymsDirectoryLoader() -> Element {
    let featured = use_resource(move || featured_gyms()).suspend()?.cloned();
    match featured {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(fallback) => rsx! { GymsDirectoryClient { fallback } },
    }
}

/// Client widget owning the whole interaction: query signal, debounce,
/// search controller, facet selection and the derived display list.
#[component]
fn GymsDirectoryClient(fallback: ReadSignal<Vec<GymRecord>>) -> Element {
    let mut query = use_signal(String::new);
    let debounced_query = use_debounced(query.into(), SEARCH_DEBOUNCE_MS);
    let mut controller = use_signal(|| SearchController::new(fallback.peek().clone()));
    let mut selection = use_signal(FacetSelection::default);

    // each committed debounced query issues exactly one search request
    use_effect(move || {
        let q = debounced_query.read().clone();
        let ticket = controller.write().begin(&q);
        if let Some(ticket) = ticket {
            spawn(async move {
                let outcome = search_gyms(q).await;
                controller.write().apply(ticket, outcome);
            });
        }
    });

    let displayed =
        use_memo(move || derive_displayed(controller.read().baseline(), &selection.read()));
    let is_searching = use_memo(move || controller.read().phase() == SearchPhase::Pending);

    let city_options =
        use_memo(move || distinct_facet_values(&fallback.read(), |gym| gym.city.as_deref()));
    let country_options =
        use_memo(move || distinct_facet_values(&fallback.read(), |gym| gym.country.as_deref()));

    let reset = move |_| {
        query.set(String::new());
        selection.write().clear();
        controller.write().reset();
    };

    rsx! {
        div {
            id: "x-gyms-controls-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                flex-wrap: wrap;
            ",
            DirectorySearchBar { query, placeholder: "Type the gym name...".to_string() }
            FilterMenu {
                selection,
                sections: vec![
                    FacetSection::new("City", FACET_CITY, city_options()),
                    FacetSection::new("Country", FACET_COUNTRY, country_options()),
                ],
                with_cost_ranges: false,
            }
            ResetButton { onclick: reset }
        }

        if is_searching() {
            div {
                style: "font-size: 14px; color: #6B7280;",
                "Searching..."
            }
        }

        GymResultGrid { displayed }
    }
}

#[component]
fn GymResultGrid(displayed: ReadSignal<Vec<GymRecord>>) -> Element {
    if displayed.read().is_empty() {
        return rsx! {
            div {
                id: "x-gyms-no-results",
                style: "margin-top: 32px; font-size: 18px; color: #374151; text-align: center;",
                "No gyms match your criteria."
            }
        };
    }
    rsx! {
        div {
            id: "x-gyms-result-grid",
            style: "
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                gap: 20px;
                margin-top: 8px;
            ",
            for gym in displayed.read().iter().cloned() {
                div {
                    key: "{gym.id}",
                    GymResultCard { gym }
                }
            }
        }
    }
}

#[component]
pub fn ResetButton(onclick: Callback<Event<MouseData>>) -> Element {
    rsx! {
        button {
            style: "
                cursor: pointer;
                border: 2px solid #06B6D4;
                border-radius: 1000px;
                background-color: white;
                color: #0E7490;
                height: 28px;
                padding: 20px 16px;
                font-size: 15px;
                display: flex;
                align-items: center;
                flex-shrink: 0;
            ",
            onclick: move |event| {
                onclick.call(event);
            },
            "Reset"
        }
    }
}

/// Distinct non-null values of one record field, sorted for stable menus.
fn distinct_facet_values<R>(records: &[R], field: impl Fn(&R) -> Option<&str>) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| field(record))
        .map(|value| value.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_facet_values_dedupes_and_sorts() {
        let records = vec![
            Some("Paris".to_string()),
            None,
            Some("Berlin".to_string()),
            Some("Paris".to_string()),
        ];
        let values = distinct_facet_values(&records, |r| r.as_deref());
        assert_eq!(values, vec!["Berlin".to_string(), "Paris".to_string()]);
    }
}
