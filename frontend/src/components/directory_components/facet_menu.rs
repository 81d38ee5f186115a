//! Filter dropdown with single-select facet chips.

use dioxus::prelude::*;
use dioxus_free_icons::{
    Icon,
    icons::{
        md_navigation_icons::MdArrowDropDown,
        md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank},
    },
};

use common::facet_filter::{CostRange, FacetSelection};
use common::search_const::cost_ranges;

/// One exact-match facet offered by the menu: a display title, the facet key
/// understood by the filter engine, and the selectable values.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetSection {
    pub title: String,
    pub facet_name: String,
    pub options: Vec<String>,
}

impl FacetSection {
    pub fn new(title: &str, facet_name: &str, options: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            facet_name: facet_name.to_string(),
            options,
        }
    }
}

/// Dropdown button exposing the facet sections. Each facet is single-select;
/// clicking the selected value again clears it.
#[component]
pub fn FilterMenu(
    selection: Signal<FacetSelection>,
    sections: Vec<FacetSection>,
    with_cost_ranges: bool,
) -> Element {
    let mut is_expanded = use_signal(|| false);
    let is_filtered = use_memo(move || !selection.read().is_empty());
    let border_color = use_memo(move || {
        if is_filtered() { "rgba(37,99,235,0.9)" } else { "rgba(0,0,0,0.5)" }
    });

    rsx! {
        if is_expanded() {
            div {
                style: "position: relative; width: 0px; height: 0px; top: 0px; left: 0px;",
                div {
                    style: "
                        position: absolute;
                        top: 12px;
                        right: -40px;
                        background: white;
                        min-width: 300px;
                        max-width: 420px;
                        max-height: calc(100vh - 140px);
                        overflow-y: auto;
                        border: 1px solid rgba(0,0,0,0.5);
                        border-radius: 10px;
                        padding: 10px;
                        box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                        z-index: 1000;
                    ",
                    for section in sections.clone() {
                        FacetOptionGroup {
                            selection,
                            title: section.title.clone(),
                            facet_name: section.facet_name.clone(),
                            options: section.options.clone(),
                        }
                    }
                    if with_cost_ranges {
                        CostRangeGroup { selection }
                    }
                }
            }
            div {
                style: "
                    position: fixed;
                    top: 0px;
                    left: 0px;
                    z-index: 999;
                    background-color: rgba(0,0,0,0.1);
                    width: 100%;
                    height: 100%;
                ",
                onclick: move |_| {
                    is_expanded.set(false);
                },
            }
        }

        button {
            onclick: move |_| {
                let expanded = *is_expanded.read();
                is_expanded.set(!expanded);
            },
            style: "
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 6px;
                flex-direction: row;
                border: 2px solid {border_color()};
                border-radius: 1000px;
                background-color: white;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                position: relative;
                height: 28px;
                padding: 20px 16px;
                font-size: 15px;
                font-weight: 400;
                z-index: 1000;
                white-space: nowrap;
                flex-shrink: 0;
            ",
            "Filter"
            Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px; color:rgba(0,0,0,0.9);" }
        }
    }
}

#[component]
fn FacetOptionGroup(
    selection: Signal<FacetSelection>,
    title: String,
    facet_name: String,
    options: Vec<String>,
) -> Element {
    rsx! {
        div {
            style: "font-size: 14px; font-weight: 600; color: #374151; padding: 6px 4px;",
            "{title}"
        }
        ul {
            style: "list-style: none; margin: 0; padding: 0 0 6px 0;",
            for option in options {
                li {
                    key: "{option}",
                    FacetOptionRow {
                        selection,
                        facet_name: facet_name.clone(),
                        value: option,
                    }
                }
            }
        }
    }
}

#[component]
fn FacetOptionRow(
    mut selection: Signal<FacetSelection>,
    facet_name: String,
    value: String,
) -> Element {
    let is_checked = selection.read().is_field_selected(&facet_name, &value);
    let toggle = {
        let facet_name = facet_name.clone();
        let value = value.clone();
        move |_| {
            selection.write().toggle_field(&facet_name, &value);
        }
    };
    rsx! {
        FacetCheckboxRow { label: value.clone(), is_checked, onclick: toggle }
    }
}

#[component]
fn CostRangeGroup(selection: Signal<FacetSelection>) -> Element {
    rsx! {
        div {
            style: "font-size: 14px; font-weight: 600; color: #374151; padding: 6px 4px;",
            "Cost Range"
        }
        ul {
            style: "list-style: none; margin: 0; padding: 0 0 6px 0;",
            for range in cost_ranges() {
                li {
                    key: "{range.label}",
                    CostRangeRow { selection, range }
                }
            }
        }
    }
}

#[component]
fn CostRangeRow(mut selection: Signal<FacetSelection>, range: CostRange) -> Element {
    let is_checked = selection.read().is_cost_range_selected(&range);
    let toggle = {
        let range = range.clone();
        move |_| {
            selection.write().toggle_cost_range(&range);
        }
    };
    rsx! {
        FacetCheckboxRow { label: range.label.clone(), is_checked, onclick: toggle }
    }
}

#[component]
fn FacetCheckboxRow(label: String, is_checked: bool, onclick: Callback<Event<MouseData>>) -> Element {
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 4px;
                align-items: center;
            ",
            onclick: move |event| {
                onclick.call(event);
            },

            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    font-weight: 400;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{label}"
            }
        }
    }
}
