//! Client-side facet filtering over an already-fetched result set.
//!
//! The displayed list is always derived: `derive_displayed` intersects the
//! baseline rows with every active predicate and never mutates the baseline.
//! Baselines are capped at a few dozen rows, so a linear scan per recompute
//! is fine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A record the facet engine can inspect. Field facets compare exact string
/// values; the price and title accessors back the two specialized facets.
pub trait FacetedRecord {
    /// Value of the named exact-match facet field, if the record has one.
    fn facet_field(&self, name: &str) -> Option<&str>;

    fn price_text(&self) -> Option<&str> {
        None
    }

    fn title_text(&self) -> Option<&str> {
        None
    }
}

/// A half-open price bucket: `min <= magnitude < max`. `max == None` means
/// unbounded above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub label: String,
    pub min: u32,
    pub max: Option<u32>,
}

impl CostRange {
    pub fn new(label: &str, min: u32, max: Option<u32>) -> Self {
        Self { label: label.to_string(), min, max }
    }

    pub fn contains(&self, magnitude: u32) -> bool {
        magnitude >= self.min && self.max.map_or(true, |max| magnitude < max)
    }
}

/// Numeric magnitude of a free-text price: the first run of ASCII decimal
/// digits, or 0 when the text contains none. `"$25/month"` -> 25.
pub fn cost_magnitude(price_text: &str) -> u32 {
    price_text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .fold(0u32, |acc, c| {
            acc.saturating_mul(10).saturating_add(c.to_digit(10).unwrap_or(0))
        })
}

/// Active filter state: at most one value per named facet, an optional cost
/// bucket, and an undebounced title substring query. Facets combine with
/// logical AND; empty entries impose no constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FacetSelection {
    pub fields: BTreeMap<String, String>,
    pub cost_range: Option<CostRange>,
    pub title_query: String,
}

impl FacetSelection {
    /// Select `value` for the named facet, or clear it when it is already
    /// the selected value (single-select toggle).
    pub fn toggle_field(&mut self, name: &str, value: &str) {
        if self.fields.get(name).map(String::as_str) == Some(value) {
            self.fields.remove(name);
        } else {
            self.fields.insert(name.to_string(), value.to_string());
        }
    }

    pub fn toggle_cost_range(&mut self, range: &CostRange) {
        if self.cost_range.as_ref() == Some(range) {
            self.cost_range = None;
        } else {
            self.cost_range = Some(range.clone());
        }
    }

    pub fn is_field_selected(&self, name: &str, value: &str) -> bool {
        self.fields.get(name).map(String::as_str) == Some(value)
    }

    pub fn is_cost_range_selected(&self, range: &CostRange) -> bool {
        self.cost_range.as_ref() == Some(range)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.cost_range.is_none() && self.title_query.is_empty()
    }

    pub fn clear(&mut self) {
        self.fields.clear();
        self.cost_range = None;
        self.title_query.clear();
    }

    /// True when the record passes every active predicate. A record whose
    /// facet field is null never matches an active selection on that field.
    pub fn matches<R: FacetedRecord>(&self, record: &R) -> bool {
        for (name, selected) in &self.fields {
            if record.facet_field(name) != Some(selected.as_str()) {
                return false;
            }
        }

        if let Some(range) = &self.cost_range {
            let magnitude = cost_magnitude(record.price_text().unwrap_or(""));
            if !range.contains(magnitude) {
                return false;
            }
        }

        if !self.title_query.is_empty() {
            let needle = self.title_query.to_lowercase();
            let title = record.title_text().unwrap_or("").to_lowercase();
            if !title.contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// Derive the displayed list from the baseline and the active selection.
pub fn derive_displayed<R: FacetedRecord + Clone>(
    baseline: &[R],
    selection: &FacetSelection,
) -> Vec<R> {
    baseline
        .iter()
        .filter(|record| selection.matches(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gym::GymRecord;
    use crate::search_const::{cost_ranges, FACET_CITY, FACET_FITNESS_LEVEL};
    use crate::training_plan::PlanRecord;

    fn gym(id: &str, city: &str, country: &str) -> GymRecord {
        GymRecord {
            id: id.to_string(),
            city: Some(city.to_string()),
            country: Some(country.to_string()),
            ..Default::default()
        }
    }

    fn plan(id: &str, title: &str, price: &str, level: &str) -> PlanRecord {
        PlanRecord {
            id: id.to_string(),
            title: Some(title.to_string()),
            price_text: Some(price.to_string()),
            fitness_level: Some(level.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn cost_magnitude_extracts_first_digit_run() {
        assert_eq!(cost_magnitude("$25/month"), 25);
        assert_eq!(cost_magnitude("from 120 euros"), 120);
        assert_eq!(cost_magnitude("19.99"), 19);
        assert_eq!(cost_magnitude("free"), 0);
        assert_eq!(cost_magnitude(""), 0);
    }

    #[test]
    fn digit_free_price_is_excluded_from_positive_ranges() {
        let no_price = plan("p1", "Base", "contact us", "Beginner");
        for range in cost_ranges().into_iter().filter(|r| r.min > 0) {
            let mut selection = FacetSelection::default();
            selection.toggle_cost_range(&range);
            assert!(!selection.matches(&no_price), "range {}", range.label);
        }
    }

    #[test]
    fn cost_range_bounds_are_half_open() {
        let range = CostRange::new("$20 - $50", 20, Some(50));
        assert!(!range.contains(19));
        assert!(range.contains(20));
        assert!(range.contains(49));
        assert!(!range.contains(50));

        let open = CostRange::new("$100+", 100, None);
        assert!(open.contains(100));
        assert!(open.contains(100_000));
    }

    #[test]
    fn city_toggle_filters_then_restores() {
        let baseline = vec![gym("1", "Berlin", "DE"), gym("2", "Paris", "FR")];
        let mut selection = FacetSelection::default();

        selection.toggle_field(FACET_CITY, "Berlin");
        let displayed = derive_displayed(&baseline, &selection);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].id, "1");

        // re-selecting the same value clears the facet
        selection.toggle_field(FACET_CITY, "Berlin");
        assert_eq!(derive_displayed(&baseline, &selection), baseline);
    }

    #[test]
    fn facets_combine_with_and() {
        let baseline = vec![
            gym("1", "Berlin", "DE"),
            gym("2", "Berlin", "AT"),
            gym("3", "Paris", "FR"),
        ];
        let mut selection = FacetSelection::default();
        selection.toggle_field("city", "Berlin");
        selection.toggle_field("country", "AT");

        let displayed = derive_displayed(&baseline, &selection);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].id, "2");
    }

    #[test]
    fn null_field_never_matches_an_active_selection() {
        let baseline = vec![
            gym("1", "Berlin", "DE"),
            GymRecord { id: "2".to_string(), ..Default::default() },
        ];
        let mut selection = FacetSelection::default();
        selection.toggle_field(FACET_CITY, "Berlin");
        assert_eq!(derive_displayed(&baseline, &selection).len(), 1);
    }

    #[test]
    fn title_search_is_case_insensitive_containment() {
        let baseline = vec![
            plan("p1", "Hyrox Power Builder", "$30", "Rx"),
            plan("p2", "Endurance Base", "$25", "Beginner"),
        ];
        let mut selection = FacetSelection::default();
        selection.title_query = "POWER".to_string();

        let displayed = derive_displayed(&baseline, &selection);
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0].id, "p1");
    }

    #[test]
    fn derive_displayed_is_pure_and_idempotent() {
        let baseline = vec![plan("p1", "A", "$25/month", "Beginner")];
        let mut selection = FacetSelection::default();
        selection.toggle_field(FACET_FITNESS_LEVEL, "Beginner");
        selection.toggle_cost_range(&CostRange::new("$20 - $50", 20, Some(50)));

        let first = derive_displayed(&baseline, &selection);
        let second = derive_displayed(&baseline, &selection);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn empty_selection_imposes_no_constraint() {
        let baseline = vec![gym("1", "Berlin", "DE"), gym("2", "Paris", "FR")];
        let selection = FacetSelection::default();
        assert!(selection.is_empty());
        assert_eq!(derive_displayed(&baseline, &selection), baseline);
    }

    #[test]
    fn clear_resets_every_predicate() {
        let mut selection = FacetSelection::default();
        selection.toggle_field(FACET_CITY, "Berlin");
        selection.toggle_cost_range(&CostRange::new("$100+", 100, None));
        selection.title_query = "power".to_string();

        selection.clear();
        assert!(selection.is_empty());
    }
}
