//! Shared limits and facet option lists.

use crate::facet_filter::CostRange;

/// Row cap for the store-name search boundary.
pub const SEARCH_RESULT_LIMIT: u32 = 50;
/// Row cap for the featured/fallback boundary.
pub const FEATURED_RESULT_LIMIT: u32 = 20;
/// Keystroke debounce before a search request is issued.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

pub const FACET_CITY: &str = "city";
pub const FACET_COUNTRY: &str = "country";
pub const FACET_FITNESS_LEVEL: &str = "fitness_level";
pub const FACET_DAYS_PER_WEEK: &str = "days_per_week";

pub const FITNESS_LEVELS: &[&str] = &["Beginner", "Intermediate", "Rx", "Scaled", "Very Active"];

pub const DAYS_PER_WEEK_OPTIONS: &[&str] = &["2-3", "3-5", "5-7", "Individual"];

/// Cost buckets offered by the training-plan filter menu. The last bucket is
/// unbounded above.
pub fn cost_ranges() -> Vec<CostRange> {
    vec![
        CostRange::new("Under $20", 0, Some(20)),
        CostRange::new("$20 - $50", 20, Some(50)),
        CostRange::new("$50 - $75", 50, Some(75)),
        CostRange::new("$100+", 100, None),
    ]
}
