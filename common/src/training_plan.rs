//! Training-plan record models.

use serde::{Deserialize, Serialize};

use crate::facet_filter::FacetedRecord;
use crate::search_const::{FACET_DAYS_PER_WEEK, FACET_FITNESS_LEVEL};

/// One training-plan row. Identity is `id`; descriptive fields tolerate null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlanRecord {
    pub id: String,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub main_image_url: Option<String>,
    pub description: Option<String>,
    pub price_text: Option<String>,
    pub fitness_level: Option<String>,
    pub days_per_week: Option<String>,

    // detail-page columns
    pub category: Option<String>,
    pub daily_training_time: Option<String>,
    pub sessions_per_day: Option<String>,
    pub hours_per_week: Option<String>,
    pub coaches: Option<Vec<String>>,
    pub external_link: Option<String>,
}

/// Column subset fetched for the plans directory grid.
pub const PLAN_LIST_COLUMNS: &str =
    "id,slug,title,main_image_url,description,price_text,fitness_level,days_per_week";

impl PlanRecord {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled plan")
    }

    /// First 80 characters of the description for list cards.
    pub fn short_description(&self) -> Option<String> {
        let description = self.description.as_deref()?;
        let snippet: String = description.chars().take(80).collect();
        if snippet.len() < description.len() {
            Some(format!("{snippet}..."))
        } else {
            Some(snippet)
        }
    }
}

impl FacetedRecord for PlanRecord {
    fn facet_field(&self, name: &str) -> Option<&str> {
        match name {
            FACET_FITNESS_LEVEL => self.fitness_level.as_deref(),
            FACET_DAYS_PER_WEEK => self.days_per_week.as_deref(),
            _ => None,
        }
    }

    fn price_text(&self) -> Option<&str> {
        self.price_text.as_deref()
    }

    fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_description_truncates_long_text() {
        let plan = PlanRecord {
            id: "p1".to_string(),
            description: Some("x".repeat(200)),
            ..Default::default()
        };
        assert_eq!(plan.short_description(), Some(format!("{}...", "x".repeat(80))));
    }

    #[test]
    fn short_description_keeps_short_text() {
        let plan = PlanRecord {
            id: "p1".to_string(),
            description: Some("8 week plan".to_string()),
            ..Default::default()
        };
        assert_eq!(plan.short_description(), Some("8 week plan".to_string()));
    }
}
