//! Gym (training centre) record models.

use serde::{Deserialize, Serialize};

use crate::facet_filter::FacetedRecord;
use crate::search_const::{FACET_CITY, FACET_COUNTRY};

/// One gym row. Identity is `id`; every descriptive field may be null in the
/// database and callers must render a fallback instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GymRecord {
    pub id: String,
    pub slug: Option<String>,
    pub store: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub thumb: Option<String>,

    // detail-page columns, absent from list queries
    pub description: Option<String>,
    pub services: Option<Vec<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub main_image_url: Option<String>,
    pub meta_description: Option<String>,
}

/// Column subset fetched for search results and list cards.
pub const GYM_LIST_COLUMNS: &str = "id,slug,store,address,city,country,thumb";

impl GymRecord {
    pub fn display_name(&self) -> &str {
        self.store.as_deref().unwrap_or("Unnamed gym")
    }

    /// "Berlin, DE" / "Berlin" / "" depending on which parts are present.
    pub fn location_line(&self) -> String {
        [self.city.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FacetedRecord for GymRecord {
    fn facet_field(&self, name: &str) -> Option<&str> {
        match name {
            FACET_CITY => self.city.as_deref(),
            FACET_COUNTRY => self.country.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_line_skips_missing_parts() {
        let mut gym = GymRecord {
            id: "1".to_string(),
            city: Some("Berlin".to_string()),
            country: Some("DE".to_string()),
            ..Default::default()
        };
        assert_eq!(gym.location_line(), "Berlin, DE");

        gym.country = None;
        assert_eq!(gym.location_line(), "Berlin");

        gym.city = None;
        assert_eq!(gym.location_line(), "");
    }

    #[test]
    fn display_name_falls_back_when_store_is_null() {
        let gym = GymRecord { id: "1".to_string(), ..Default::default() };
        assert_eq!(gym.display_name(), "Unnamed gym");
    }
}
