//! Store-name search backing the incremental search box.

use common::gym::{GymRecord, GYM_LIST_COLUMNS};
use common::search_const::SEARCH_RESULT_LIMIT;
use tracing::debug;

use crate::db::rest_client::{RestClient, SelectQuery};

/// Case-insensitive substring match on the store name, capped at
/// [`SEARCH_RESULT_LIMIT`] rows. An empty or whitespace query returns an
/// empty set without touching the store.
pub async fn search_gyms(client: &RestClient, query: &str) -> anyhow::Result<Vec<GymRecord>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let select = SelectQuery::table("gyms")
        .columns(GYM_LIST_COLUMNS)
        .ilike_contains("store", query)
        .limit(SEARCH_RESULT_LIMIT);
    let rows = client.fetch_all::<GymRecord>(&select).await?;
    debug!(query, hits = rows.len(), "gym search");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DirectoryConfig;

    #[tokio::test]
    async fn empty_query_short_circuits_to_empty_set() {
        // never reaches the network, so a dummy endpoint is fine
        let client = RestClient::new(DirectoryConfig {
            rest_url: "http://127.0.0.1:1".to_string(),
            service_key: String::new(),
        });
        let rows = search_gyms(&client, "   ").await.unwrap();
        assert!(rows.is_empty());
    }
}
