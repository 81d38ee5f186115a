//! Featured gyms, used as the fallback baseline when the search box is empty.

use common::gym::{GymRecord, GYM_LIST_COLUMNS};
use common::search_const::FEATURED_RESULT_LIMIT;

use crate::db::rest_client::{RestClient, SelectQuery};

pub async fn featured_gyms(client: &RestClient) -> anyhow::Result<Vec<GymRecord>> {
    let select = SelectQuery::table("gyms")
        .columns(GYM_LIST_COLUMNS)
        .order_asc("store")
        .limit(FEATURED_RESULT_LIMIT);
    client.fetch_all::<GymRecord>(&select).await
}
