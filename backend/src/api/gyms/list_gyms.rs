//! Ordered gym listing with a limit/offset pair.

use common::gym::{GymRecord, GYM_LIST_COLUMNS};

use crate::db::rest_client::{RestClient, SelectQuery};

pub async fn list_gyms(client: &RestClient, limit: u32, offset: u32) -> anyhow::Result<Vec<GymRecord>> {
    let select = SelectQuery::table("gyms")
        .columns(GYM_LIST_COLUMNS)
        .order_asc("store")
        .limit(limit)
        .offset(offset);
    client.fetch_all::<GymRecord>(&select).await
}
