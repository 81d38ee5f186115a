//! Single-gym lookup for the detail page.

use common::gym::GymRecord;

use crate::db::rest_client::{RestClient, SelectQuery};

/// Full row by slug. A miss is `Ok(None)`; the page renders a not-found view.
pub async fn get_gym_by_slug(client: &RestClient, slug: &str) -> anyhow::Result<Option<GymRecord>> {
    let select = SelectQuery::table("gyms").columns("*").eq("slug", slug);
    client.fetch_one::<GymRecord>(select).await
}
