//! Single-plan lookup for the detail page.

use common::training_plan::PlanRecord;

use crate::db::rest_client::{RestClient, SelectQuery};

pub async fn get_plan_by_slug(client: &RestClient, slug: &str) -> anyhow::Result<Option<PlanRecord>> {
    let select = SelectQuery::table("training_plans").columns("*").eq("slug", slug);
    client.fetch_one::<PlanRecord>(select).await
}
