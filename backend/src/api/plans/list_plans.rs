//! Full plan listing for the client-side facet engine.

use common::training_plan::{PlanRecord, PLAN_LIST_COLUMNS};
use tracing::debug;

use crate::db::rest_client::{RestClient, SelectQuery};

/// Every plan, ordered by title. The directory holds tens of rows, so the
/// filter menu works on the full set client side.
pub async fn list_plans(client: &RestClient) -> anyhow::Result<Vec<PlanRecord>> {
    let select = SelectQuery::table("training_plans")
        .columns(PLAN_LIST_COLUMNS)
        .order_asc("title");
    let rows = client.fetch_all::<PlanRecord>(&select).await?;
    debug!(plans = rows.len(), "plan listing");
    Ok(rows)
}
