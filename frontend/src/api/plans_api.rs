//! Client API calls for training-plan endpoints.

use common::training_plan::PlanRecord;
use dioxus::prelude::*;


#[server]
pub async fn list_plans() -> Result<Vec<PlanRecord>, ServerFnError> {
    let client = backend::db::rest_client::RestClient::shared();
    let x = backend::api::plans::list_plans(client).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_plan_by_slug(slug: String) -> Result<Option<PlanRecord>, ServerFnError> {
    let client = backend::db::rest_client::RestClient::shared();
    let x = backend::api::plans::get_plan_by_slug(client, &slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
