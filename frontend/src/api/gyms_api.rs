//! Client API calls for gym directory endpoints.

use common::gym::GymRecord;
use dioxus::prelude::*;


#[server]
pub async fn search_gyms(query: String) -> Result<Vec<GymRecord>, ServerFnError> {
    let client = backend::db::rest_client::RestClient::shared();
    let x = backend::api::gyms::search_gyms(client, &query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn featured_gyms() -> Result<Vec<GymRecord>, ServerFnError> {
    let client = backend::db::rest_client::RestClient::shared();
    let x = backend::api::gyms::featured_gyms(client).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_gyms(limit: u32, offset: u32) -> Result<Vec<GymRecord>, ServerFnError> {
    let client = backend::db::rest_client::RestClient::shared();
    let x = backend::api::gyms::list_gyms(client, limit, offset).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_gym_by_slug(slug: String) -> Result<Option<GymRecord>, ServerFnError> {
    let client = backend::db::rest_client::RestClient::shared();
    let x = backend::api::gyms::get_gym_by_slug(client, &slug).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
