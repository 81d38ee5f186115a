//! HTTP client for the Postgres REST endpoint.
//!
//! Row filters are encoded as query parameters in the PostgREST style:
//! `?select=id,store&store=ilike.*berl*&limit=50`.

use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::DirectoryConfig;

/// A single table read, built up as a list of query parameters. Building is
/// pure; only [`RestClient`] performs I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    table: String,
    params: Vec<(String, String)>,
}

impl SelectQuery {
    pub fn table(name: &str) -> Self {
        Self { table: name.to_string(), params: Vec::new() }
    }

    pub fn columns(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// Case-insensitive substring match on one column.
    pub fn ilike_contains(mut self, column: &str, needle: &str) -> Self {
        // * is the PostgREST wildcard and , separates filter lists; neither
        // may pass through from user input
        let needle = needle.replace(['*', ','], " ");
        self.params.push((column.to_string(), format!("ilike.*{needle}*")));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.params.push((column.to_string(), format!("eq.{value}")));
        self
    }

    pub fn order_asc(mut self, column: &str) -> Self {
        self.params.push(("order".to_string(), format!("{column}.asc")));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.params.push(("offset".to_string(), offset.to_string()));
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn query_params(&self) -> &[(String, String)] {
        &self.params
    }
}

pub struct RestClient {
    http: reqwest::Client,
    config: DirectoryConfig,
}

impl RestClient {
    pub fn new(config: DirectoryConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    /// Process-wide client used by the server functions. Configuration is
    /// read from the environment exactly once, on first use.
    pub fn shared() -> &'static RestClient {
        static SHARED: OnceLock<RestClient> = OnceLock::new();
        SHARED.get_or_init(|| RestClient::new(DirectoryConfig::from_env()))
    }

    pub async fn fetch_all<T: DeserializeOwned>(&self, query: &SelectQuery) -> anyhow::Result<Vec<T>> {
        let url = format!(
            "{}/rest/v1/{}",
            self.config.rest_url.trim_end_matches('/'),
            query.table_name()
        );
        let response = self
            .http
            .get(url)
            .query(query.query_params())
            .header("apikey", &self.config.service_key)
            .header("Authorization", format!("Bearer {}", self.config.service_key))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("directory store error: {}: {}", status, body);
        }
        debug!(table = query.table_name(), response_len = body.len(), "rest fetch");
        let rows: Vec<T> = serde_json::from_str(&body)?;
        Ok(rows)
    }

    /// Fetch at most one row. A miss is `Ok(None)`, not an error.
    pub async fn fetch_one<T: DeserializeOwned>(&self, query: SelectQuery) -> anyhow::Result<Option<T>> {
        let rows = self.fetch_all::<T>(&query.limit(1)).await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(query: &SelectQuery) -> Vec<(&str, &str)> {
        query
            .query_params()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn ilike_wraps_needle_in_wildcards() {
        let query = SelectQuery::table("gyms").ilike_contains("store", "berl");
        assert_eq!(params(&query), vec![("store", "ilike.*berl*")]);
    }

    #[test]
    fn ilike_strips_reserved_characters() {
        let query = SelectQuery::table("gyms").ilike_contains("store", "a*b,c");
        assert_eq!(params(&query), vec![("store", "ilike.*a b c*")]);
    }

    #[test]
    fn select_filters_render_in_order() {
        let query = SelectQuery::table("gyms")
            .columns("id,store")
            .eq("slug", "berlin-box")
            .order_asc("store")
            .limit(20)
            .offset(40);
        assert_eq!(
            params(&query),
            vec![
                ("select", "id,store"),
                ("slug", "eq.berlin-box"),
                ("order", "store.asc"),
                ("limit", "20"),
                ("offset", "40"),
            ]
        );
    }
}
