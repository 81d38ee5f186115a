//! Directory store configuration.

use std::env;

use tracing::warn;

/// Connection settings for the hosted Postgres REST endpoint. Built once at
/// startup and handed to [`crate::db::rest_client::RestClient::new`]; nothing
/// else reads the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryConfig {
    /// Base URL of the REST endpoint, e.g. `https://xyz.supabase.co`.
    pub rest_url: String,
    /// Service role key sent as both `apikey` and bearer token.
    pub service_key: String,
}

impl DirectoryConfig {
    pub fn from_env() -> Self {
        Self {
            rest_url: var_or("DIRECTORY_REST_URL", "http://127.0.0.1:54321"),
            service_key: var_or("DIRECTORY_SERVICE_KEY", ""),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{key} not set, using default: {default:?}");
        default.to_string()
    })
}
