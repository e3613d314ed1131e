use crate::domain::model::{Listing, SearchFilters};
use crate::domain::ports::ListingSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;

/// Envelope of both the live API response and the local snapshot file.
#[derive(Debug, Deserialize)]
struct ListingsResponse {
    #[serde(default)]
    data: Vec<Listing>,
}

/// Client for the RapidAPI-hosted listings search endpoint.
pub struct RapidApiSource {
    client: Client,
    endpoint: String,
    api_key: String,
    api_host: String,
}

impl RapidApiSource {
    pub fn new(endpoint: String, api_key: String, api_host: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            api_host,
        }
    }
}

#[async_trait]
impl ListingSource for RapidApiSource {
    async fn fetch(&self, filters: &SearchFilters) -> Result<Vec<Listing>> {
        tracing::debug!("Making API request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .json(filters)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());

        let body: ListingsResponse = response.json().await?;
        Ok(body.data)
    }
}

/// Loads a previously saved API response from disk. A missing file is the
/// normal "go fetch fresh data" branch, not an error.
pub fn load_snapshot(path: &Path) -> Result<Option<Vec<Listing>>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let parsed: ListingsResponse = serde_json::from_str(&raw)?;
    Ok(Some(parsed.data))
}
