//! GeoDB Cities (RapidAPI) geocoding by place name.

use async_trait::async_trait;
use lookup::{LookupError, LookupService};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use crate::client::{get_json, mask_token};

/// Looks up the first city whose name starts with the query.
#[derive(Debug, Clone)]
pub struct GeoDbLookup {
    client: Client,
    base_url: String,
    api_host: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CitiesResponse {
    #[serde(default)]
    data: Vec<City>,
}

#[derive(Debug, Deserialize)]
struct City {
    name: String,
    country: String,
    latitude: f64,
    longitude: f64,
}

impl GeoDbLookup {
    pub fn new(client: Client, base_url: String, api_host: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_host,
            api_key,
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[async_trait]
impl LookupService for GeoDbLookup {
    fn name(&self) -> &str {
        "geodb"
    }

    /// `query` is the bare place name (e.g. `paris`).
    async fn lookup(&self, query: &str) -> Result<String, LookupError> {
        if !self.is_configured() {
            return Err(LookupError::network("GeoDB API key not configured"));
        }
        let place = query.trim();
        if place.is_empty() {
            return Err(LookupError::empty("no place name in query"));
        }

        info!(
            place = %place,
            api_key = %mask_token(&self.api_key),
            "step: geodb city lookup"
        );

        let url = format!("{}/v1/geo/cities", self.base_url.trim_end_matches('/'));
        let request = self
            .client
            .get(url)
            .query(&[("namePrefix", place), ("limit", "1")])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host);

        let body: CitiesResponse = get_json(request, self.name()).await?;
        let city = body
            .data
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::empty(format!("no city matching {:?}", place)))?;

        Ok(format!(
            "{} is located in {}. Its coordinates are latitude {} and longitude {}.",
            city.name, city.country, city.latitude, city.longitude
        ))
    }
}
