use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ApiError, CitySearch, http_client};
use crate::domain::weather::Location;

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_RESULT_COUNT: u8 = 10;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    count: u8,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(8),
            base_url: base_url.into(),
            count: DEFAULT_RESULT_COUNT,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: u8) -> Self {
        self.count = count.max(1);
        self
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Location>, ApiError> {
        let count = self.count.to_string();
        let payload: GeocodeResponse = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", count.as_str()),
                ("language", "en"),
            ])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::CitySearch)?
            .json()
            .await
            .map_err(ApiError::CitySearch)?;

        Ok(payload
            .results
            .unwrap_or_default()
            .into_iter()
            .map(GeocodeResult::into_location)
            .collect())
    }
}

#[async_trait]
impl CitySearch for GeocodeClient {
    async fn search_cities(&self, query: &str) -> anyhow::Result<Vec<Location>> {
        self.search(query).await.map_err(|err| {
            tracing::warn!(error = ?err, query, "city search failed");
            err.into()
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    #[serde(default)]
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl GeocodeResult {
    fn into_location(self) -> Location {
        Location {
            city: self.name,
            country: self.country.unwrap_or_default(),
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
