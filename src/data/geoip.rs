use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ApiError, LocationProvider, http_client};
use crate::domain::weather::Location;

pub const LOCATION_PROXY_URL: &str = "http://localhost:3000/api/location";
pub const IPGEOLOCATION_URL: &str = "https://api.ipgeolocation.io/v2/ipgeo";

/// Reads the caller's location from the `/api/location` proxy, which already
/// answers in `{city, country, latitude, longitude}` form.
#[derive(Debug, Clone)]
pub struct LocationClient {
    client: Client,
    url: String,
}

impl Default for LocationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationClient {
    pub fn new() -> Self {
        Self::with_url(LOCATION_PROXY_URL)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: http_client(5),
            url: url.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Location, ApiError> {
        self.client
            .get(&self.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Location)?
            .json::<Location>()
            .await
            .map_err(ApiError::Location)
    }
}

#[async_trait]
impl LocationProvider for LocationClient {
    async fn get_user_location(&self) -> anyhow::Result<Location> {
        self.fetch().await.map_err(|err| {
            tracing::error!(error = ?err, "location lookup failed");
            err.into()
        })
    }
}

/// Talks to the IP-geolocation provider directly with an API key, doing the
/// same field mapping the proxy performs server-side.
#[derive(Debug, Clone)]
pub struct IpGeolocationClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl IpGeolocationClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(IPGEOLOCATION_URL, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: http_client(5),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Location, ApiError> {
        let payload: IpGeoResponse = self
            .client
            .get(&self.base_url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Location)?
            .json()
            .await
            .map_err(ApiError::Location)?;
        payload.location.into_location()
    }
}

#[async_trait]
impl LocationProvider for IpGeolocationClient {
    async fn get_user_location(&self) -> anyhow::Result<Location> {
        self.fetch().await.map_err(|err| {
            tracing::error!(error = ?err, "error fetching location");
            err.into()
        })
    }
}

#[derive(Debug, Deserialize)]
struct IpGeoResponse {
    location: IpGeoLocation,
}

#[derive(Debug, Deserialize)]
struct IpGeoLocation {
    #[serde(default)]
    city: String,
    #[serde(default)]
    country_name: String,
    latitude: Coordinate,
    longitude: Coordinate,
}

/// The provider sends coordinates as strings; tolerate plain numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self) -> Result<f64, ApiError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| ApiError::MalformedLocation(text.clone())),
        }
    }
}

impl IpGeoLocation {
    fn into_location(self) -> Result<Location, ApiError> {
        Ok(Location {
            latitude: self.latitude.value()?,
            longitude: self.longitude.value()?,
            city: self.city,
            country: self.country_name,
        })
    }
}
