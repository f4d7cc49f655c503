use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ApiError, ForecastProvider, http_client};
use crate::domain::{
    units::UnitPreferences,
    weather::{CurrentWeather, DailyWeather, HourlyWeather, Location, WeatherData},
};

pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,weather_code,wind_speed_10m,precipitation";
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weather_code";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(10),
            base_url: base_url.into(),
        }
    }

    pub async fn fetch(
        &self,
        location: &Location,
        units: UnitPreferences,
    ) -> Result<WeatherData, ApiError> {
        let mut params = vec![
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("hourly", HOURLY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
        ];
        params.extend(
            units
                .query_params()
                .into_iter()
                .map(|(key, value)| (key, value.to_string())),
        );

        tracing::debug!(city = %location.city, ?units, "requesting forecast");
        let payload: ForecastResponse = self
            .client
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Forecast)?
            .json()
            .await
            .map_err(ApiError::Forecast)?;

        Ok(payload.into_weather_data())
    }
}

#[async_trait]
impl ForecastProvider for ForecastClient {
    async fn get_weather(
        &self,
        location: &Location,
        units: UnitPreferences,
    ) -> anyhow::Result<WeatherData> {
        self.fetch(location, units).await.map_err(|err| {
            tracing::warn!(error = ?err, "error fetching weather");
            err.into()
        })
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentBlock,
    #[serde(default)]
    current_units: CurrentUnits,
    daily: Option<DailyBlock>,
    #[serde(default)]
    daily_units: DailyUnits,
    hourly: Option<HourlyBlock>,
    #[serde(default)]
    hourly_units: HourlyUnits,
}

#[derive(Debug, Deserialize)]
struct CurrentBlock {
    #[serde(default)]
    time: String,
    temperature_2m: f64,
    apparent_temperature: f64,
    relative_humidity_2m: f64,
    weather_code: u8,
    wind_speed_10m: f64,
    precipitation: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrentUnits {
    temperature_2m: String,
    apparent_temperature: String,
    relative_humidity_2m: String,
    wind_speed_10m: String,
    precipitation: String,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<u8>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DailyUnits {
    temperature_2m_max: String,
    temperature_2m_min: String,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    weather_code: Vec<Option<u8>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HourlyUnits {
    temperature_2m: String,
}

impl ForecastResponse {
    fn into_weather_data(self) -> WeatherData {
        let current = CurrentWeather {
            time: self.current.time,
            temperature: self.current.temperature_2m,
            temperature_unit: self.current_units.temperature_2m,
            apparent_temperature: self.current.apparent_temperature,
            apparent_temperature_unit: self.current_units.apparent_temperature,
            relative_humidity: self.current.relative_humidity_2m,
            relative_humidity_unit: self.current_units.relative_humidity_2m,
            weather_code: self.current.weather_code,
            wind_speed: self.current.wind_speed_10m,
            wind_speed_unit: self.current_units.wind_speed_10m,
            precipitation: self.current.precipitation,
            precipitation_unit: self.current_units.precipitation,
        };

        let daily_units = self.daily_units;
        let daily = self.daily.map(|block| DailyWeather {
            time: block.time,
            max_temp: block.temperature_2m_max,
            max_temp_unit: daily_units.temperature_2m_max,
            min_temp: block.temperature_2m_min,
            min_temp_unit: daily_units.temperature_2m_min,
            weather_code: block.weather_code,
        });

        let hourly_units = self.hourly_units;
        let hourly = self.hourly.map(|block| HourlyWeather {
            time: block.time,
            temperature: block.temperature_2m,
            temperature_unit: hourly_units.temperature_2m,
            weather_code: block.weather_code,
        });

        WeatherData {
            current,
            daily,
            hourly,
        }
    }
}
