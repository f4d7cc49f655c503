use std::{collections::VecDeque, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    app::{units::UnitsStore, weather::WeatherStore},
    data::{CitySearch, ForecastProvider},
    domain::{
        units::UnitPreferences,
        weather::{CurrentWeather, DailyWeather, HourlyWeather, Location, WeatherData},
    },
};

pub(crate) fn sample_location() -> Location {
    Location::new("Medellin", "Colombia", 6.24861, -75.57425)
}

pub(crate) fn other_location() -> Location {
    Location::new("Oslo", "Norway", 59.9139, 10.7522)
}

pub(crate) fn sample_current() -> CurrentWeather {
    CurrentWeather {
        time: "2024-01-01T10:00".to_string(),
        temperature: 22.5,
        temperature_unit: "°C".to_string(),
        apparent_temperature: 21.0,
        apparent_temperature_unit: "°C".to_string(),
        relative_humidity: 65.0,
        relative_humidity_unit: "%".to_string(),
        weather_code: 2,
        wind_speed: 10.0,
        wind_speed_unit: "km/h".to_string(),
        precipitation: 0.0,
        precipitation_unit: "mm".to_string(),
    }
}

pub(crate) fn sample_weather() -> WeatherData {
    let hourly = HourlyWeather {
        time: (0..24).map(|h| format!("2024-01-01T{h:02}:00")).collect(),
        temperature: (0..24).map(|h| Some(18.0 + f64::from(h) * 0.4)).collect(),
        temperature_unit: "°C".to_string(),
        weather_code: (0..24).map(|h| Some(if h < 12 { 2 } else { 61 })).collect(),
    };
    let daily = DailyWeather {
        time: (1..=7).map(|d| format!("2024-01-{d:02}")).collect(),
        max_temp: (0..7).map(|d| Some(25.6 + f64::from(d))).collect(),
        max_temp_unit: "°C".to_string(),
        min_temp: (0..7).map(|d| Some(15.2 + f64::from(d) * 0.5)).collect(),
        min_temp_unit: "°C".to_string(),
        weather_code: vec![Some(0), Some(1), Some(2), Some(3), Some(61), Some(95), Some(71)],
    };
    WeatherData {
        current: sample_current(),
        daily: Some(daily),
        hourly: Some(hourly),
    }
}

#[derive(Debug, Clone)]
pub(crate) enum ForecastReply {
    Data(WeatherData),
    Fail(String),
    Pending,
}

/// Forecast provider that replays a script and records every request.
/// Once the script runs out the last reply repeats.
#[derive(Debug)]
pub(crate) struct FakeForecast {
    script: Mutex<VecDeque<ForecastReply>>,
    last: Mutex<ForecastReply>,
    calls: Mutex<Vec<(Location, UnitPreferences)>>,
}

impl FakeForecast {
    pub(crate) fn scripted(replies: Vec<ForecastReply>) -> Arc<Self> {
        let last = replies.last().cloned().unwrap_or(ForecastReply::Pending);
        Arc::new(Self {
            script: Mutex::new(replies.into()),
            last: Mutex::new(last),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn always(reply: ForecastReply) -> Arc<Self> {
        Self::scripted(vec![reply])
    }

    pub(crate) fn never_resolves() -> Arc<Self> {
        Self::always(ForecastReply::Pending)
    }

    pub(crate) fn calls(&self) -> Vec<(Location, UnitPreferences)> {
        self.calls.lock().clone()
    }

    fn next_reply(&self) -> ForecastReply {
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.last.lock().clone())
    }
}

#[async_trait]
impl ForecastProvider for FakeForecast {
    async fn get_weather(
        &self,
        location: &Location,
        units: UnitPreferences,
    ) -> Result<WeatherData> {
        self.calls.lock().push((location.clone(), units));
        match self.next_reply() {
            ForecastReply::Data(data) => Ok(data),
            ForecastReply::Fail(message) => Err(anyhow::Error::msg(message)),
            ForecastReply::Pending => std::future::pending::<Result<WeatherData>>().await,
        }
    }
}

pub(crate) fn fake_weather_store(forecast: &Arc<FakeForecast>, units: UnitsStore) -> WeatherStore {
    WeatherStore::new(forecast.clone(), units)
}

/// City search that answers every query with the same outcome.
#[derive(Debug)]
pub(crate) struct FakeCities {
    results: Option<Vec<Location>>,
    queries: Mutex<Vec<String>>,
}

impl FakeCities {
    pub(crate) fn returning(results: Vec<Location>) -> Arc<Self> {
        Arc::new(Self {
            results: Some(results),
            queries: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            results: None,
            queries: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl CitySearch for FakeCities {
    async fn search_cities(&self, query: &str) -> Result<Vec<Location>> {
        self.queries.lock().push(query.to_string());
        self.results
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Error getting the cities' information"))
    }
}
