use std::sync::Arc;

use super::{search::SearchFlow, units::UnitsStore, weather::WeatherStore};
use crate::{
    cli::Cli,
    data::{
        CitySearch, ForecastProvider, LocationProvider,
        forecast::ForecastClient,
        geocode::GeocodeClient,
        geoip::{IpGeolocationClient, LocationClient},
    },
    domain::weather::Location,
};

/// Where the first forecast comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum StartupTarget {
    Coordinates(Location),
    City(String),
    Detect,
}

impl StartupTarget {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if let Some((lat, lon)) = cli.coordinates() {
            Self::Coordinates(Location::from_coords(lat, lon))
        } else if let Some(city) = cli.city_query() {
            Self::City(city.to_string())
        } else {
            Self::Detect
        }
    }
}

/// The shared application services, wired once and handed to every consumer.
#[derive(Clone)]
pub struct Services {
    pub units: UnitsStore,
    pub weather: WeatherStore,
    pub search: SearchFlow,
    pub locator: Arc<dyn LocationProvider>,
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("units", &self.units)
            .field("weather", &self.weather)
            .field("search", &self.search)
            .finish_non_exhaustive()
    }
}

impl Services {
    pub fn new(
        units: UnitsStore,
        forecast: Arc<dyn ForecastProvider>,
        cities: Arc<dyn CitySearch>,
        locator: Arc<dyn LocationProvider>,
    ) -> Self {
        let weather = WeatherStore::new(forecast, units.clone());
        let search = SearchFlow::new(cities, weather.clone());
        Self {
            units,
            weather,
            search,
            locator,
        }
    }

    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let units = UnitsStore::new(cli.initial_units());

        let forecast = cli
            .forecast_url
            .as_deref()
            .map_or_else(ForecastClient::new, ForecastClient::with_base_url);
        let geocode = cli
            .geocode_url
            .as_deref()
            .map_or_else(GeocodeClient::new, GeocodeClient::with_base_url)
            .with_count(cli.search_count);
        let locator: Arc<dyn LocationProvider> = match cli.geolocation_api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Arc::new(IpGeolocationClient::new(key.trim())),
            _ => Arc::new(LocationClient::with_url(cli.location_url.clone())),
        };

        Self::new(units, Arc::new(forecast), Arc::new(geocode), locator)
    }
}
