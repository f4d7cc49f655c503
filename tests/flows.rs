mod common;

use std::{sync::Arc, time::Duration};

use common::{
    FakeCities, FixedLocator, GatedForecast, RecordingForecast, eventually, medellin, oslo,
    services_with, weather_with_temp,
};
use weathervane::{
    app::{
        search::SearchFlow,
        units::UnitsStore,
        weather::{FETCH_FAILED_MESSAGE, WeatherStore},
    },
    domain::units::{TemperatureUnit, UnitPreferences},
};

#[tokio::test]
async fn slower_earlier_response_overwrites_newer_one() {
    let forecast = GatedForecast::new();
    let store = WeatherStore::new(forecast.clone(), UnitsStore::default());
    let gate_a = forecast.gate();
    let gate_b = forecast.gate();

    let first = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch_weather(medellin()).await })
    };
    forecast.wait_for_calls(1).await;
    let second = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch_weather(oslo()).await })
    };
    forecast.wait_for_calls(2).await;

    gate_b.send(Ok(weather_with_temp(5.0))).expect("gate b");
    second.await.expect("second fetch");
    assert_eq!(
        store.weather_data().map(|data| data.current.temperature),
        Some(5.0)
    );

    gate_a.send(Ok(weather_with_temp(30.0))).expect("gate a");
    first.await.expect("first fetch");

    assert_eq!(
        store.weather_data().map(|data| data.current.temperature),
        Some(30.0)
    );
    assert_eq!(store.current_location(), Some(oslo()));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn first_completion_clears_loading_while_other_fetch_is_pending() {
    let forecast = GatedForecast::new();
    let store = WeatherStore::new(forecast.clone(), UnitsStore::default());
    let gate_a = forecast.gate();
    let _gate_b = forecast.gate();

    let first = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch_weather(medellin()).await })
    };
    forecast.wait_for_calls(1).await;
    let second = {
        let store = store.clone();
        tokio::spawn(async move { store.fetch_weather(oslo()).await })
    };
    forecast.wait_for_calls(2).await;
    assert!(store.is_loading());

    gate_a.send(Ok(weather_with_temp(12.0))).expect("gate a");
    first.await.expect("first fetch");
    assert!(!store.is_loading());

    second.abort();
}

#[tokio::test]
async fn unit_change_refetches_current_location_once() {
    let forecast = RecordingForecast::ok(weather_with_temp(20.0));
    let units = UnitsStore::default();
    let store = WeatherStore::new(forecast.clone(), units.clone());
    store.fetch_weather(medellin()).await;
    let watcher = store.spawn_unit_watcher();

    units.set_temperature_unit(TemperatureUnit::Fahrenheit);

    assert!(eventually(Duration::from_secs(2), || forecast.calls().len() == 2).await);
    tokio::time::sleep(Duration::from_millis(50)).await;
    let calls = forecast.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].0, medellin());
    assert_eq!(calls[1].1.temperature, TemperatureUnit::Fahrenheit);

    watcher.abort();
}

#[tokio::test]
async fn unit_change_without_location_does_not_fetch() {
    let forecast = RecordingForecast::ok(weather_with_temp(20.0));
    let units = UnitsStore::default();
    let store = WeatherStore::new(forecast.clone(), units.clone());
    let watcher = store.spawn_unit_watcher();

    units.switch_to_imperial();

    assert!(!eventually(Duration::from_millis(100), || !forecast.calls().is_empty()).await);
    watcher.abort();
}

#[tokio::test]
async fn switching_system_refetches_with_all_imperial_units() {
    let forecast = RecordingForecast::ok(weather_with_temp(20.0));
    let units = UnitsStore::default();
    let store = WeatherStore::new(forecast.clone(), units.clone());
    store.fetch_weather(oslo()).await;
    let watcher = store.spawn_unit_watcher();

    units.switch_to_imperial();

    assert!(eventually(Duration::from_secs(2), || forecast.calls().len() == 2).await);
    assert_eq!(forecast.calls()[1].1, UnitPreferences::imperial());
    watcher.abort();
}

#[tokio::test]
async fn failures_stay_inside_the_store() {
    let forecast = RecordingForecast::ok(weather_with_temp(18.0));
    let store = WeatherStore::new(forecast.clone(), UnitsStore::default());
    store.fetch_weather(medellin()).await;

    forecast.set_outcome(Err("Network error".to_string()));
    store.fetch_weather(oslo()).await;

    assert_eq!(store.error().as_deref(), Some("Network error"));
    assert!(!store.is_loading());
    assert_eq!(
        store.weather_data().map(|data| data.current.temperature),
        Some(18.0)
    );
    assert_eq!(store.current_location(), Some(oslo()));
}

#[tokio::test]
async fn blank_failure_message_uses_fallback() {
    let forecast = RecordingForecast::failing("");
    let store = WeatherStore::new(forecast, UnitsStore::default());
    store.fetch_weather(medellin()).await;
    assert_eq!(store.error().as_deref(), Some(FETCH_FAILED_MESSAGE));
}

#[tokio::test]
async fn next_fetch_clears_previous_error() {
    let forecast = RecordingForecast::failing("Network error");
    let store = WeatherStore::new(forecast.clone(), UnitsStore::default());
    store.fetch_weather(medellin()).await;
    assert!(store.error().is_some());

    forecast.set_outcome(Ok(weather_with_temp(9.0)));
    store.fetch_weather(medellin()).await;
    assert!(store.error().is_none());
    assert_eq!(store.hourly_data().len(), 24);
    assert_eq!(store.daily_data().len(), 7);
    assert_eq!(store.formatted_days()[0], "Monday");
}

#[tokio::test(start_paused = true)]
async fn search_select_then_fetch() {
    let forecast = RecordingForecast::ok(weather_with_temp(22.0));
    let cities = FakeCities::returning(vec![oslo(), medellin()]);
    let services = services_with(forecast.clone(), cities.clone(), FixedLocator(None));

    services.search.set_query("O");
    services.search.set_query("Os");
    services.search.set_query("Osl");
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert_eq!(cities.queries(), vec!["Osl".to_string()]);

    let first = services.search.results()[0].clone();
    services.search.select(first).await;

    let state = services.search.state();
    assert!(state.query.is_empty());
    assert!(!state.show_dropdown);
    assert_eq!(services.weather.current_location(), Some(oslo()));
    assert_eq!(forecast.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_search_leaves_empty_dropdown() {
    let forecast = RecordingForecast::ok(weather_with_temp(22.0));
    let cities = FakeCities::failing();
    let flow = SearchFlow::new(
        cities.clone(),
        WeatherStore::new(forecast.clone(), UnitsStore::default()),
    );

    flow.set_query("Tokyo");
    tokio::time::sleep(Duration::from_millis(350)).await;

    let state = flow.state();
    assert!(state.results.is_empty());
    assert!(!state.is_loading);
    assert!(flow.submit().is_none());
    assert!(forecast.calls().is_empty());
}

#[tokio::test]
async fn unit_store_is_shared_through_services() {
    let forecast = Arc::new(GatedForecast::default());
    let services = services_with(
        forecast,
        FakeCities::returning(Vec::new()),
        FixedLocator(Some(medellin())),
    );
    services.units.switch_to_imperial();
    assert!(services.weather.units().is_imperial());
    assert_eq!(
        services.locator.get_user_location().await.ok(),
        Some(medellin())
    );
}
