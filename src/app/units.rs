use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::units::{PrecipitationUnit, TemperatureUnit, UnitPreferences, WindSpeedUnit};

/// Session-wide unit selection. Cloning yields another handle onto the same
/// selectors; every effective change is published to subscribers.
#[derive(Debug, Clone)]
pub struct UnitsStore {
    tx: Arc<watch::Sender<UnitPreferences>>,
}

impl Default for UnitsStore {
    fn default() -> Self {
        Self::new(UnitPreferences::metric())
    }
}

impl UnitsStore {
    pub fn new(initial: UnitPreferences) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn preferences(&self) -> UnitPreferences {
        *self.tx.borrow()
    }

    #[must_use]
    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.preferences().temperature
    }

    #[must_use]
    pub fn wind_speed_unit(&self) -> WindSpeedUnit {
        self.preferences().wind_speed
    }

    #[must_use]
    pub fn precipitation_unit(&self) -> PrecipitationUnit {
        self.preferences().precipitation
    }

    #[must_use]
    pub fn is_imperial(&self) -> bool {
        self.preferences().is_imperial()
    }

    pub fn set_temperature_unit(&self, unit: TemperatureUnit) {
        self.update(|prefs| prefs.temperature = unit);
    }

    pub fn set_wind_speed_unit(&self, unit: WindSpeedUnit) {
        self.update(|prefs| prefs.wind_speed = unit);
    }

    pub fn set_precipitation_unit(&self, unit: PrecipitationUnit) {
        self.update(|prefs| prefs.precipitation = unit);
    }

    pub fn switch_to_imperial(&self) {
        self.update(|prefs| *prefs = UnitPreferences::imperial());
    }

    pub fn switch_to_metric(&self) {
        self.update(|prefs| *prefs = UnitPreferences::metric());
    }

    pub fn toggle_system(&self) {
        if self.is_imperial() {
            self.switch_to_metric();
        } else {
            self.switch_to_imperial();
        }
    }

    /// Receiver that wakes once per published change. Values already current
    /// at subscription time are treated as seen.
    pub fn subscribe(&self) -> watch::Receiver<UnitPreferences> {
        self.tx.subscribe()
    }

    fn update(&self, apply: impl FnOnce(&mut UnitPreferences)) {
        self.tx.send_if_modified(|prefs| {
            let before = *prefs;
            apply(prefs);
            *prefs != before
        });
    }
}
