use chrono::{Local, NaiveTime, TimeZone};

use super::{DailyCard, DailyWeather, HourlyCard, HourlyWeather, WeatherData, parse_date};

/// Rounds half toward positive infinity, so `-2.5` becomes `-2` and `2.5` becomes `3`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_temp(value: f64) -> i64 {
    let floor = value.floor();
    // `value + 0.5` rounds up for 0.49999999999999994.
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Long weekday name for an ISO date. The date is anchored at local noon so a
/// UTC offset can never push it onto the neighbouring day.
#[must_use]
pub fn weekday_name(date: &str) -> String {
    let Some(day) = parse_date(date) else {
        return date.to_string();
    };
    let Some(noon) = NaiveTime::from_hms_opt(12, 0, 0) else {
        return date.to_string();
    };
    let anchored = day.and_time(noon);
    match Local.from_local_datetime(&anchored).earliest() {
        Some(local) => local.format("%A").to_string(),
        None => anchored.format("%A").to_string(),
    }
}

/// Clock part of an ISO `YYYY-MM-DDTHH:MM` timestamp.
#[must_use]
pub fn hour_label(time: &str) -> &str {
    time.split_once('T').map_or(time, |(_, clock)| clock)
}

fn value_at(series: &[Option<f64>], idx: usize) -> f64 {
    series.get(idx).copied().flatten().unwrap_or(0.0)
}

fn code_at(series: &[Option<u8>], idx: usize) -> u8 {
    series.get(idx).copied().flatten().unwrap_or(0)
}

impl HourlyWeather {
    #[must_use]
    pub fn cards(&self) -> Vec<HourlyCard> {
        self.time
            .iter()
            .enumerate()
            .map(|(idx, hour)| HourlyCard {
                hour: hour.clone(),
                temperature: round_temp(value_at(&self.temperature, idx)),
                weather_code: code_at(&self.weather_code, idx),
            })
            .collect()
    }
}

impl DailyWeather {
    #[must_use]
    pub fn cards(&self) -> Vec<DailyCard> {
        self.time
            .iter()
            .enumerate()
            .map(|(idx, date)| DailyCard {
                date: date.clone(),
                max_temp: round_temp(value_at(&self.max_temp, idx)),
                min_temp: round_temp(value_at(&self.min_temp, idx)),
                weather_code: code_at(&self.weather_code, idx),
            })
            .collect()
    }

    #[must_use]
    pub fn weekday_names(&self) -> Vec<String> {
        self.time.iter().map(|date| weekday_name(date)).collect()
    }
}

impl WeatherData {
    #[must_use]
    pub fn hourly_cards(&self) -> Vec<HourlyCard> {
        self.hourly.as_ref().map(HourlyWeather::cards).unwrap_or_default()
    }

    #[must_use]
    pub fn daily_cards(&self) -> Vec<DailyCard> {
        self.daily.as_ref().map(DailyWeather::cards).unwrap_or_default()
    }

    #[must_use]
    pub fn formatted_days(&self) -> Vec<String> {
        self.daily
            .as_ref()
            .map(DailyWeather::weekday_names)
            .unwrap_or_default()
    }
    /// Weekday of the observation time, used as the default hourly day.
    #[must_use]
    pub fn current_day(&self) -> String {
        let date = self.current.time.split('T').next().unwrap_or_default();
        weekday_name(date)
    }

    /// Hourly cards whose timestamp falls on the forecast date named `day`.
    /// A name missing from [`Self::formatted_days`] matches nothing.
    #[must_use]
    pub fn hourly_cards_for_day(&self, day: &str) -> Vec<HourlyCard> {
        let Some(date) = self
            .formatted_days()
            .iter()
            .position(|name| name == day)
            .and_then(|idx| self.daily.as_ref()?.time.get(idx).cloned())
        else {
            return Vec::new();
        };
        self.hourly_cards()
            .into_iter()
            .filter(|card| card.hour.starts_with(&date))
            .collect()
    }
}
