use std::fmt::Write as _;

use crate::domain::weather::{
    Location, WeatherData, hour_label, weather_icon, weather_label,
};

const REPORT_HOURS: usize = 12;

/// Plain-text forecast used by `--one-shot`.
#[must_use]
pub fn render_report(location: &Location, data: &WeatherData) -> String {
    let mut out = String::new();
    let current = &data.current;

    let _ = writeln!(out, "{}", location.display_name());
    let _ = writeln!(
        out,
        "{} {}  {}{} (feels like {}{})",
        weather_icon(current.weather_code).glyph(),
        weather_label(current.weather_code),
        current.temperature,
        current.temperature_unit,
        current.apparent_temperature,
        current.apparent_temperature_unit,
    );
    let _ = writeln!(
        out,
        "Humidity {}{}  Wind {} {}  Precipitation {} {}",
        current.relative_humidity,
        current.relative_humidity_unit,
        current.wind_speed,
        current.wind_speed_unit,
        current.precipitation,
        current.precipitation_unit,
    );

    let hourly = data.hourly_cards();
    if !hourly.is_empty() {
        let unit = data
            .hourly
            .as_ref()
            .map_or("", |hourly| hourly.temperature_unit.as_str());
        let _ = writeln!(out, "\nHourly");
        for card in hourly.iter().take(REPORT_HOURS) {
            let _ = writeln!(
                out,
                "  {}  {:>4}{unit}  {}",
                hour_label(&card.hour),
                card.temperature,
                weather_label(card.weather_code),
            );
        }
    }

    let daily = data.daily_cards();
    if !daily.is_empty() {
        let unit = data
            .daily
            .as_ref()
            .map_or("", |daily| daily.max_temp_unit.as_str());
        let _ = writeln!(out, "\nDaily");
        for (card, day) in daily.iter().zip(data.formatted_days()) {
            let _ = writeln!(
                out,
                "  {day:<10} {:>4}{unit} / {:>4}{unit}  {}",
                card.max_temp,
                card.min_temp,
                weather_label(card.weather_code),
            );
        }
    }

    out
}
