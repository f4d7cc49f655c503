#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCategory {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Storm,
}

#[must_use]
pub fn weather_code_to_category(code: u8) -> WeatherCategory {
    match code {
        0 => WeatherCategory::Clear,
        1 | 2 => WeatherCategory::PartlyCloudy,
        45 | 48 => WeatherCategory::Fog,
        51 | 53 | 55 | 56 | 57 => WeatherCategory::Drizzle,
        61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => WeatherCategory::Rain,
        71 | 73 | 75 | 77 | 85 | 86 => WeatherCategory::Snow,
        95 | 96 | 99 => WeatherCategory::Storm,
        _ => WeatherCategory::Overcast,
    }
}

/// Icon asset for a condition; the name matches the icon sprite ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    Sunny,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Storm,
}

impl WeatherIcon {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunny => "icon-sunny",
            Self::PartlyCloudy => "icon-partly-cloudy",
            Self::Overcast => "icon-overcast",
            Self::Fog => "icon-fog",
            Self::Drizzle => "icon-drizzle",
            Self::Rain => "icon-rain",
            Self::Snow => "icon-snow",
            Self::Storm => "icon-storm",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Sunny => "☀",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁",
            Self::Fog => "░",
            Self::Drizzle => "☂",
            Self::Rain => "☔",
            Self::Snow => "❄",
            Self::Storm => "⚡",
        }
    }
}

#[must_use]
pub fn weather_icon(code: u8) -> WeatherIcon {
    match weather_code_to_category(code) {
        WeatherCategory::Clear => WeatherIcon::Sunny,
        WeatherCategory::PartlyCloudy => WeatherIcon::PartlyCloudy,
        WeatherCategory::Overcast => WeatherIcon::Overcast,
        WeatherCategory::Fog => WeatherIcon::Fog,
        WeatherCategory::Drizzle => WeatherIcon::Drizzle,
        WeatherCategory::Rain => WeatherIcon::Rain,
        WeatherCategory::Snow => WeatherIcon::Snow,
        WeatherCategory::Storm => WeatherIcon::Storm,
    }
}

#[must_use]
pub fn weather_label(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        45 => "Foggy conditions",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Overcast",
    }
}
