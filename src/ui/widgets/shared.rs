use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::domain::weather::{WeatherCategory, weather_code_to_category};

pub(super) const ACCENT: Color = Color::Cyan;
pub(super) const MUTED: Color = Color::DarkGray;
pub(super) const TEXT: Color = Color::White;
pub(super) const ERROR: Color = Color::LightRed;

pub(super) fn panel_block(title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
}

pub(super) fn icon_color(code: u8) -> Color {
    match weather_code_to_category(code) {
        WeatherCategory::Clear => Color::Yellow,
        WeatherCategory::PartlyCloudy => Color::LightYellow,
        WeatherCategory::Overcast | WeatherCategory::Fog => Color::Gray,
        WeatherCategory::Drizzle | WeatherCategory::Rain => Color::LightBlue,
        WeatherCategory::Snow => Color::White,
        WeatherCategory::Storm => Color::LightMagenta,
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub(super) fn sparkline_blocks(values: &[i64], width: usize) -> String {
    const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    if values.is_empty() || width == 0 {
        return String::new();
    }
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    let span = ((max - min) as f64).max(1.0);
    (0..width)
        .map(|idx| {
            let src = (idx * values.len() / width).min(values.len() - 1);
            let norm = ((values[src] - min) as f64 / span).clamp(0.0, 1.0);
            BARS[(norm * (BARS.len() - 1) as f64).round() as usize]
        })
        .collect()
}
