use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use super::shared::{ACCENT, MUTED, TEXT, panel_block};
use crate::app::{
    search::{NO_RESULTS_MESSAGE, SearchState},
    state::AppState,
};

const PLACEHOLDER: &str = "Search for a place...";
pub const MAX_DROPDOWN_ROWS: u16 = 8;

pub fn render_box(frame: &mut Frame, area: Rect, state: &AppState) {
    let search = state.services.search.state();
    let mut spans = vec![Span::styled("› ", Style::default().fg(ACCENT))];
    if search.query.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(MUTED)));
    } else {
        spans.push(Span::styled(
            search.query.clone(),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        ));
    }
    if search.is_loading {
        spans.push(Span::styled("  searching…", Style::default().fg(MUTED)));
    }

    let title = if search.submit_disabled() {
        "Search (no match)"
    } else {
        "Search"
    };
    let paragraph = Paragraph::new(Line::from(spans)).block(panel_block(title));
    frame.render_widget(paragraph, area);
}

/// Rows the dropdown needs, borders included.
#[must_use]
pub fn dropdown_height(search: &SearchState) -> u16 {
    let rows = u16::try_from(search.results.len())
        .unwrap_or(u16::MAX)
        .clamp(1, MAX_DROPDOWN_ROWS);
    rows + 2
}

pub fn render_dropdown(frame: &mut Frame, area: Rect, state: &AppState) {
    let search = state.services.search.state();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));

    if search.results.is_empty() {
        let text = if search.is_loading {
            "Searching…"
        } else {
            NO_RESULTS_MESSAGE
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(MUTED))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items = search
        .results
        .iter()
        .map(|location| {
            ListItem::new(Line::from(vec![
                Span::styled(location.city.clone(), Style::default().fg(TEXT)),
                Span::styled(
                    if location.country.is_empty() {
                        String::new()
                    } else {
                        format!(", {}", location.country)
                    },
                    Style::default().fg(MUTED),
                ),
            ]))
        })
        .collect::<Vec<_>>();
    let selected = state.highlighted.min(items.len().saturating_sub(1));
    let mut list_state = ListState::default().with_selected(Some(selected));
    let list = List::new(items)
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .highlight_symbol("› ")
        .block(block);
    frame.render_stateful_widget(list, area, &mut list_state);
}
