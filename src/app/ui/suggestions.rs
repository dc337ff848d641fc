use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::app_state::AppState;

/// One row of canned prompts, picked with F1..F3.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    if state.waiting_for_backend || state.suggestions.is_empty() {
        return;
    }

    let mut spans: Vec<Span> = vec![];
    for (i, suggestion) in state.suggestions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("F{}", i + 1),
            Style::default().fg(Color::LightMagenta).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", suggestion.text()),
            Style::default().fg(Color::Gray),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
