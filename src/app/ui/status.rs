use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::app_state::AppState;

/// Footer line: loading indicator, notices, and the key map hint.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.waiting_for_backend {
        Line::from(vec![
            Span::styled("Thinking...", Style::default().fg(Color::Yellow).bold()),
            Span::styled(
                " waiting for a reply",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else if let Some(notice) = state.notice() {
        Line::from(Span::styled(
            notice.message().to_string(),
            Style::default().fg(notice.kind().text_color()),
        ))
    } else {
        Line::from(Span::styled(
            "Enter send | Tab conversations | Ctrl+n new | Ctrl+x delete | Ctrl+q quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    f.render_widget(Paragraph::new(line), area);
}
