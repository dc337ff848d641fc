use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::app_state::AppState;
use crate::models::Message;

/// The visible message list for the current conversation. Sticks to the
/// bottom unless the user has scrolled up.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let title = state
        .current_conversation()
        .map(|c| c.title().to_string())
        .unwrap_or_default();

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match state.current_conversation() {
        Some(conversation) if !conversation.is_empty() => conversation
            .messages()
            .iter()
            .flat_map(message_lines)
            .collect::<Vec<Line>>(),
        _ => vec![
            Line::from(""),
            Line::from("  Start a new conversation").bold(),
            Line::from("  Ask me anything or try one of the suggestions below").dark_gray(),
        ],
    };

    let inner_height = area.height.saturating_sub(2) as usize;
    let bottom = lines.len().saturating_sub(inner_height);
    let scroll = bottom.saturating_sub(state.scroll_offset);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(paragraph, area);
}

fn message_lines(message: &Message) -> Vec<Line<'_>> {
    let (label, color) = if message.is_user() {
        ("You", Color::LightGreen)
    } else {
        ("Bot", Color::LightBlue)
    };

    let header = Line::from(vec![
        Span::styled(label, Style::default().fg(color).bold()),
        Span::styled(
            format!("  {}", message.timestamp().format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let mut lines = vec![header];
    lines.extend(message.content().lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(""));
    lines
}
