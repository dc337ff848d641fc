use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::app::app_state::{AppState, Focus};

/// Conversation list. The current conversation is marked with `*`; the
/// hovered row is highlighted while the sidebar has focus.
pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
    let items = state
        .conversations
        .iter()
        .map(|conversation| {
            let marker = if Some(conversation.id()) == state.current.as_deref() {
                "* "
            } else {
                "  "
            };
            ListItem::new(Line::from(format!("{}{}", marker, conversation.title())))
        })
        .collect::<Vec<ListItem>>();

    let focused = state.focus == Focus::Sidebar;
    let border_style = if focused {
        Style::default().fg(Color::LightMagenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("Conversations")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.sidebar_index));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}
