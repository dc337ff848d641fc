use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Padding, Widget},
};
use tui_textarea::{Input, TextArea};

use crate::app::app_state::{AppState, Focus};

/// The message composer. Input is ignored while a send is outstanding; the
/// service side does not rely on this, it is purely a courtesy lock.
pub struct InputBox<'a> {
    input: TextArea<'a>,
}

impl InputBox<'_> {
    pub fn handle_input(&mut self, input: Input) {
        self.input.input(input);
    }

    pub fn insert_newline(&mut self) {
        self.input.insert_newline();
    }

    pub fn paste(&mut self, text: &str) {
        self.input.insert_str(text);
    }

    /// Current text, clearing the box.
    pub fn take_text(&mut self) -> String {
        let text = self.input.lines().join("\n");
        self.input = build_input();
        text
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Input && !state.waiting_for_backend;
        let border_style = if focused {
            Style::default().fg(Color::LightMagenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .padding(Padding::symmetric(1, 0)),
        );
        self.input.render(area, f.buffer_mut());
    }
}

impl Default for InputBox<'_> {
    fn default() -> Self {
        Self {
            input: build_input(),
        }
    }
}

fn build_input<'a>() -> TextArea<'a> {
    let mut text_area = TextArea::default();
    text_area.set_placeholder_text("Type a message...");
    text_area.set_cursor_line_style(Style::default());
    text_area
}
