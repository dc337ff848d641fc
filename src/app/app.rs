use std::io;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout},
    prelude::{Backend, CrosstermBackend},
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::app::app_state::{AppState, Focus};
use crate::app::ui::{self, InputBox};
use crate::models::{Action, Conversation, Event};

use super::services::EventService;

const SIDEBAR_WIDTH: u16 = 32;

pub struct InitProps {
    pub conversations: Vec<Conversation>,
    pub current: Option<String>,
}

pub struct App<'a> {
    action_tx: mpsc::UnboundedSender<Action>,

    events: &'a mut EventService,

    app_state: AppState,
    input: InputBox<'a>,

    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        events: &'a mut EventService,
        cancel_token: CancellationToken,
        init_props: InitProps,
    ) -> App<'a> {
        App {
            action_tx,
            events,
            app_state: AppState::new(init_props.conversations, init_props.current),
            input: InputBox::default(),
            cancel_token,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;

        terminal.show_cursor()?;
        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;
            if self.handle_event().await? {
                return Ok(());
            }
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
            .split(f.area());

        ui::sidebar::render(f, columns[0], &self.app_state);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(columns[1]);

        ui::history::render(f, rows[0], &self.app_state);
        ui::suggestions::render(f, rows[1], &self.app_state);
        self.input.render(f, rows[2], &self.app_state);
        ui::status::render(f, rows[3], &self.app_state);
    }

    /// Returns true when the app should exit.
    async fn handle_event(&mut self) -> Result<bool> {
        let event = self.events.next().await;
        match event {
            Event::Quit => return Ok(true),

            Event::KeyboardTab => {
                self.app_state.focus = match self.app_state.focus {
                    Focus::Input => Focus::Sidebar,
                    Focus::Sidebar => Focus::Input,
                };
            }

            Event::KeyboardEsc => self.app_state.focus = Focus::Input,

            Event::KeyboardCtrlN => {
                self.dispatch(Action::NewConversation);
                self.app_state.focus = Focus::Input;
            }

            Event::KeyboardCtrlX => {
                if self.app_state.focus == Focus::Sidebar {
                    if let Some(id) = self.app_state.selected_sidebar_id() {
                        self.dispatch(Action::DeleteConversation(id.to_string()));
                    }
                }
            }

            Event::KeyboardEnter => match self.app_state.focus {
                Focus::Sidebar => {
                    if let Some(id) = self.app_state.selected_sidebar_id() {
                        self.dispatch(Action::SelectConversation(id.to_string()));
                    }
                    self.app_state.focus = Focus::Input;
                }
                Focus::Input => self.submit_input(),
            },

            Event::KeyboardNewLine => {
                if self.app_state.focus == Focus::Input {
                    self.input.insert_newline();
                }
            }

            Event::KeyboardCharInput(input) => {
                if self.app_state.focus == Focus::Input && !self.app_state.waiting_for_backend {
                    self.input.handle_input(input);
                }
            }

            Event::KeyboardPaste(text) => {
                if self.app_state.focus == Focus::Input && !self.app_state.waiting_for_backend {
                    self.input.paste(&text);
                }
            }

            Event::KeyboardF(n) => self.submit_suggestion(n as usize),

            Event::UiScrollUp => match self.app_state.focus {
                Focus::Sidebar => self.app_state.sidebar_up(),
                Focus::Input => self.app_state.scroll_offset += 1,
            },

            Event::UiScrollDown => match self.app_state.focus {
                Focus::Sidebar => self.app_state.sidebar_down(),
                Focus::Input => {
                    self.app_state.scroll_offset = self.app_state.scroll_offset.saturating_sub(1);
                }
            },

            Event::UiTick => self.app_state.tick_notice(),

            Event::ConversationsRefreshed {
                conversations,
                current,
            } => self.app_state.refresh(conversations, current),

            Event::SuggestionsUpdated(suggestions) => self.app_state.suggestions = suggestions,

            Event::SendStarted => self.app_state.waiting_for_backend = true,

            Event::SendSettled => self.app_state.waiting_for_backend = false,

            Event::Notice(notice) => self.app_state.set_notice(notice),
        }
        Ok(false)
    }

    fn submit_input(&mut self) {
        if self.app_state.waiting_for_backend {
            return;
        }
        let text = self.input.take_text();
        if text.trim().is_empty() {
            return;
        }
        self.dispatch(Action::SendMessage(text));
    }

    fn submit_suggestion(&mut self, n: usize) {
        if self.app_state.waiting_for_backend {
            return;
        }
        let Some(suggestion) = self.app_state.suggestions.get(n.saturating_sub(1)) else {
            return;
        };
        self.dispatch(Action::SendMessage(suggestion.text().to_string()));
    }

    fn dispatch(&self, action: Action) {
        if let Err(err) = self.action_tx.send(action) {
            log::error!("Failed to dispatch action: {}", err);
        }
    }
}
