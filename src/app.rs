// App module - The terminal launcher hosting the todo plugin
// Holds the query bar, the current result rows and the selection, and
// applies the effect of each activation.

use crate::event::{self, AppEvent};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::Stdout;
use tdq::{Effect, Host, Icon, Plugin, ResultItem, TodoError};
use tracing::error;

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

/// Host services for the terminal. Copied text goes to an in-process
/// register shown in the footer.
#[derive(Default)]
pub struct TerminalHost {
    pub notice: Option<Notice>,
    pub register: Option<String>,
}

impl Host for TerminalHost {
    fn show_msg(&mut self, title: &str, body: &str, _icon: Icon) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            title: title.to_string(),
            body: body.to_string(),
        });
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), String> {
        self.register = Some(text.to_string());
        Ok(())
    }
}

pub struct App {
    pub should_quit: bool,
    pub input: String,
    pub results: Vec<ResultItem>,
    pub selected: usize,
    pub host: TerminalHost,
    plugin: Plugin,
}

impl App {
    pub fn new(plugin: Plugin) -> Self {
        let input = format!("{} ", plugin.action_keyword());
        let mut app = Self {
            should_quit: false,
            input,
            results: Vec::new(),
            selected: 0,
            host: TerminalHost::default(),
            plugin,
        };
        app.refresh();
        app
    }

    pub fn action_keyword(&self) -> &str {
        self.plugin.action_keyword()
    }

    pub fn selected_result(&self) -> Option<&ResultItem> {
        self.results.get(self.selected)
    }

    /// Re-run the current query-bar line.
    pub fn refresh(&mut self) {
        match self.plugin.query(&self.input) {
            Ok(results) => {
                self.results = results;
                if self.selected >= self.results.len() {
                    self.selected = 0;
                }
            }
            Err(e) => {
                self.results.clear();
                self.selected = 0;
                self.report(e);
            }
        }
    }

    pub fn set_query(&mut self, text: String) {
        self.input = text;
        self.selected = 0;
        self.refresh();
    }

    pub fn select_previous(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            self.results.len() - 1
        };
    }

    pub fn select_next(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.results.len();
    }

    pub fn activate_selected(&mut self) {
        let Some(item) = self.selected_result().cloned() else {
            return;
        };

        match self.plugin.activate(&item, &mut self.host) {
            Ok(Effect::NoOp) => self.refresh(),
            Ok(Effect::Requery(text)) => self.set_query(text),
            // Closing the result view in a terminal means starting over with an empty query.
            Ok(Effect::Close) => self.set_query(format!("{} ", self.action_keyword())),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, e: TodoError) {
        error!(error = %e, "plugin operation failed");
        self.host.notice = Some(Notice {
            kind: NoticeKind::Error,
            title: e.title().to_string(),
            body: e.user_message(),
        });
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Input(c) => {
                self.input.push(c);
                self.host.notice = None;
                self.refresh();
            }
            AppEvent::Backspace => {
                self.input.pop();
                self.host.notice = None;
                self.refresh();
            }
            AppEvent::ClearQuery => self.set_query(format!("{} ", self.action_keyword())),
            AppEvent::SelectPrevious => self.select_previous(),
            AppEvent::SelectNext => self.select_next(),
            AppEvent::Activate => self.activate_selected(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(frame, self))?;

            if let Some(event) = event::read_event()? {
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
