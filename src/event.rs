// Event module - Keyboard input mapped to launcher events

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Input(char),
    Backspace,
    ClearQuery,
    SelectPrevious,
    SelectNext,
    Activate,
    Quit,
}

/// Wait briefly for a key press. `Ok(None)` when nothing relevant arrived.
pub fn read_event() -> anyhow::Result<Option<AppEvent>> {
    if !event::poll(Duration::from_millis(100))? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
        _ => Ok(None),
    }
}

pub fn handle_key_event(key: KeyEvent) -> Option<AppEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(AppEvent::Quit),
            KeyCode::Char('u') => Some(AppEvent::ClearQuery),
            KeyCode::Char('p') => Some(AppEvent::SelectPrevious),
            KeyCode::Char('n') => Some(AppEvent::SelectNext),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(AppEvent::Quit),
        KeyCode::Enter => Some(AppEvent::Activate),
        KeyCode::Up => Some(AppEvent::SelectPrevious),
        KeyCode::Down | KeyCode::Tab => Some(AppEvent::SelectNext),
        KeyCode::Backspace => Some(AppEvent::Backspace),
        KeyCode::Char(c) => Some(AppEvent::Input(c)),
        _ => None,
    }
}
