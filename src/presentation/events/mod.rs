//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Outcome of handling one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Not handled; nothing changed.
    Continue,
    /// Leave the event loop.
    Exit,
    /// Handled; redraw.
    Consumed,
}

/// Key checks that apply on every screen.
pub struct EventHandler;

impl EventHandler {
    /// `q` or `Ctrl+C`. Escape is cancel, not quit.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => key.modifiers.is_empty(),
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        }
    }

    /// Release and repeat events reported by some terminals are ignored.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }
}
