use crossterm::event::KeyEvent;
use std::borrow::Cow;

/// User-facing actions a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Quit,
    StartOrder,
    Next,
    Cancel,

    // Menu list
    HighlightPrevious,
    HighlightNext,
    HighlightFirst,
    HighlightLast,
    Select,
}

impl Action {
    /// Returns the short label shown in the footer bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::StartOrder => "Start Order",
            Self::Next => "Next",
            Self::Cancel => "Cancel",
            Self::HighlightPrevious => "Up",
            Self::HighlightNext => "Down",
            Self::HighlightFirst => "First",
            Self::HighlightLast => "Last",
            Self::Select => "Select",
        }
    }
}

/// A key bound to an action, as shown in the footer bar.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
    pub visible_in_bar: bool,
    pub enabled: bool,
}

impl Keybind {
    /// Creates a visible, enabled keybind.
    #[must_use]
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
            enabled: true,
        }
    }

    /// Overrides the key text shown in the footer.
    #[must_use]
    pub fn key_display(mut self, display: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(display.into());
        self
    }

    /// Keeps the binding active but out of the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Shows the binding greyed out.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
