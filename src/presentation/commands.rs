use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Every binding as `(action, key, modifiers, shown in footer)`. The first
/// binding marked as shown is the one the footer displays.
const BINDINGS: &[(Action, KeyCode, KeyModifiers, bool)] = &[
    (Action::Quit, KeyCode::Char('q'), KeyModifiers::NONE, true),
    (Action::Quit, KeyCode::Char('c'), KeyModifiers::CONTROL, false),
    (Action::StartOrder, KeyCode::Enter, KeyModifiers::NONE, true),
    (Action::StartOrder, KeyCode::Char('s'), KeyModifiers::NONE, false),
    (Action::Next, KeyCode::Enter, KeyModifiers::NONE, true),
    (Action::Next, KeyCode::Char('n'), KeyModifiers::NONE, false),
    (Action::Cancel, KeyCode::Esc, KeyModifiers::NONE, true),
    (Action::HighlightPrevious, KeyCode::Up, KeyModifiers::NONE, true),
    (Action::HighlightPrevious, KeyCode::Char('k'), KeyModifiers::NONE, false),
    (Action::HighlightNext, KeyCode::Down, KeyModifiers::NONE, true),
    (Action::HighlightNext, KeyCode::Char('j'), KeyModifiers::NONE, false),
    (Action::HighlightFirst, KeyCode::Home, KeyModifiers::NONE, true),
    (Action::HighlightFirst, KeyCode::Char('g'), KeyModifiers::NONE, false),
    (Action::HighlightLast, KeyCode::End, KeyModifiers::NONE, true),
    (Action::HighlightLast, KeyCode::Char('G'), KeyModifiers::SHIFT, false),
    (Action::Select, KeyCode::Char(' '), KeyModifiers::NONE, true),
];

/// Key bindings for every action, with the primary key shown in the footer.
pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::with_capacity(BINDINGS.len());

        for &(action, code, modifiers, shown) in BINDINGS {
            let key = KeyEvent::new(code, modifiers);
            if shown {
                display_bindings.entry(action).or_insert(key);
            }
            input_bindings.push((key, action));
        }

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    /// Registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primary key for an action, the one shown in the footer.
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    /// Finds the action bound to `key` among the actions a screen accepts.
    pub fn find_action(&self, key: KeyEvent, allowed: &[Action]) -> Option<Action> {
        self.input_bindings
            .iter()
            .filter(|(_, a)| allowed.contains(a))
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Builds a footer keybind for an action, if it has a primary key.
    pub fn keybind(&self, action: Action, label: &'static str) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

/// Screens that accept a fixed set of actions.
pub trait HasCommands {
    /// Actions the screen accepts, in footer order.
    fn actions(&self) -> &'static [Action];

    /// Footer keybinds for the accepted actions that have a key.
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        self.actions()
            .iter()
            .filter_map(|action| registry.keybind(*action, action.label()))
            .collect()
    }
}
