//! Menu selection screen, shared by the entree, side dish and accompaniment
//! steps.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use super::ViewAction;
use crate::domain::entities::{MenuCategory, MenuItem, OrderState};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::widgets::{MenuList, MenuListState};

const ACTIONS: &[Action] = &[
    Action::HighlightPrevious,
    Action::HighlightNext,
    Action::HighlightFirst,
    Action::HighlightLast,
    Action::Select,
    Action::Next,
    Action::Cancel,
    Action::Quit,
];

/// One step of the menu flow.
pub struct MenuScreen<'a> {
    category: MenuCategory,
    items: &'a [MenuItem],
    order: &'a OrderState,
    can_advance: bool,
}

impl<'a> MenuScreen<'a> {
    /// Menu for `category`, marking the item `order` already holds.
    #[must_use]
    pub const fn new(category: MenuCategory, items: &'a [MenuItem], order: &'a OrderState) -> Self {
        Self {
            category,
            items,
            order,
            can_advance: true,
        }
    }

    /// Sets whether "next" is currently accepted.
    #[must_use]
    pub const fn can_advance(mut self, can_advance: bool) -> Self {
        self.can_advance = can_advance;
        self
    }

    /// List state for entering the screen: the current selection is
    /// highlighted, or the first item when nothing is selected yet.
    #[must_use]
    pub fn initial_state(&self) -> MenuListState {
        let selected = self.order.selection(self.category);
        let index = selected
            .and_then(|item| self.items.iter().position(|offered| offered == item))
            .unwrap_or(0);
        MenuListState::new(index)
    }

    /// Translates a key action into a view request.
    pub fn handle_action(&self, action: Action, state: &mut MenuListState) -> ViewAction {
        let len = self.items.len();
        match action {
            Action::HighlightPrevious => state.highlight_previous(len),
            Action::HighlightNext => state.highlight_next(len),
            Action::HighlightFirst => state.highlight_first(),
            Action::HighlightLast => state.highlight_last(len),
            Action::Select => {
                return self
                    .items
                    .get(state.highlighted())
                    .cloned()
                    .map_or(ViewAction::None, ViewAction::SelectionChanged);
            }
            Action::Next => return ViewAction::Next,
            Action::Cancel => return ViewAction::Cancel,
            Action::StartOrder | Action::Quit => {}
        }
        ViewAction::None
    }
}

impl HasCommands for MenuScreen<'_> {
    fn actions(&self) -> &'static [Action] {
        ACTIONS
    }

    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        self.actions()
            .iter()
            .filter_map(|action| {
                let keybind = registry.keybind(*action, action.label())?;
                Some(match action {
                    Action::HighlightPrevious => {
                        Keybind::new(keybind.key, *action, "Move").key_display("↑/↓")
                    }
                    Action::HighlightNext | Action::HighlightFirst | Action::HighlightLast => {
                        keybind.hidden()
                    }
                    Action::Next if !self.can_advance => keybind.disabled(),
                    _ => keybind,
                })
            })
            .collect()
    }
}

impl StatefulWidget for MenuScreen<'_> {
    type State = MenuListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [list_area, hint_area] = layout.areas(area);

        MenuList::new(self.items)
            .selected(self.order.selection(self.category))
            .title(self.category.display_name())
            .render(list_area, buf, state);

        let hint = if self.items.is_empty() {
            Line::from("Nothing on this menu today")
        } else if self.can_advance {
            Line::from("Press Enter to continue")
        } else {
            Line::from(format!(
                "Choose your {} to continue",
                self.category.display_name().to_lowercase()
            ))
        };
        Paragraph::new(hint.centered())
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .render(hint_area, buf);
    }
}
