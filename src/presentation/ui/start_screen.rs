//! Start screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget},
};

use super::ViewAction;
use crate::domain::keybinding::Action;
use crate::presentation::commands::HasCommands;

const LOGO_TEXT: &str = "
╦  ╦ ╦╔╗╔╔═╗╦ ╦  ╔╦╗╦═╗╔═╗╦ ╦
║  ║ ║║║║║  ╠═╣   ║ ╠╦╝╠═╣╚╦╝
╩═╝╚═╝╝╚╝╚═╝╩ ╩   ╩ ╩╚═╩ ╩ ╩ ";

const ACTIONS: &[Action] = &[Action::StartOrder, Action::Quit];

/// Landing screen with a single "start order" button.
#[derive(Debug, Default)]
pub struct StartScreen;

impl StartScreen {
    /// Creates the start screen.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Translates a key action into a view request.
    #[must_use]
    pub fn handle_action(&self, action: Action) -> ViewAction {
        match action {
            Action::StartOrder => ViewAction::StartOrder,
            _ => ViewAction::None,
        }
    }
}

impl HasCommands for StartScreen {
    fn actions(&self) -> &'static [Action] {
        ACTIONS
    }
}

impl Widget for &StartScreen {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let logo = Text::from(LOGO_TEXT.trim_matches('\n'))
            .style(Style::default().fg(Color::Yellow))
            .centered();
        let logo_height = logo.lines.len() as u16;

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(logo_height),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ]);
        let [_, logo_area, _, button_area, _] = vertical.areas(area);

        Paragraph::new(logo).render(logo_area, buf);

        let button = Line::from(vec![
            Span::raw("Press "),
            Span::styled(
                " Enter ",
                Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" to start your order"),
        ])
        .centered();
        Paragraph::new(button).render(button_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_start_order_is_forwarded() {
        let screen = StartScreen::new();
        assert_eq!(
            screen.handle_action(Action::StartOrder),
            ViewAction::StartOrder
        );
        assert_eq!(screen.handle_action(Action::Next), ViewAction::None);
    }

    #[test]
    fn test_render_shows_prompt() {
        let area = Rect::new(0, 0, 70, 14);
        let mut buf = Buffer::empty(area);

        (&StartScreen::new()).render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("to start your order"));
    }
}
