//! Checkout screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::ViewAction;
use crate::domain::entities::{MenuCategory, Money, OrderState, TaxRate};
use crate::domain::keybinding::{Action, Keybind};
use crate::presentation::commands::{CommandRegistry, HasCommands};

const ACTIONS: &[Action] = &[Action::Next, Action::Cancel, Action::Quit];
const SUMMARY_WIDTH: u16 = 48;

/// Order summary with submit and cancel buttons.
pub struct CheckoutScreen<'a> {
    order: &'a OrderState,
    tax_rate: TaxRate,
}

impl<'a> CheckoutScreen<'a> {
    /// Summary of `order` with tax at `tax_rate`.
    #[must_use]
    pub const fn new(order: &'a OrderState, tax_rate: TaxRate) -> Self {
        Self { order, tax_rate }
    }

    /// Translates a key action into a view request.
    #[must_use]
    pub fn handle_action(&self, action: Action) -> ViewAction {
        match action {
            Action::Next => ViewAction::Next,
            Action::Cancel => ViewAction::Cancel,
            _ => ViewAction::None,
        }
    }

    fn row(label: impl Into<String>, amount: Money, width: usize, style: Style) -> Line<'static> {
        let label = label.into();
        let amount = amount.to_string();
        let gap = width.saturating_sub(label.width() + amount.width()).max(1);
        Line::from(vec![
            Span::styled(label, style),
            Span::raw(" ".repeat(gap)),
            Span::styled(amount, style),
        ])
    }

    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let plain = Style::default().fg(Color::White);
        let muted = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(Span::styled(
                "Order Summary",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if self.order.is_empty() {
            lines.push(Line::from(Span::styled("No items selected", muted)));
        }
        for category in MenuCategory::ALL {
            if let Some(item) = self.order.selection(category) {
                lines.push(Self::row(item.name(), item.price(), width, plain));
            }
        }

        lines.push(Line::from(Span::styled("─".repeat(width), muted)));
        lines.push(Self::row("Subtotal", self.order.subtotal(), width, plain));
        lines.push(Self::row(
            format!("Tax ({})", self.tax_rate),
            self.order.tax(),
            width,
            plain,
        ));
        lines.push(Self::row(
            "Total",
            self.order.total(),
            width,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        lines
    }
}

impl HasCommands for CheckoutScreen<'_> {
    fn actions(&self) -> &'static [Action] {
        ACTIONS
    }

    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind> {
        self.actions()
            .iter()
            .filter_map(|action| {
                let label = match action {
                    Action::Next => "Submit",
                    _ => action.label(),
                };
                registry.keybind(*action, label)
            })
            .collect()
    }
}

impl Widget for CheckoutScreen<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = SUMMARY_WIDTH.min(area.width);
        let item_count = self.order.items().count().max(1) as u16;
        // heading, blank, items, rule, three totals, borders
        let height = (item_count + 8).min(area.height);

        let [_, column, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .areas(area);
        let [_, summary_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .areas(column);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Checkout ");
        let inner = block.inner(summary_area);
        block.render(summary_area, buf);

        let lines = self.lines(inner.width as usize);
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::MenuItem;

    fn order() -> OrderState {
        let rate = TaxRate::DEFAULT;
        OrderState::empty()
            .with_selection(
                MenuCategory::Entree,
                MenuItem::new("Burrito", "", Money::from_cents(500)),
                rate,
            )
            .with_selection(
                MenuCategory::SideDish,
                MenuItem::new("Fries", "", Money::from_cents(200)),
                rate,
            )
            .with_selection(
                MenuCategory::Accompaniment,
                MenuItem::new("Side salad", "", Money::from_cents(150)),
                rate,
            )
    }

    fn render_text(order: &OrderState) -> String {
        let area = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(area);
        CheckoutScreen::new(order, TaxRate::DEFAULT).render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_summary_shows_totals() {
        let text = render_text(&order());

        assert!(text.contains("Burrito"));
        assert!(text.contains("Side salad"));
        assert!(text.contains("$8.50"));
        assert!(text.contains("Tax (8%)"));
        assert!(text.contains("$0.68"));
        assert!(text.contains("$9.18"));
    }

    #[test]
    fn test_empty_summary() {
        let text = render_text(&OrderState::empty());
        assert!(text.contains("No items selected"));
        assert!(text.contains("$0.00"));
    }

    #[test]
    fn test_next_is_labelled_submit() {
        let order = OrderState::empty();
        let screen = CheckoutScreen::new(&order, TaxRate::DEFAULT);
        let commands = screen.get_commands(&CommandRegistry::new());

        assert_eq!(commands[0].action, Action::Next);
        assert_eq!(commands[0].label, "Submit");
        assert_eq!(screen.handle_action(Action::Next), ViewAction::Next);
        assert_eq!(screen.handle_action(Action::Select), ViewAction::None);
    }
}
