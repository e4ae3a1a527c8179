//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::Money;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    const fn marker(self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "! ",
            Self::Error => "✗ ",
        }
    }
}

/// One-line bar: the latest notification on the left, the running subtotal
/// on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    message: String,
    level: StatusLevel,
    subtotal: Option<Money>,
}

impl StatusBar {
    /// Creates a bar with no message and no subtotal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            level: StatusLevel::Info,
            subtotal: None,
        }
    }

    fn with_message(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
            subtotal: None,
        }
    }

    /// Informational message.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_message(message, StatusLevel::Info)
    }

    /// Success message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_message(message, StatusLevel::Success)
    }

    /// Warning message.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_message(message, StatusLevel::Warning)
    }

    /// Error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_message(message, StatusLevel::Error)
    }

    /// Shows the order subtotal on the right.
    #[must_use]
    pub const fn subtotal(mut self, subtotal: Money) -> Self {
        self.subtotal = Some(subtotal);
        self
    }

    /// Message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message severity.
    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        let mut used = 0;

        if !self.message.is_empty() {
            let text = format!("{}{}", self.level.marker(), self.message);
            used += text.width();
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(self.level.color())
                    .add_modifier(Modifier::BOLD),
            ));
        }

        if let Some(subtotal) = self.subtotal {
            let totals = format!("Subtotal {subtotal}");
            let gap = (area.width as usize).saturating_sub(used + totals.width());
            spans.push(Span::raw(" ".repeat(gap)));
            spans.push(Span::styled(totals, Style::default().fg(Color::White)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(bar: &StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_subtotal_is_flush_right() {
        let bar = StatusBar::warning("Pick one").subtotal(Money::from_cents(700));

        let text = render_text(&bar, 30);

        assert!(text.starts_with("! Pick one"));
        assert!(text.ends_with("Subtotal $7.00"));
    }

    #[test]
    fn test_empty_bar_renders_blank() {
        let text = render_text(&StatusBar::new(), 10);
        assert_eq!(text.trim(), "");
    }

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(StatusBar::error("x").level(), StatusLevel::Error);
        assert_eq!(StatusBar::success("done").message(), "done");
    }
}
