use crate::domain::screen::ScreenId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const TOTAL_STEPS: u8 = 4;

struct HeaderBarStyle {
    background: Style,
    app_name: Style,
    title: Style,
    step: Style,
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default().bg(Color::Black),
            app_name: Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            step: Style::default().fg(Color::DarkGray),
        }
    }
}

/// App bar showing the active screen's title and progress.
pub struct HeaderBar {
    screen: ScreenId,
    style: HeaderBarStyle,
}

impl HeaderBar {
    /// Header for `screen`.
    #[must_use]
    pub fn new(screen: ScreenId) -> Self {
        Self {
            screen,
            style: HeaderBarStyle::default(),
        }
    }


    fn step_text(&self) -> Option<String> {
        self.screen
            .step()
            .map(|step| format!("Step {step}/{TOTAL_STEPS}"))
    }
}

impl Widget for HeaderBar {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        buf.set_style(Rect::new(area.x, area.y, area.width, 1), self.style.background);

        let left = Line::from(vec![
            Span::styled(" LUNCH TRAY ", self.style.app_name),
            Span::raw(" "),
            Span::styled(self.screen.title(), self.style.title),
        ]);
        Paragraph::new(left).render(area, buf);

        if let Some(step) = self.step_text() {
            let width = (step.len() as u16 + 1).min(area.width);
            let right_area = Rect::new(area.right().saturating_sub(width), area.y, width, 1);
            Paragraph::new(Span::styled(step, self.style.step)).render(right_area, buf);
        }
    }
}
