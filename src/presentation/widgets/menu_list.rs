//! Radio-style list of menu items.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::MenuItem;

const SELECTED_MARK: &str = "(•) ";
const UNSELECTED_MARK: &str = "( ) ";
const HIGHLIGHT_SYMBOL: &str = "▶ ";

struct MenuListStyle {
    border: Style,
    name: Style,
    price: Style,
    description: Style,
    selected: Style,
    highlight: Style,
}

impl Default for MenuListStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Yellow),
            name: Style::default().fg(Color::White),
            price: Style::default().fg(Color::Green),
            description: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            selected: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().bg(Color::DarkGray),
        }
    }
}

/// Highlight position within a menu list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuListState {
    highlighted: usize,
}

impl MenuListState {
    /// State with `highlighted` as the cursor row.
    #[must_use]
    pub const fn new(highlighted: usize) -> Self {
        Self { highlighted }
    }

    /// Cursor row.
    #[must_use]
    pub const fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Moves down, wrapping to the top.
    pub const fn highlight_next(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = (self.highlighted + 1) % len;
        }
    }

    /// Moves up, wrapping to the bottom.
    pub const fn highlight_previous(&mut self, len: usize) {
        if len > 0 {
            self.highlighted = if self.highlighted == 0 {
                len - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    /// Jumps to the first row.
    pub const fn highlight_first(&mut self) {
        self.highlighted = 0;
    }

    /// Jumps to the last row.
    pub const fn highlight_last(&mut self, len: usize) {
        self.highlighted = len.saturating_sub(1);
    }
}

/// Menu items with a radio mark on the selected one.
pub struct MenuList<'a> {
    items: &'a [MenuItem],
    selected: Option<&'a MenuItem>,
    title: Option<String>,
    style: MenuListStyle,
}

impl<'a> MenuList<'a> {
    /// List of `items`, nothing selected.
    #[must_use]
    pub fn new(items: &'a [MenuItem]) -> Self {
        Self {
            items,
            selected: None,
            title: None,
            style: MenuListStyle::default(),
        }
    }

    /// Marks `selected` with the filled radio.
    #[must_use]
    pub const fn selected(mut self, selected: Option<&'a MenuItem>) -> Self {
        self.selected = selected;
        self
    }

    /// Border title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn build_item(&self, item: &'a MenuItem, width: usize) -> ListItem<'a> {
        let is_selected = self.selected == Some(item);
        let (mark, name_style) = if is_selected {
            (SELECTED_MARK, self.style.selected)
        } else {
            (UNSELECTED_MARK, self.style.name)
        };

        let price = item.price().to_string();
        let used = HIGHLIGHT_SYMBOL.width() + mark.width() + item.name().width() + price.width();
        let gap = width.saturating_sub(used).max(1);

        let heading = Line::from(vec![
            Span::styled(mark, name_style),
            Span::styled(item.name(), name_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(price, self.style.price),
        ]);
        let description = Line::from(vec![
            Span::raw(" ".repeat(mark.width())),
            Span::styled(item.description(), self.style.description),
        ]);

        ListItem::new(vec![heading, description])
    }
}

impl StatefulWidget for MenuList<'_> {
    type State = MenuListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border);
        if let Some(title) = &self.title {
            block = block.title(format!(" {title} "));
        }

        let inner_width = block.inner(area).width as usize;
        let items: Vec<ListItem<'_>> = self
            .items
            .iter()
            .map(|item| self.build_item(item, inner_width))
            .collect();

        let mut list_state = ListState::default();
        if !self.items.is_empty() {
            list_state.select(Some(state.highlighted.min(self.items.len() - 1)));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(self.style.highlight)
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
