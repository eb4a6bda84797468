use crate::theme::Theme;
use crate::widgets::chrome::field_block;
use crate::widgets::{Chrome, Widget};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Ordered rows with a cursor. The row collection is owned by the widget and
/// replaced wholesale by `set_items`.
#[derive(Clone, Debug)]
pub struct ListView {
    chrome: Chrome,
    items: Vec<String>,
    cursor: usize,
    offset: usize,
}

impl ListView {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            chrome: Chrome::new(label),
            items: Vec::new(),
            cursor: 0,
            offset: 0,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Swaps in a new backing collection and resets the cursor.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.cursor = 0;
        self.offset = 0;
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
        self.cursor = self.items.len() - 1;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remove_at_cursor(&mut self) -> Option<String> {
        if self.cursor >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(self.cursor);
        if self.cursor >= self.items.len() {
            self.cursor = self.items.len().saturating_sub(1);
        }
        Some(removed)
    }
}

impl Widget for ListView {
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let theme = Theme::default();
        let visible = area.height.saturating_sub(2) as usize;
        if visible > 0 {
            if self.cursor < self.offset {
                self.offset = self.cursor;
            } else if self.cursor >= self.offset + visible {
                self.offset = self.cursor + 1 - visible;
            }
        }
        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible.max(1))
            .map(|(i, item)| {
                let st = if !self.chrome.is_enabled() {
                    theme.text_disabled()
                } else if focused && i == self.cursor {
                    theme.list_cursor_style()
                } else {
                    Style::default()
                };
                Line::from(Span::styled(item.clone(), st))
            })
            .collect();
        let p = Paragraph::new(lines).block(field_block(&self.chrome, focused));
        f.render_widget(p, area);
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                false
            }
            KeyCode::Delete => self.remove_at_cursor().is_some(),
            _ => false,
        }
    }

    fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }
}
