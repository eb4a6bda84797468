use crate::theme::Theme;
use crate::widgets::chrome::{field_block, value_style};
use crate::widgets::{Chrome, Widget};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const OPTIONS_VISIBLE: usize = 8;

/// Drop-down selection. Closed, the arrows step through the options; Enter
/// opens the option list, where Enter picks the option under the cursor and
/// Esc closes without changing the selection.
#[derive(Clone, Debug)]
pub struct ComboBox {
    chrome: Chrome,
    options: Vec<String>,
    selected: Option<usize>,
    open: bool,
    cursor: usize,
    offset: usize,
}

impl ComboBox {
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            chrome: Chrome::new(label),
            options,
            selected: None,
            open: false,
            cursor: 0,
            offset: 0,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Selects `index`; returns `false` and keeps the selection when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.selected = Some(index);
        self.cursor = index;
        true
    }

    fn step(&mut self, forward: bool) -> bool {
        let last = self.options.len() - 1;
        let next = match self.selected {
            Some(i) if forward => (i + 1).min(last),
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        if self.selected == Some(next) {
            return false;
        }
        self.select(next)
    }

    fn move_cursor(&mut self, forward: bool) {
        let last = self.options.len() - 1;
        self.cursor = if forward {
            (self.cursor + 1).min(last)
        } else {
            self.cursor.saturating_sub(1)
        };
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + OPTIONS_VISIBLE {
            self.offset = self.cursor + 1 - OPTIONS_VISIBLE;
        }
    }
}

impl Widget for ComboBox {
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let theme = Theme::default();
        let summary = self.selected_value().unwrap_or("(none)").to_string();
        let mut lines = vec![Line::from(Span::styled(
            format!("{summary} ▾"),
            value_style(&self.chrome, focused),
        ))];
        if self.open {
            let start = self.offset.min(self.options.len());
            let end = (start + OPTIONS_VISIBLE).min(self.options.len());
            for (oi, opt) in self.options.iter().enumerate().take(end).skip(start) {
                let cur = if oi == self.cursor { '›' } else { ' ' };
                let st = if oi == self.cursor {
                    theme.list_cursor_style()
                } else {
                    theme.text_disabled()
                };
                lines.push(Line::from(Span::styled(format!("{cur} {opt}"), st)));
            }
        }
        let p = Paragraph::new(lines).block(field_block(&self.chrome, focused));
        f.render_widget(p, area);
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        if self.options.is_empty() {
            return false;
        }
        if self.open {
            match key {
                KeyCode::Up => self.move_cursor(false),
                KeyCode::Down => self.move_cursor(true),
                KeyCode::Esc => self.open = false,
                KeyCode::Enter => {
                    self.open = false;
                    if self.selected != Some(self.cursor) {
                        self.selected = Some(self.cursor);
                        return true;
                    }
                }
                _ => {}
            }
            return false;
        }
        match key {
            KeyCode::Up | KeyCode::Left => self.step(false),
            KeyCode::Down | KeyCode::Right => self.step(true),
            KeyCode::Enter => {
                self.open = true;
                self.cursor = self.selected.unwrap_or(0);
                self.offset = self.cursor.saturating_sub(OPTIONS_VISIBLE - 1);
                false
            }
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
