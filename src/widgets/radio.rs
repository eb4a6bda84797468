use crate::theme::Theme;
use crate::widgets::chrome::field_block;
use crate::widgets::{Chrome, Widget};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Group of mutually exclusive options laid out on one row.
#[derive(Clone, Debug)]
pub struct RadioGroup {
    chrome: Chrome,
    options: Vec<String>,
    selected: Option<usize>,
}

impl RadioGroup {
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            chrome: Chrome::new(label),
            options,
            selected: None,
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

    /// Selects `index`; returns `false` and keeps the selection when out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }
}

impl Widget for RadioGroup {
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let theme = Theme::default();
        let mut spans: Vec<Span> = Vec::new();
        for (i, opt) in self.options.iter().enumerate() {
            let on = self.selected == Some(i);
            let mark = if on { "(•) " } else { "( ) " };
            let style = if !self.chrome.is_enabled() {
                theme.text_disabled()
            } else if on && focused {
                theme.text_active_bold()
            } else {
                Style::default()
            };
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(format!("{mark}{opt}"), style));
        }
        let p = Paragraph::new(Line::from(spans)).block(field_block(&self.chrome, focused));
        f.render_widget(p, area);
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        if self.options.is_empty() {
            return false;
        }
        let last = self.options.len() - 1;
        let next = match (key, self.selected) {
            (KeyCode::Left | KeyCode::Up, Some(i)) => i.saturating_sub(1),
            (KeyCode::Right | KeyCode::Down, Some(i)) => (i + 1).min(last),
            (KeyCode::Left | KeyCode::Up | KeyCode::Right | KeyCode::Down, None) => 0,
            _ => return false,
        };
        if self.selected == Some(next) {
            return false;
        }
        self.selected = Some(next);
        true
    }

    fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }
}
