use crate::widgets::chrome::{field_block, value_style};
use crate::widgets::{Chrome, Widget};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Checkbox / toggle button. Also used as the gate of optional bindings.
#[derive(Clone, Debug)]
pub struct Toggle {
    chrome: Chrome,
    on: bool,
}

impl Toggle {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            chrome: Chrome::new(label),
            on: false,
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }
}

impl Widget for Toggle {
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let mark = if self.on { "[x]" } else { "[ ]" };
        let line = Line::from(vec![
            Span::styled(mark, value_style(&self.chrome, focused)),
            Span::raw(format!(" {}", self.chrome.label)),
        ]);
        let p = Paragraph::new(line).block(field_block(&self.chrome, focused));
        f.render_widget(p, area);
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.on = !self.on;
                true
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_enter_flip() {
        let mut t = Toggle::new("GUI");
        assert!(t.on_key(KeyCode::Char(' ')));
        assert!(t.is_on());
        assert!(t.on_key(KeyCode::Enter));
        assert!(!t.is_on());
        assert!(!t.on_key(KeyCode::Char('x')));
    }
}
