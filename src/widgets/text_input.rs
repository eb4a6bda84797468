use crate::widgets::chrome::{field_block, value_style};
use crate::widgets::{Chrome, TextWidget, Widget};
use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Single-line text field.
#[derive(Clone, Debug)]
pub struct TextInput {
    chrome: Chrome,
    text: String,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            chrome: Chrome::new(label),
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl TextWidget for TextInput {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.set_text(text);
    }
}

impl Widget for TextInput {
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        let mut val = self.text.clone();
        if focused && self.chrome.is_enabled() {
            val.push('▏');
        }
        let p = Paragraph::new(Span::styled(val, value_style(&self.chrome, focused)))
            .block(field_block(&self.chrome, focused));
        f.render_widget(p, area);
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        match key {
            // Single-line: newlines never enter the value
            KeyCode::Char(c) if c != '\n' && c != '\r' => {
                self.text.push(c);
                true
            }
            KeyCode::Backspace => self.text.pop().is_some(),
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
