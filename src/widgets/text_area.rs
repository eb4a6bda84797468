use crate::widgets::chrome::{field_block, value_style};
use crate::widgets::{Chrome, TextWidget, Widget};
use crossterm::event::KeyCode;
use ratatui::crossterm::event as rt_event;
use ratatui::prelude::*;

/// Multi-line text editor backed by `tui_textarea`.
pub struct TextArea {
    chrome: Chrome,
    ta: tui_textarea::TextArea<'static>,
}

impl TextArea {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            chrome: Chrome::new(label),
            ta: tui_textarea::TextArea::default(),
        }
    }

    pub fn lines(&self) -> &[String] {
        self.ta.lines()
    }

    pub fn text(&self) -> String {
        self.ta.lines().join("\n")
    }

    /// Replaces the whole content; the cursor returns to the start.
    pub fn set_text(&mut self, text: &str) {
        let lines: Vec<String> = if text.is_empty() {
            Vec::new()
        } else {
            text.lines().map(|l| l.to_string()).collect()
        };
        self.set_lines(lines);
    }

    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.ta = if lines.is_empty() {
            tui_textarea::TextArea::default()
        } else {
            tui_textarea::TextArea::new(lines)
        };
    }
}

impl std::fmt::Debug for TextArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextArea")
            .field("chrome", &self.chrome)
            .field("lines", &self.ta.lines())
            .finish()
    }
}

impl TextWidget for TextArea {
    fn value(&self) -> String {
        self.text()
    }

    fn set_value(&mut self, text: &str) {
        self.set_text(text);
    }
}

fn to_rt_key(key: KeyCode) -> Option<rt_event::KeyCode> {
    Some(match key {
        KeyCode::Char(c) => rt_event::KeyCode::Char(c),
        KeyCode::Enter => rt_event::KeyCode::Enter,
        KeyCode::Backspace => rt_event::KeyCode::Backspace,
        KeyCode::Delete => rt_event::KeyCode::Delete,
        KeyCode::Left => rt_event::KeyCode::Left,
        KeyCode::Right => rt_event::KeyCode::Right,
        KeyCode::Up => rt_event::KeyCode::Up,
        KeyCode::Down => rt_event::KeyCode::Down,
        KeyCode::Home => rt_event::KeyCode::Home,
        KeyCode::End => rt_event::KeyCode::End,
        KeyCode::Tab => rt_event::KeyCode::Tab,
        _ => return None,
    })
}

impl Widget for TextArea {
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool) {
        self.ta.set_block(field_block(&self.chrome, focused));
        self.ta.set_style(value_style(&self.chrome, focused));
        f.render_widget(&self.ta, area);
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        match to_rt_key(key) {
            Some(code) => self.ta.input(rt_event::KeyEvent::new(
                code,
                rt_event::KeyModifiers::NONE,
            )),
            None => false,
        }
    }

    fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }
}
