use crate::theme::Theme;
use crate::widgets::Chrome;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

pub fn field_block(chrome: &Chrome, focused: bool) -> Block<'static> {
    field_block_themed(chrome, focused, &Theme::default())
}

/// Bordered block titled with the field label. The invalid marker wins over
/// focus so a rejected field stays visible while the user fixes it.
pub fn field_block_themed(chrome: &Chrome, focused: bool, theme: &Theme) -> Block<'static> {
    let b = Block::default()
        .borders(Borders::ALL)
        .title(chrome.label.clone());
    let style = if chrome.is_invalid() {
        theme.border_invalid()
    } else if !chrome.is_enabled() {
        theme.text_disabled()
    } else if focused {
        theme.border_focused()
    } else {
        theme.border_unfocused()
    };
    b.border_style(style)
}

/// Style for the value inside a field.
pub fn value_style(chrome: &Chrome, focused: bool) -> Style {
    let theme = Theme::default();
    if !chrome.is_enabled() {
        theme.text_disabled()
    } else if focused {
        theme.text_active_bold()
    } else {
        theme.base_style()
    }
}
