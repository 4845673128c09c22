//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, awaiting_choice: bool, colors: &ThemeColors) {
    let keymap_text = if awaiting_choice {
        "1-9 + Enter:choose | Backspace:edit | Ctrl-C:quit"
    } else {
        "Enter:submit | empty Enter/Esc:back to menu | Ctrl-C:quit"
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
