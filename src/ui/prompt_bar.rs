//! Input line UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Draw the prompt and place the terminal cursor after the typed text.
pub fn draw_prompt(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let label = format!("{}> ", app.menu.prompt());
    let cursor_x = area.x + cursor_offset(&label, &app.input).min(area.width.saturating_sub(1));

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.input.as_str(), Style::default().fg(colors.text)),
    ]);

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors.bg)),
        area,
    );
    f.set_cursor_position((cursor_x, area.y));
}

fn cursor_offset(label: &str, input: &str) -> u16 {
    (label.width() + input.width()).min(u16::MAX as usize) as u16
}
