//! Status bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar with the latest message and curve count.
pub fn draw_status(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let fg = app
        .messages
        .last()
        .map(|m| colors.message(m.level))
        .unwrap_or(colors.status_fg);

    let text = format!(
        "{} | curves: {} | y {}",
        app.status(),
        app.plots.len(),
        app.coords.y_range()
    );

    let paragraph = Paragraph::new(text).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
