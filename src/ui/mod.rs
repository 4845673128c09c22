//! User interface rendering.

mod canvas;
mod formatters;
mod keymap_bar;
mod menu_panel;
mod prompt_bar;
mod status_bar;
mod theme;
mod viewport;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{format_axis_label, format_stat_value};
pub use theme::ThemeColors;
pub use viewport::{scene, Primitive, PrimitiveColor, Viewport};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::default();

    // Main layout with prompt, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[0]);

    canvas::draw_plot(f, app, content[0], &colors);
    menu_panel::draw_panel(f, app, content[1], &colors);
    prompt_bar::draw_prompt(f, chunks[1], app, &colors);
    status_bar::draw_status(f, chunks[2], app, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.menu.is_awaiting_choice(), &colors);
}
