//! Side panel: menu, curve list and message log.

use super::formatters::format_stat_value;
use super::ThemeColors;
use crate::app::App;
use crate::command::Menu;
use crate::data::Curve;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the side panel.
pub(super) fn draw_panel(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let menu_height = Menu::lines().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(menu_height),
            Constraint::Percentage(40),
            Constraint::Min(3),
        ])
        .split(area);

    draw_menu(f, app, chunks[0], colors);
    draw_curves(f, app, chunks[1], colors);
    draw_messages(f, app, chunks[2], colors);
}

fn panel_block<'a>(title: &'a str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
}

fn draw_menu(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let pending = app.menu.pending().map(|a| a.choice());

    let items: Vec<ListItem<'_>> = Menu::lines()
        .into_iter()
        .enumerate()
        .map(|(idx, text)| {
            let style = if pending == Some(idx + 1) {
                Style::default()
                    .fg(colors.bg)
                    .bg(colors.heading)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(text)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(panel_block(" Menu ", colors)), area);
}

fn curve_summary(curve: &Curve) -> String {
    let (min, max) = curve
        .points()
        .iter()
        .map(|p| p.y)
        .filter(|y| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

    if min > max {
        format!("{} pts", curve.points().len())
    } else {
        format!(
            "{} pts, y in [{}, {}]",
            curve.points().len(),
            format_stat_value(min),
            format_stat_value(max)
        )
    }
}

fn draw_curves(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let lines: Vec<Line<'_>> = if app.plots.is_empty() {
        vec![Line::from(Span::styled(
            "No curves",
            Style::default().fg(colors.text),
        ))]
    } else {
        app.plots
            .curves()
            .iter()
            .enumerate()
            .flat_map(|(idx, curve)| {
                [
                    Line::from(Span::styled(
                        format!("{}. {}", idx + 1, curve.label()),
                        Style::default().fg(colors.heading),
                    )),
                    Line::from(Span::styled(
                        format!("   {}", curve_summary(curve)),
                        Style::default().fg(colors.text),
                    )),
                ]
            })
            .collect()
    };

    let paragraph = Paragraph::new(lines)
        .block(panel_block(" Curves ", colors))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_messages(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.messages.len().saturating_sub(visible);

    let lines: Vec<Line<'_>> = app.messages[start..]
        .iter()
        .map(|m| {
            Line::from(Span::styled(
                m.text.as_str(),
                Style::default().fg(colors.message(m.level)),
            ))
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines).block(panel_block(" Messages ", colors)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;

    #[test]
    fn summary_ignores_non_finite_values() {
        let curve = Curve::from_points(vec![
            Point::new(0.0, f64::NAN),
            Point::new(1.0, -2.0),
            Point::new(2.0, 3.0),
        ]);
        assert_eq!(curve_summary(&curve), "3 pts, y in [-2.0000, 3.0000]");
        assert_eq!(curve_summary(&Curve::from_points(Vec::new())), "0 pts");
    }
}
