//! Terminal painter for the plot primitives.

use super::viewport::{scene, Primitive, PrimitiveColor};
use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

/// Draw the plot canvas.
pub(super) fn draw_plot(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(format!(" Plot x {} ", app.coords.x_range()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);

    let labels = app.options.show_labels && labels_fit(inner, app.config.viewport.min_label_cells);
    if app.options.show_labels && !labels && !app.labels_notice_logged {
        tracing::warn!(
            "Canvas {}x{} too small for labels, drawing without them",
            inner.width,
            inner.height
        );
        app.labels_notice_logged = true;
    }

    let viewport = app.viewport();
    let primitives = scene(&app.plots, &viewport, labels);
    let height = viewport.height;

    let canvas = Canvas::default()
        .block(block)
        .background_color(colors.canvas_bg)
        .marker(Marker::Braille)
        .x_bounds([0.0, viewport.width])
        .y_bounds([0.0, viewport.height])
        .paint(|ctx| {
            // Grid and axes first so curves sit on their own layer above them
            for prim in &primitives {
                if let Primitive::Line { from, to, color } = prim {
                    if *color != PrimitiveColor::Curve {
                        ctx.draw(&line(*from, *to, height, colors.primitive(*color)));
                    }
                }
            }
            ctx.layer();

            for prim in &primitives {
                if let Primitive::Line {
                    from,
                    to,
                    color: PrimitiveColor::Curve,
                } = prim
                {
                    ctx.draw(&line(*from, *to, height, colors.curve));
                }
            }
            ctx.layer();

            for prim in &primitives {
                if let Primitive::Text { at, text, color } = prim {
                    ctx.print(
                        at.0,
                        height - at.1,
                        Span::styled(
                            text.clone(),
                            Style::default()
                                .fg(colors.primitive(*color))
                                .bg(colors.canvas_bg),
                        ),
                    );
                }
            }
        });

    f.render_widget(canvas, area);
}

// Canvas y grows upward, pixel y grows downward.
fn line(from: (f64, f64), to: (f64, f64), height: f64, color: Color) -> CanvasLine {
    CanvasLine::new(from.0, height - from.1, to.0, height - to.1, color)
}

fn labels_fit(inner: Rect, min_cells: (u16, u16)) -> bool {
    inner.width >= min_cells.0 && inner.height >= min_cells.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppOptions;
    use crate::util::PlotConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn labels_need_room() {
        assert!(labels_fit(Rect::new(0, 0, 80, 24), (40, 12)));
        assert!(!labels_fit(Rect::new(0, 0, 20, 24), (40, 12)));
    }

    #[test]
    fn small_canvas_degrades_without_labels() {
        let mut app = App::with_default_curves(PlotConfig::default(), AppOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_plot(f, &mut app, area, &ThemeColors::default());
            })
            .unwrap();
        assert!(app.labels_notice_logged);
    }
}
