//! Colors for the UI.

use super::PrimitiveColor;
use crate::app::Level;
use ratatui::style::Color;

/// Theme color palette.
///
/// The plot canvas is black on white with a light-gray grid; the
/// surrounding panels use the Gruvbox dark palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Canvas background.
    pub canvas_bg: Color,
    /// Grid lines.
    pub grid: Color,
    /// Axes.
    pub axis: Color,
    /// Curves.
    pub curve: Color,
    /// Tick and axis labels.
    pub label: Color,
    /// Panel background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Warning color.
    pub warning: Color,
    /// Error color.
    pub error: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            canvas_bg: Color::Rgb(255, 255, 255),
            grid: Color::Rgb(200, 200, 200),
            axis: Color::Rgb(0, 0, 0),
            curve: Color::Rgb(0, 0, 0),
            label: Color::Rgb(0, 0, 0),
            bg: Color::Rgb(40, 40, 40),
            text: Color::Rgb(235, 219, 178),
            heading: Color::Rgb(251, 184, 108),
            border: Color::Rgb(102, 92, 84),
            status_fg: Color::Rgb(235, 219, 178),
            status_bg: Color::Rgb(60, 56, 54),
            warning: Color::Rgb(250, 189, 47),
            error: Color::Rgb(251, 73, 52),
        }
    }
}

impl ThemeColors {
    /// Color for a drawing primitive.
    pub fn primitive(&self, role: PrimitiveColor) -> Color {
        match role {
            PrimitiveColor::Grid => self.grid,
            PrimitiveColor::Axis => self.axis,
            PrimitiveColor::Curve => self.curve,
            PrimitiveColor::Label => self.label,
        }
    }

    /// Color for a log message.
    pub fn message(&self, level: Level) -> Color {
        match level {
            Level::Info => self.text,
            Level::Warning => self.warning,
            Level::Error => self.error,
        }
    }
}
