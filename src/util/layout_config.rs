//! Layout and sampling configuration.

/// Configuration for the plotting canvas.
#[derive(Debug, Clone)]
pub struct ViewportConfig {
    /// Logical canvas width in pixels.
    pub canvas_width: f64,
    /// Logical canvas height in pixels.
    pub canvas_height: f64,
    /// Pixels per unit on both axes (fixed viewport).
    pub pixels_per_unit: f64,
    /// Pixel position of the logical origin.
    pub origin: (f64, f64),
    /// Distance between grid lines in pixels.
    pub grid_step: f64,
    /// Smallest canvas (in terminal cells) that still gets labels.
    pub min_label_cells: (u16, u16),
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            pixels_per_unit: 20.0,
            origin: (400.0, 300.0),
            grid_step: 40.0,
            min_label_cells: (40, 12),
        }
    }
}

/// Configuration for curve sampling.
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Segments per curve; each curve has one more sample than this.
    pub num_points: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { num_points: 100 }
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Default)]
pub struct PlotConfig {
    /// Canvas layout.
    pub viewport: ViewportConfig,
    /// Sampling resolution.
    pub sampling: SamplingConfig,
}
