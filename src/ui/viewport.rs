//! Logical-to-pixel mapping and the drawing primitives for one frame.
//!
//! Everything here is pure: [`scene`] turns the collection into a list of
//! [`Primitive`]s in canvas pixel space (origin top-left, y down), and the
//! terminal painter consumes that list.

use super::formatters::format_axis_label;
use crate::data::{PlotCollection, Point, Range};
use crate::util::ViewportConfig;

/// Affine map from logical coordinates to canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Pixels per unit along x.
    pub scale_x: f64,
    /// Pixels per unit along y.
    pub scale_y: f64,
    /// Pixel position of the logical origin.
    pub origin: (f64, f64),
    /// Grid spacing in pixels.
    pub grid_step: f64,
}

impl Viewport {
    /// The fixed 20 px/unit viewport centred on the canvas.
    ///
    /// It ignores the coordinate system, so changing the range changes which
    /// values are sampled but not the drawing scale.
    pub fn fixed(config: &ViewportConfig) -> Self {
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            scale_x: config.pixels_per_unit,
            scale_y: config.pixels_per_unit,
            origin: config.origin,
            grid_step: config.grid_step,
        }
    }

    /// A viewport that stretches `x` and `y` over the whole canvas.
    ///
    /// Falls back to [`Viewport::fixed`] for empty or non-finite ranges.
    pub fn fit(config: &ViewportConfig, x: Range, y: Range) -> Self {
        let usable = |r: Range| r.is_finite() && r.span() != 0.0;
        if !usable(x) || !usable(y) {
            return Self::fixed(config);
        }

        let scale_x = config.canvas_width / x.span();
        let scale_y = config.canvas_height / y.span();
        Self {
            width: config.canvas_width,
            height: config.canvas_height,
            scale_x,
            scale_y,
            origin: (-x.min * scale_x, y.max * scale_y),
            grid_step: config.grid_step,
        }
    }

    /// Map a logical point to pixel coordinates.
    pub fn to_pixel(&self, p: Point) -> (f64, f64) {
        (
            p.x * self.scale_x + self.origin.0,
            -p.y * self.scale_y + self.origin.1,
        )
    }

    /// Map pixel coordinates back to a logical point.
    pub fn to_logical(&self, px: f64, py: f64) -> Point {
        Point::new(
            (px - self.origin.0) / self.scale_x,
            (self.origin.1 - py) / self.scale_y,
        )
    }

    fn grid_positions(&self, extent: f64) -> impl Iterator<Item = f64> + '_ {
        let count = (extent / self.grid_step).floor() as usize;
        (0..=count).map(move |i| i as f64 * self.grid_step)
    }
}

/// Colour role of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveColor {
    /// Light-gray grid lines.
    Grid,
    /// Axis lines.
    Axis,
    /// Plotted curves.
    Curve,
    /// Tick and axis labels.
    Label,
}

/// One drawing instruction in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A straight segment.
    Line {
        /// Start pixel.
        from: (f64, f64),
        /// End pixel.
        to: (f64, f64),
        /// Colour role.
        color: PrimitiveColor,
    },
    /// A text label whose top-left corner sits at `at`.
    Text {
        /// Anchor pixel.
        at: (f64, f64),
        /// Label text.
        text: String,
        /// Colour role.
        color: PrimitiveColor,
    },
}

/// Build the primitives for one frame: grid, axes, curves, then labels.
pub fn scene(plots: &PlotCollection, viewport: &Viewport, labels: bool) -> Vec<Primitive> {
    let mut out = Vec::new();
    let (ox, oy) = viewport.origin;

    for px in viewport.grid_positions(viewport.width) {
        out.push(Primitive::Line {
            from: (px, 0.0),
            to: (px, viewport.height),
            color: PrimitiveColor::Grid,
        });
    }
    for py in viewport.grid_positions(viewport.height) {
        out.push(Primitive::Line {
            from: (0.0, py),
            to: (viewport.width, py),
            color: PrimitiveColor::Grid,
        });
    }

    if (0.0..=viewport.height).contains(&oy) {
        out.push(Primitive::Line {
            from: (0.0, oy),
            to: (viewport.width, oy),
            color: PrimitiveColor::Axis,
        });
    }
    if (0.0..=viewport.width).contains(&ox) {
        out.push(Primitive::Line {
            from: (ox, 0.0),
            to: (ox, viewport.height),
            color: PrimitiveColor::Axis,
        });
    }

    for curve in plots.curves() {
        for pair in curve.points().windows(2) {
            let from = viewport.to_pixel(pair[0]);
            let to = viewport.to_pixel(pair[1]);
            if [from.0, from.1, to.0, to.1].iter().all(|v| v.is_finite()) {
                out.push(Primitive::Line {
                    from,
                    to,
                    color: PrimitiveColor::Curve,
                });
            }
        }
    }

    if labels {
        push_labels(&mut out, viewport);
    }

    out
}

fn push_labels(out: &mut Vec<Primitive>, viewport: &Viewport) {
    let (ox, oy) = viewport.origin;
    // Keep label rows on the canvas even when an axis is scrolled off it
    let label_row = (oy + 10.0).clamp(0.0, viewport.height - 20.0);
    let label_col = (ox + 10.0).clamp(0.0, viewport.width - 30.0);

    for px in viewport.grid_positions(viewport.width) {
        if (px - ox).abs() < 0.5 {
            continue;
        }
        out.push(Primitive::Text {
            at: (px, label_row),
            text: format_axis_label(viewport.to_logical(px, oy).x),
            color: PrimitiveColor::Label,
        });
    }
    for py in viewport.grid_positions(viewport.height) {
        if (py - oy).abs() < 0.5 {
            continue;
        }
        out.push(Primitive::Text {
            at: (label_col, py),
            text: format_axis_label(viewport.to_logical(ox, py).y),
            color: PrimitiveColor::Label,
        });
    }

    out.push(Primitive::Text {
        at: (viewport.width - 20.0, label_row),
        text: "X".to_string(),
        color: PrimitiveColor::Label,
    });
    out.push(Primitive::Text {
        at: (label_col + 10.0, 10.0),
        text: "Y".to_string(),
        color: PrimitiveColor::Label,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Curve;

    fn fixed() -> Viewport {
        Viewport::fixed(&ViewportConfig::default())
    }

    fn count(prims: &[Primitive], role: PrimitiveColor) -> usize {
        prims
            .iter()
            .filter(|p| match p {
                Primitive::Line { color, .. } | Primitive::Text { color, .. } => *color == role,
            })
            .count()
    }

    #[test]
    fn fixed_transform_matches_screen_layout() {
        let vp = fixed();
        assert_eq!(vp.to_pixel(Point::new(0.0, 0.0)), (400.0, 300.0));
        assert_eq!(vp.to_pixel(Point::new(1.0, 1.0)), (420.0, 280.0));
        assert_eq!(vp.to_pixel(Point::new(-10.0, -5.0)), (200.0, 400.0));
        assert_eq!(vp.to_logical(420.0, 280.0), Point::new(1.0, 1.0));
    }

    #[test]
    fn fixed_viewport_ignores_range() {
        let config = ViewportConfig::default();
        assert_eq!(
            Viewport::fit(&config, Range::new(3.0, 3.0), Range::default()),
            Viewport::fixed(&config)
        );
    }

    #[test]
    fn fit_maps_range_corners_to_canvas_corners() {
        let vp = Viewport::fit(
            &ViewportConfig::default(),
            Range::new(0.0, 4.0),
            Range::new(-1.0, 1.0),
        );
        assert_eq!(vp.to_pixel(Point::new(0.0, 1.0)), (0.0, 0.0));
        assert_eq!(vp.to_pixel(Point::new(4.0, -1.0)), (800.0, 600.0));
    }

    #[test]
    fn grid_and_axes() {
        let prims = scene(&PlotCollection::new(), &fixed(), false);
        assert_eq!(count(&prims, PrimitiveColor::Grid), 21 + 16);
        assert_eq!(count(&prims, PrimitiveColor::Axis), 2);
        assert_eq!(count(&prims, PrimitiveColor::Label), 0);
    }

    #[test]
    fn curves_become_segments_and_skip_non_finite() {
        let mut plots = PlotCollection::new();
        plots.add(Curve::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, f64::NAN),
            Point::new(3.0, 1.0),
        ]));
        let prims = scene(&plots, &fixed(), false);
        assert_eq!(count(&prims, PrimitiveColor::Curve), 1);
        assert!(prims.contains(&Primitive::Line {
            from: (400.0, 300.0),
            to: (420.0, 280.0),
            color: PrimitiveColor::Curve,
        }));
    }

    #[test]
    fn labels_skip_origin_ticks() {
        let prims = scene(&PlotCollection::new(), &fixed(), true);
        // 20 x ticks (origin skipped) + 16 y ticks + axis names
        assert_eq!(count(&prims, PrimitiveColor::Label), 20 + 16 + 2);
        assert!(prims.contains(&Primitive::Text {
            at: (440.0, 310.0),
            text: "2".to_string(),
            color: PrimitiveColor::Label,
        }));
        assert!(prims.contains(&Primitive::Text {
            at: (410.0, 280.0),
            text: "1".to_string(),
            color: PrimitiveColor::Label,
        }));
    }
}
