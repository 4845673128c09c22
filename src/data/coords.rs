//! Visible coordinate ranges.

use super::Range;

/// Current visible x and y ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoordinateSystem {
    x_range: Range,
    y_range: Range,
}

impl CoordinateSystem {
    /// Create a coordinate system.
    pub fn new(x_range: Range, y_range: Range) -> Self {
        Self { x_range, y_range }
    }

    /// Replace both ranges at once.
    pub fn set_ranges(&mut self, x_range: Range, y_range: Range) {
        self.x_range = x_range;
        self.y_range = y_range;
    }

    /// Get the x range.
    pub fn x_range(&self) -> Range {
        self.x_range
    }

    /// Get the y range.
    pub fn y_range(&self) -> Range {
        self.y_range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_symmetric_ten() {
        let coords = CoordinateSystem::default();
        assert_eq!(coords.x_range(), Range::new(-10.0, 10.0));
        assert_eq!(coords.y_range(), Range::new(-10.0, 10.0));
    }

    #[test]
    fn set_ranges_replaces_both() {
        let mut coords = CoordinateSystem::default();
        coords.set_ranges(Range::new(0.0, 1.0), Range::new(-2.0, 2.0));
        assert_eq!(coords.x_range(), Range::new(0.0, 1.0));
        assert_eq!(coords.y_range(), Range::new(-2.0, 2.0));
    }
}
