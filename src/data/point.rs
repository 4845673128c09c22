//! Sample points and axis ranges.

use std::fmt;

/// One evaluated `(x, f(x))` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Closed interval used for either axis.
///
/// `min <= max` is not enforced here; a reversed range is sampled from
/// `min` towards `max` with a negative step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound (first sampled x).
    pub min: f64,
    /// Upper bound (last sampled x).
    pub max: f64,
}

impl Range {
    /// Create a new range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Signed width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `min > max`.
    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }

    /// Whether both bounds are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(-10.0, 10.0)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
