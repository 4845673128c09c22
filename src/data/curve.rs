//! A function paired with its sampled points.

use super::{MathFunction, Point, Range, Sampled, Sampler};
use crate::error::Result;

/// A plotted curve.
///
/// Curves read back from a file carry no function and cannot be resampled.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    function: Option<MathFunction>,
    points: Vec<Point>,
}

impl Curve {
    /// Sample a function into a new curve.
    pub fn sample(
        function: MathFunction,
        sampler: &Sampler,
        range: Range,
        num_points: usize,
    ) -> Result<(Self, usize)> {
        let Sampled { points, skipped } = sampler.generate(&function, range, num_points)?;
        Ok((
            Self {
                function: Some(function),
                points,
            },
            skipped,
        ))
    }

    /// Create a point-only curve.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            function: None,
            points,
        }
    }

    /// Resample in place over a new range.
    ///
    /// Returns `Ok(None)` for point-only curves. On failure the old points
    /// are kept.
    pub fn regenerate(
        &mut self,
        sampler: &Sampler,
        range: Range,
        num_points: usize,
    ) -> Result<Option<usize>> {
        let Some(ref function) = self.function else {
            return Ok(None);
        };

        let sampled = sampler.generate(function, range, num_points)?;
        self.points = sampled.points;
        Ok(Some(sampled.skipped))
    }

    /// Get the generating function, if any.
    pub fn function(&self) -> Option<&MathFunction> {
        self.function.as_ref()
    }

    /// Get the sampled points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether the curve can be resampled.
    pub fn is_evaluable(&self) -> bool {
        self.function.is_some()
    }

    /// Label for lists and status messages.
    pub fn label(&self) -> String {
        match self.function {
            Some(ref f) => f.describe(),
            None => format!("loaded points ({})", self.points.len()),
        }
    }
}
