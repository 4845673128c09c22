//! Fixed-resolution point sampling.

use super::{MathFunction, Point, Range};
use crate::error::{PlotError, Result};

/// What to do with samples the function cannot evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Abort the whole pass on the first failing sample.
    Strict,
    /// Drop failing samples and count them.
    #[default]
    SkipUndefined,
}

impl DomainPolicy {
    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::SkipUndefined => "skip undefined",
        }
    }
}

/// Result of one sampling pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampled {
    /// Samples in increasing index order.
    pub points: Vec<Point>,
    /// Samples dropped because evaluation failed.
    pub skipped: usize,
}

/// Evenly spaced sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sampler {
    /// Failure handling.
    pub policy: DomainPolicy,
}

impl Sampler {
    /// Create a sampler with the given policy.
    pub fn new(policy: DomainPolicy) -> Self {
        Self { policy }
    }

    /// Sample `function` at `num_points + 1` evenly spaced x values across `range`.
    pub fn generate(
        &self,
        function: &MathFunction,
        range: Range,
        num_points: usize,
    ) -> Result<Sampled> {
        if num_points == 0 {
            return Err(PlotError::invalid_argument(
                "number of sample points must be at least 1",
            ));
        }

        let step = range.span() / num_points as f64;
        let mut points = Vec::with_capacity(num_points + 1);
        let mut skipped = 0;
        let mut first_error = None;

        for i in 0..=num_points {
            let x = if i == num_points {
                range.max
            } else {
                range.min + i as f64 * step
            };

            match function.evaluate(x) {
                Ok(y) => points.push(Point::new(x, y)),
                Err(e) => match self.policy {
                    DomainPolicy::Strict => return Err(e),
                    DomainPolicy::SkipUndefined => {
                        skipped += 1;
                        first_error.get_or_insert(e);
                    },
                },
            }
        }

        if points.is_empty() {
            if let Some(e) = first_error {
                return Err(e);
            }
        }

        if skipped > 0 {
            tracing::debug!(
                "Skipped {} undefined samples of {} over {}",
                skipped,
                function.name(),
                range
            );
        }

        Ok(Sampled { points, skipped })
    }
}
