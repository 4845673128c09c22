//! Ordered collection of displayed curves.

use super::{Curve, Range, Sampler};

/// Outcome of resampling every curve in a collection.
#[derive(Debug, Default)]
pub struct RegenerateReport {
    /// Curves successfully resampled.
    pub regenerated: usize,
    /// Point-only curves left as they were.
    pub raw: usize,
    /// Samples dropped across all curves.
    pub skipped_samples: usize,
    /// Curves whose resampling failed, with the reason.
    pub failures: Vec<(String, String)>,
}

impl RegenerateReport {
    /// Whether every evaluable curve was resampled.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The curves currently displayed, in draw order.
#[derive(Debug, Clone, Default)]
pub struct PlotCollection {
    curves: Vec<Curve>,
}

impl PlotCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a curve; it draws on top of earlier ones.
    pub fn add(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    /// Remove every curve.
    pub fn clear(&mut self) {
        self.curves.clear();
    }

    /// Replace the whole contents.
    pub fn replace(&mut self, curves: Vec<Curve>) {
        self.curves = curves;
    }

    /// Get the curves in insertion order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Resample every evaluable curve over `range`.
    ///
    /// A failing curve keeps its previous points; the rest are unaffected.
    pub fn regenerate(
        &mut self,
        sampler: &Sampler,
        range: Range,
        num_points: usize,
    ) -> RegenerateReport {
        let mut report = RegenerateReport::default();

        for curve in &mut self.curves {
            match curve.regenerate(sampler, range, num_points) {
                Ok(Some(skipped)) => {
                    report.regenerated += 1;
                    report.skipped_samples += skipped;
                },
                Ok(None) => report.raw += 1,
                Err(e) => {
                    tracing::warn!("Failed to regenerate {}: {}", curve.label(), e);
                    report.failures.push((curve.label(), e.to_string()));
                },
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DomainPolicy, MathFunction, Point};

    fn sampled(function: MathFunction) -> Curve {
        Curve::sample(function, &Sampler::default(), Range::default(), 20)
            .unwrap()
            .0
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut plots = PlotCollection::new();
        let curve = sampled(MathFunction::polynomial(vec![1.0]));
        plots.add(curve.clone());
        plots.add(sampled(MathFunction::exponential(1.0, 2.0)));
        plots.add(curve.clone());

        assert_eq!(plots.len(), 3);
        assert_eq!(plots.curves()[0], curve);
        assert_eq!(plots.curves()[2], curve);
        assert_eq!(plots.curves()[1].function().unwrap().name(), "exponential");

        plots.clear();
        assert!(plots.is_empty());
    }

    #[test]
    fn regenerate_uses_new_range() {
        let mut plots = PlotCollection::new();
        plots.add(sampled(MathFunction::polynomial(vec![0.0, 1.0])));

        let report = plots.regenerate(&Sampler::default(), Range::new(0.0, 4.0), 8);
        assert!(report.is_clean());
        assert_eq!(report.regenerated, 1);

        let points = plots.curves()[0].points();
        assert_eq!(points.len(), 9);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[8].x, 4.0);
    }

    #[test]
    fn failed_curve_keeps_old_points() {
        let mut plots = PlotCollection::new();
        let log = Curve::sample(
            MathFunction::logarithmic(1.0, 2.0, 0.0).unwrap(),
            &Sampler::default(),
            Range::new(1.0, 8.0),
            7,
        )
        .unwrap()
        .0;
        let before = log.points().to_vec();
        plots.add(log);
        plots.add(sampled(MathFunction::polynomial(vec![2.0])));
        plots.add(Curve::from_points(vec![Point::new(1.0, 1.0)]));

        let sampler = Sampler::new(DomainPolicy::Strict);
        let report = plots.regenerate(&sampler, Range::new(-2.0, 2.0), 4);

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.regenerated, 1);
        assert_eq!(report.raw, 1);
        assert_eq!(plots.curves()[0].points(), before.as_slice());
        assert_eq!(plots.curves()[1].points()[0].x, -2.0);
        assert_eq!(plots.curves()[2].points(), &[Point::new(1.0, 1.0)]);
    }
}
