//! Payoff curve sampling for charting.
//!
//! A chart of a strategy's profit/loss is a sweep of evenly spaced
//! settlement prices through the payoff profile. [`PayoffCurve`] produces
//! that sweep lazily, one point per call, in ascending price order.

use crate::payoff::PayoffProfile;
use pnl_core::{Money, Price, Real};

/// Default number of samples per payoff curve.
pub const DEFAULT_SAMPLES: usize = 51;

/// Inclusive price interval over which a payoff curve is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lower bound.
    pub min: Price,
    /// Upper bound.
    pub max: Price,
}

impl PriceRange {
    /// Create a range from explicit bounds.
    pub fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    /// Default charting window around a reference price: ±30 %.
    pub fn around(reference: Price) -> Self {
        Self {
            min: reference * 0.7,
            max: reference * 1.3,
        }
    }

    /// Width of the interval.
    pub fn width(&self) -> Real {
        self.max - self.min
    }
}

/// One sampled point of a payoff curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Hypothetical settlement price.
    pub price: Price,
    /// Profit/loss if the underlying settles there.
    pub profit_loss: Money,
}

/// Lazy iterator over evenly spaced payoff samples.
///
/// Yields `samples` points from `range.min` to `range.max` inclusive,
/// evaluating the profile once per point. The step is
/// `range.width() / (samples - 1)`; the final point lands exactly on the
/// upper bound. The iterator is `Clone`: a clone replays the sweep from
/// wherever its original stood, so cloning before iteration restarts it.
#[derive(Debug, Clone)]
pub struct PayoffCurve<'a> {
    profile: &'a dyn PayoffProfile,
    range: PriceRange,
    samples: usize,
    cursor: usize,
}

impl<'a> PayoffCurve<'a> {
    /// Create a sampler over `range` with `samples` evenly spaced points.
    ///
    /// Degenerate counts are not errors: zero samples yields nothing and a
    /// single sample yields the range minimum.
    pub fn new(profile: &'a dyn PayoffProfile, range: PriceRange, samples: usize) -> Self {
        Self {
            profile,
            range,
            samples,
            cursor: 0,
        }
    }

    fn price_at(&self, index: usize) -> Price {
        if self.samples < 2 {
            self.range.min
        } else if index + 1 == self.samples {
            self.range.max
        } else {
            let step = self.range.width() / (self.samples - 1) as Real;
            self.range.min + step * index as Real
        }
    }
}

impl Iterator for PayoffCurve<'_> {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.cursor >= self.samples {
            return None;
        }
        let price = self.price_at(self.cursor);
        self.cursor += 1;
        Some(CurvePoint {
            price,
            profit_loss: self.profile.profit_loss(price),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PayoffCurve<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{CashSecuredPut, CoveredCall, Strategy};

    #[test]
    fn around_builds_thirty_percent_window() {
        let r = PriceRange::around(10.0);
        assert!((r.min - 7.0).abs() < 1e-12);
        assert!((r.max - 13.0).abs() < 1e-12);
        assert!((r.width() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn default_curve_shape() {
        let s = Strategy::from(CoveredCall::new(10.0, 11.0, 0.5, 1));
        let points: Vec<_> = s.payoff_curve(PriceRange::new(0.0, 100.0)).collect();
        assert_eq!(points.len(), DEFAULT_SAMPLES);
        assert!((points[0].price - 0.0).abs() < 1e-12);
        assert!((points[points.len() - 1].price - 100.0).abs() < 1e-12);
        for pair in points.windows(2) {
            assert!(pair[1].price > pair[0].price);
        }
    }

    #[test]
    fn samples_agree_with_direct_evaluation() {
        let csp = CashSecuredPut::new(20.0, 1.0, 2);
        let curve = PayoffCurve::new(&csp, PriceRange::new(10.0, 30.0), 11);
        for point in curve {
            assert!((point.profit_loss - csp.profit_loss(point.price)).abs() < 1e-12);
        }
    }

    #[test]
    fn clone_restarts_the_sweep() {
        let csp = CashSecuredPut::new(20.0, 1.0, 1);
        let curve = PayoffCurve::new(&csp, PriceRange::new(0.0, 40.0), 5);
        let fresh = curve.clone();
        let first: Vec<_> = curve.collect();
        let second: Vec<_> = fresh.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn clone_mid_sweep_resumes_from_cursor() {
        let csp = CashSecuredPut::new(20.0, 1.0, 1);
        let mut curve = PayoffCurve::new(&csp, PriceRange::new(0.0, 40.0), 5);
        curve.next();
        curve.next();
        let resumed: Vec<_> = curve.clone().collect();
        let rest: Vec<_> = curve.collect();
        assert_eq!(resumed.len(), 3);
        assert_eq!(resumed, rest);
    }

    #[test]
    fn exact_size_reporting() {
        let csp = CashSecuredPut::new(20.0, 1.0, 1);
        let mut curve = PayoffCurve::new(&csp, PriceRange::new(0.0, 40.0), 51);
        assert_eq!(curve.len(), 51);
        curve.next();
        assert_eq!(curve.len(), 50);
    }

    #[test]
    fn degenerate_sample_counts() {
        let csp = CashSecuredPut::new(20.0, 1.0, 1);
        let empty: Vec<_> = PayoffCurve::new(&csp, PriceRange::new(0.0, 40.0), 0).collect();
        assert!(empty.is_empty());
        let single: Vec<_> = PayoffCurve::new(&csp, PriceRange::new(0.0, 40.0), 1).collect();
        assert_eq!(single.len(), 1);
        assert!((single[0].price - 0.0).abs() < 1e-12);
    }
}
