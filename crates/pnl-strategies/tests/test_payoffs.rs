//! Cross-strategy payoff properties.
//!
//! These integration tests pin the analytic relationships every profile
//! must satisfy: the break-even price is a root of the profit/loss
//! function, spread payoffs are continuous at both strikes, and the
//! reported extrema match the profit/loss surface sampled densely.

use pnl_core::comparison::near_zero;
use pnl_strategies::{
    BearCallSpread, BullPutSpread, CashSecuredPut, CoveredCall, PayoffCurve, PayoffProfile,
    PriceRange, Strategy,
};
use proptest::prelude::*;

fn sample_strategies() -> Vec<Strategy> {
    vec![
        CoveredCall::new(10.0, 11.0, 0.5, 1).into(),
        CashSecuredPut::new(20.0, 1.0, 2).into(),
        BearCallSpread::new(30.0, 2.0, 35.0, 0.8, 1).into(),
        BullPutSpread::new(50.0, 2.5, 45.0, 1.0, 1).into(),
    ]
}

/// Largest strike involved in a sampled strategy, for sizing sweep ranges.
fn top_strike(s: &Strategy) -> f64 {
    match s {
        Strategy::CoveredCall(p) => p.strike,
        Strategy::CashSecuredPut(p) => p.strike,
        Strategy::BearCallSpread(p) => p.short_strike.max(p.long_strike),
        Strategy::BullPutSpread(p) => p.short_strike.max(p.long_strike),
    }
}

#[test]
fn break_even_is_a_root() {
    for s in sample_strategies() {
        let at_break_even = s.profit_loss(s.break_even());
        assert!(
            near_zero(at_break_even),
            "{s}: profit/loss at break-even is {at_break_even}"
        );
    }
}

#[test]
fn spreads_are_continuous_at_both_strikes() {
    let eps = 1e-9;
    let bcs = BearCallSpread::new(30.0, 2.0, 35.0, 0.8, 1);
    let bps = BullPutSpread::new(50.0, 2.5, 45.0, 1.0, 1);
    for (profile, strikes) in [
        (&bcs as &dyn PayoffProfile, [30.0, 35.0]),
        (&bps as &dyn PayoffProfile, [45.0, 50.0]),
    ] {
        for k in strikes {
            let below = profile.profit_loss(k - eps);
            let at = profile.profit_loss(k);
            let above = profile.profit_loss(k + eps);
            assert!(
                (below - at).abs() < 1e-3 && (above - at).abs() < 1e-3,
                "discontinuity at {k}: {below} / {at} / {above}"
            );
        }
    }
}

#[test]
fn reported_extrema_match_dense_sampling() {
    for s in sample_strategies() {
        let range = PriceRange::new(0.0, 2.0 * top_strike(&s));
        let curve = PayoffCurve::new(s.profile(), range, 2001);
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for point in curve {
            lo = lo.min(point.profit_loss);
            hi = hi.max(point.profit_loss);
        }
        // the flat tails and the zero endpoint are all inside the sweep,
        // so the sampled extrema are exact
        assert!((hi - s.max_profit()).abs() < 1e-9, "{s}: sup {hi}");
        assert!((lo - s.max_loss()).abs() < 1e-9, "{s}: inf {lo}");
    }
}

#[test]
fn max_loss_is_unclamped_extrapolation() {
    // the single-leg figures extend the sloped branch to a settlement of
    // zero rather than stopping at any economic floor
    let cc = CoveredCall::new(10.0, 11.0, 0.5, 1);
    assert!((cc.profit_loss(0.0) - cc.max_loss()).abs() < 1e-9);
    let csp = CashSecuredPut::new(20.0, 1.0, 2);
    assert!((csp.profit_loss(0.0) - csp.max_loss()).abs() < 1e-9);
}

#[test]
fn default_window_covers_the_reference_price() {
    let s = Strategy::from(CoveredCall::new(10.0, 11.0, 0.5, 1));
    let points: Vec<_> = s.payoff_curve(PriceRange::around(10.0)).collect();
    assert_eq!(points.len(), 51);
    assert!(points.iter().any(|p| (p.price - 10.0).abs() < 0.1));
    assert!((points[0].price - 7.0).abs() < 1e-12);
    assert!((points[50].price - 13.0).abs() < 1e-12);
}

proptest! {
    #[test]
    fn covered_call_is_linear_below_the_strike(
        stock in 5.0f64..100.0,
        premium in 0.0f64..2.0,
        strike_offset in 0.0f64..20.0,
        quantity in 1u32..10,
        f1 in 0.0f64..1.0,
        f2 in 0.0f64..1.0,
    ) {
        let strike = stock + strike_offset;
        let cc = CoveredCall::new(stock, strike, premium, quantity);
        let shares = quantity as f64 * 100.0;
        let (a, b) = (f1 * strike, f2 * strike);
        // slope below the strike is exactly `shares`
        let diff = cc.profit_loss(a) - cc.profit_loss(b);
        prop_assert!((diff - shares * (a - b)).abs() < 1e-6);
        // the sloped branch meets max profit at the strike
        prop_assert!((cc.profit_loss(strike) - cc.max_profit()).abs() < 1e-6);
    }

    #[test]
    fn single_leg_break_even_is_a_root(
        stock in 5.0f64..100.0,
        premium in 0.01f64..2.0,
        quantity in 1u32..10,
    ) {
        let cc = CoveredCall::new(stock, stock * 1.1, premium, quantity);
        prop_assert!(cc.profit_loss(cc.break_even()).abs() < 1e-6);
        let csp = CashSecuredPut::new(stock, premium, quantity);
        prop_assert!(csp.profit_loss(csp.break_even()).abs() < 1e-6);
    }

    #[test]
    fn spread_tails_are_flat_at_the_credit(
        short in 20.0f64..60.0,
        width in 1.0f64..10.0,
        short_premium in 0.5f64..3.0,
        long_premium in 0.0f64..0.5,
        quantity in 1u32..10,
        tail in 0.0f64..10.0,
    ) {
        let shares = quantity as f64 * 100.0;
        let bcs = BearCallSpread::new(short, short_premium, short + width, long_premium, quantity);
        let credit = bcs.net_premium() * shares;
        prop_assert!((bcs.profit_loss(short - tail) - credit).abs() < 1e-6);
        let bps = BullPutSpread::new(short, short_premium, short - width, long_premium, quantity);
        let credit = bps.net_premium() * shares;
        prop_assert!((bps.profit_loss(short + tail) - credit).abs() < 1e-6);
    }

    #[test]
    fn curve_prices_ascend_and_hit_both_ends(
        min in 0.0f64..50.0,
        width in 1.0f64..100.0,
        samples in 2usize..200,
    ) {
        let csp = CashSecuredPut::new(20.0, 1.0, 1);
        let range = PriceRange::new(min, min + width);
        let points: Vec<_> = PayoffCurve::new(&csp, range, samples).collect();
        prop_assert_eq!(points.len(), samples);
        prop_assert!((points[0].price - range.min).abs() < 1e-12);
        prop_assert!((points[samples - 1].price - range.max).abs() < 1e-12);
        for pair in points.windows(2) {
            prop_assert!(pair[1].price > pair[0].price);
        }
    }
}
