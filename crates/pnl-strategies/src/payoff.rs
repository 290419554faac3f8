//! Payoff profile trait and evaluation result.
//!
//! A payoff profile maps a hypothetical settlement price of the underlying
//! to the position-level profit/loss at expiration, and exposes the three
//! price-independent figures of the position: maximum profit, maximum loss,
//! and break-even.

use pnl_core::{Money, Price};
use std::fmt;

/// Profit/loss figures of a position, evaluated at one settlement price.
///
/// `profit_loss` depends on the price handed to [`PayoffProfile::evaluate`];
/// the other three fields are properties of the position itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffResult {
    /// Profit/loss if the underlying settles at the evaluated price.
    pub profit_loss: Money,
    /// Best attainable outcome.
    pub max_profit: Money,
    /// Worst outcome, extrapolated linearly to a settlement price of zero
    /// for the single-leg strategies.
    pub max_loss: Money,
    /// Settlement price at which the position breaks even.
    pub break_even: Price,
}

/// Base trait for strategy payoff profiles.
///
/// All methods are pure: the profile holds the position parameters and
/// every call recomputes from them. Implementations must not validate or
/// panic; invalid numeric input propagates as NaN.
pub trait PayoffProfile: fmt::Debug + Send + Sync {
    /// Profit/loss at expiration if the underlying settles at `price`.
    fn profit_loss(&self, price: Price) -> Money;

    /// Best attainable profit/loss over all settlement prices.
    fn max_profit(&self) -> Money;

    /// Worst attainable profit/loss (extrapolated to price zero where the
    /// downside is open-ended).
    fn max_loss(&self) -> Money;

    /// Settlement price at which profit/loss crosses zero.
    fn break_even(&self) -> Price;

    /// Net option premium collected when the position is opened.
    fn net_credit(&self) -> Money;

    /// Human-readable strategy name.
    fn name(&self) -> &str;

    /// Short parameter summary (the strikes involved).
    fn description(&self) -> String;

    /// Evaluate all four figures at `price`.
    fn evaluate(&self, price: Price) -> PayoffResult {
        PayoffResult {
            profit_loss: self.profit_loss(price),
            max_profit: self.max_profit(),
            max_loss: self.max_loss(),
            break_even: self.break_even(),
        }
    }
}
