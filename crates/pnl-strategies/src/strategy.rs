//! The four supported income strategies and their payoff formulas.
//!
//! Each strategy is a plain `Copy` parameter record implementing
//! [`PayoffProfile`]; [`Strategy`] is the tagged union over them, dispatching
//! every operation with an exhaustive match.
//!
//! All payoffs are piecewise-linear in the settlement price. Branch
//! boundaries matter: a settlement exactly at the short (or single) strike
//! takes the flat branch, never the sloped one.

use crate::curve::{PayoffCurve, PriceRange, DEFAULT_SAMPLES};
use crate::payoff::PayoffProfile;
use pnl_core::{ensure, errors::Result, Money, Price, Quantity, Real, CONTRACT_SIZE};
use std::fmt;

/// `true` if `x` is an acceptable price or premium: finite and non-negative.
#[inline]
fn valid_price(x: Price) -> bool {
    x.is_finite() && x >= 0.0
}

// ────────────────────────────────────────────────────────────────────────────
// CoveredCall
// ────────────────────────────────────────────────────────────────────────────

/// Covered call: long stock with one call written against each lot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoveredCall {
    /// Purchase price of the underlying stock.
    pub stock_price: Price,
    /// Strike of the written call.
    pub strike: Price,
    /// Premium received per share.
    pub premium: Price,
    /// Number of lots (one lot = one contract = 100 shares).
    pub quantity: Quantity,
}

impl CoveredCall {
    /// Create a new covered call position.
    pub fn new(stock_price: Price, strike: Price, premium: Price, quantity: Quantity) -> Self {
        Self {
            stock_price,
            strike,
            premium,
            quantity,
        }
    }

    fn shares(&self) -> Real {
        self.quantity as Real * CONTRACT_SIZE
    }

    /// Reject non-finite or negative inputs and zero quantity.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.quantity > 0, "quantity must be positive");
        ensure!(
            valid_price(self.stock_price),
            "stock price must be a non-negative number, got {}",
            self.stock_price
        );
        ensure!(
            valid_price(self.strike),
            "strike must be a non-negative number, got {}",
            self.strike
        );
        ensure!(
            valid_price(self.premium),
            "premium must be a non-negative number, got {}",
            self.premium
        );
        Ok(())
    }
}

impl PayoffProfile for CoveredCall {
    fn profit_loss(&self, price: Price) -> Money {
        let shares = self.shares();
        if price <= self.strike {
            // call expires unexercised; stock marked at the settlement price
            (price - self.stock_price + self.premium) * shares
        } else {
            // stock called away at the strike
            (self.strike - self.stock_price + self.premium) * shares
        }
    }

    fn max_profit(&self) -> Money {
        (self.strike - self.stock_price + self.premium) * self.shares()
    }

    fn max_loss(&self) -> Money {
        // sloped branch extrapolated to a settlement price of zero
        (self.premium - self.stock_price) * self.shares()
    }

    fn break_even(&self) -> Price {
        self.stock_price - self.premium
    }

    fn net_credit(&self) -> Money {
        self.premium * self.shares()
    }

    fn name(&self) -> &str {
        "Covered Call"
    }

    fn description(&self) -> String {
        format!("Strike: {:.2}", self.strike)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CashSecuredPut
// ────────────────────────────────────────────────────────────────────────────

/// Cash-secured put: one short put per lot, cash reserved for assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashSecuredPut {
    /// Strike of the written put.
    pub strike: Price,
    /// Premium received per share.
    pub premium: Price,
    /// Number of lots.
    pub quantity: Quantity,
}

impl CashSecuredPut {
    /// Create a new cash-secured put position.
    pub fn new(strike: Price, premium: Price, quantity: Quantity) -> Self {
        Self {
            strike,
            premium,
            quantity,
        }
    }

    fn shares(&self) -> Real {
        self.quantity as Real * CONTRACT_SIZE
    }

    /// Reject non-finite or negative inputs and zero quantity.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.quantity > 0, "quantity must be positive");
        ensure!(
            valid_price(self.strike),
            "strike must be a non-negative number, got {}",
            self.strike
        );
        ensure!(
            valid_price(self.premium),
            "premium must be a non-negative number, got {}",
            self.premium
        );
        Ok(())
    }
}

impl PayoffProfile for CashSecuredPut {
    fn profit_loss(&self, price: Price) -> Money {
        let shares = self.shares();
        if price >= self.strike {
            // put expires worthless, the premium is kept
            self.premium * shares
        } else {
            // assigned: forced to buy at the strike
            (price - self.strike + self.premium) * shares
        }
    }

    fn max_profit(&self) -> Money {
        self.premium * self.shares()
    }

    fn max_loss(&self) -> Money {
        (self.premium - self.strike) * self.shares()
    }

    fn break_even(&self) -> Price {
        self.strike - self.premium
    }

    fn net_credit(&self) -> Money {
        self.premium * self.shares()
    }

    fn name(&self) -> &str {
        "Cash-Secured Put"
    }

    fn description(&self) -> String {
        format!("Strike: {:.2}", self.strike)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// BearCallSpread
// ────────────────────────────────────────────────────────────────────────────

/// Bear call spread: short call at the lower strike, long call at the
/// higher strike. A credit spread; `long_strike > short_strike`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BearCallSpread {
    /// Strike of the written (short) call.
    pub short_strike: Price,
    /// Premium received per share on the short call.
    pub short_premium: Price,
    /// Strike of the bought (long) call.
    pub long_strike: Price,
    /// Premium paid per share on the long call.
    pub long_premium: Price,
    /// Number of lots.
    pub quantity: Quantity,
}

impl BearCallSpread {
    /// Create a new bear call spread.
    pub fn new(
        short_strike: Price,
        short_premium: Price,
        long_strike: Price,
        long_premium: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            short_strike,
            short_premium,
            long_strike,
            long_premium,
            quantity,
        }
    }

    fn shares(&self) -> Real {
        self.quantity as Real * CONTRACT_SIZE
    }

    /// Premium received minus premium paid, per share.
    pub fn net_premium(&self) -> Price {
        self.short_premium - self.long_premium
    }

    /// Reject non-finite or negative inputs, zero quantity, and strikes
    /// out of order.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.quantity > 0, "quantity must be positive");
        ensure!(
            valid_price(self.short_strike) && valid_price(self.long_strike),
            "strikes must be non-negative numbers, got {}/{}",
            self.short_strike,
            self.long_strike
        );
        ensure!(
            valid_price(self.short_premium) && valid_price(self.long_premium),
            "premiums must be non-negative numbers, got {}/{}",
            self.short_premium,
            self.long_premium
        );
        ensure!(
            self.long_strike > self.short_strike,
            "long strike ({}) must be above short strike ({})",
            self.long_strike,
            self.short_strike
        );
        Ok(())
    }
}

impl PayoffProfile for BearCallSpread {
    fn profit_loss(&self, price: Price) -> Money {
        let shares = self.shares();
        let net = self.net_premium();
        if price <= self.short_strike {
            // both calls expire worthless
            net * shares
        } else if price < self.long_strike {
            // short call in the money, long call still worthless
            (-(price - self.short_strike) + net) * shares
        } else {
            // both in the money: loss capped at the strike width
            (-(self.long_strike - self.short_strike) + net) * shares
        }
    }

    fn max_profit(&self) -> Money {
        self.net_premium() * self.shares()
    }

    fn max_loss(&self) -> Money {
        (-(self.long_strike - self.short_strike) + self.net_premium()) * self.shares()
    }

    fn break_even(&self) -> Price {
        self.short_strike + self.net_premium()
    }

    fn net_credit(&self) -> Money {
        self.net_premium() * self.shares()
    }

    fn name(&self) -> &str {
        "Bear Call Spread"
    }

    fn description(&self) -> String {
        format!("Strikes: {:.2}/{:.2}", self.short_strike, self.long_strike)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// BullPutSpread
// ────────────────────────────────────────────────────────────────────────────

/// Bull put spread: short put at the higher strike, long put at the lower
/// strike. A credit spread; `long_strike < short_strike`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BullPutSpread {
    /// Strike of the written (short) put.
    pub short_strike: Price,
    /// Premium received per share on the short put.
    pub short_premium: Price,
    /// Strike of the bought (long) put.
    pub long_strike: Price,
    /// Premium paid per share on the long put.
    pub long_premium: Price,
    /// Number of lots.
    pub quantity: Quantity,
}

impl BullPutSpread {
    /// Create a new bull put spread.
    pub fn new(
        short_strike: Price,
        short_premium: Price,
        long_strike: Price,
        long_premium: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            short_strike,
            short_premium,
            long_strike,
            long_premium,
            quantity,
        }
    }

    fn shares(&self) -> Real {
        self.quantity as Real * CONTRACT_SIZE
    }

    /// Premium received minus premium paid, per share.
    pub fn net_premium(&self) -> Price {
        self.short_premium - self.long_premium
    }

    /// Reject non-finite or negative inputs, zero quantity, and strikes
    /// out of order.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.quantity > 0, "quantity must be positive");
        ensure!(
            valid_price(self.short_strike) && valid_price(self.long_strike),
            "strikes must be non-negative numbers, got {}/{}",
            self.short_strike,
            self.long_strike
        );
        ensure!(
            valid_price(self.short_premium) && valid_price(self.long_premium),
            "premiums must be non-negative numbers, got {}/{}",
            self.short_premium,
            self.long_premium
        );
        ensure!(
            self.long_strike < self.short_strike,
            "long strike ({}) must be below short strike ({})",
            self.long_strike,
            self.short_strike
        );
        Ok(())
    }
}

impl PayoffProfile for BullPutSpread {
    fn profit_loss(&self, price: Price) -> Money {
        let shares = self.shares();
        let net = self.net_premium();
        if price >= self.short_strike {
            // both puts expire worthless
            net * shares
        } else if price > self.long_strike {
            // short put in the money, long put still worthless
            ((price - self.short_strike) + net) * shares
        } else {
            // both in the money: loss capped at the strike width
            (-(self.short_strike - self.long_strike) + net) * shares
        }
    }

    fn max_profit(&self) -> Money {
        self.net_premium() * self.shares()
    }

    fn max_loss(&self) -> Money {
        (-(self.short_strike - self.long_strike) + self.net_premium()) * self.shares()
    }

    fn break_even(&self) -> Price {
        self.short_strike - self.net_premium()
    }

    fn net_credit(&self) -> Money {
        self.net_premium() * self.shares()
    }

    fn name(&self) -> &str {
        "Bull Put Spread"
    }

    fn description(&self) -> String {
        format!("Strikes: {:.2}/{:.2}", self.short_strike, self.long_strike)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Strategy
// ────────────────────────────────────────────────────────────────────────────

/// A supported option income strategy.
///
/// Tagged union over the four position records. Every payoff operation
/// dispatches exhaustively to the wrapped position, so adding a strategy
/// is a compile-checked change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Long stock with a call written against it.
    CoveredCall(CoveredCall),
    /// Short put with cash reserved for assignment.
    CashSecuredPut(CashSecuredPut),
    /// Short lower-strike call hedged with a long higher-strike call.
    BearCallSpread(BearCallSpread),
    /// Short higher-strike put hedged with a long lower-strike put.
    BullPutSpread(BullPutSpread),
}

impl Strategy {
    /// The wrapped payoff profile.
    pub fn profile(&self) -> &dyn PayoffProfile {
        match self {
            Strategy::CoveredCall(p) => p,
            Strategy::CashSecuredPut(p) => p,
            Strategy::BearCallSpread(p) => p,
            Strategy::BullPutSpread(p) => p,
        }
    }

    /// Validate the position inputs.
    ///
    /// Evaluation never calls this; it is the caller's pre-check, matching
    /// the division of labour between form validation and computation.
    pub fn validate(&self) -> Result<()> {
        match self {
            Strategy::CoveredCall(p) => p.validate(),
            Strategy::CashSecuredPut(p) => p.validate(),
            Strategy::BearCallSpread(p) => p.validate(),
            Strategy::BullPutSpread(p) => p.validate(),
        }
    }

    /// Sample the payoff curve across `range` with the default number of
    /// points (see [`DEFAULT_SAMPLES`]).
    pub fn payoff_curve(&self, range: PriceRange) -> PayoffCurve<'_> {
        PayoffCurve::new(self.profile(), range, DEFAULT_SAMPLES)
    }
}

impl PayoffProfile for Strategy {
    fn profit_loss(&self, price: Price) -> Money {
        self.profile().profit_loss(price)
    }

    fn max_profit(&self) -> Money {
        self.profile().max_profit()
    }

    fn max_loss(&self) -> Money {
        self.profile().max_loss()
    }

    fn break_even(&self) -> Price {
        self.profile().break_even()
    }

    fn net_credit(&self) -> Money {
        self.profile().net_credit()
    }

    fn name(&self) -> &str {
        self.profile().name()
    }

    fn description(&self) -> String {
        self.profile().description()
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.description())
    }
}

impl From<CoveredCall> for Strategy {
    fn from(p: CoveredCall) -> Self {
        Strategy::CoveredCall(p)
    }
}

impl From<CashSecuredPut> for Strategy {
    fn from(p: CashSecuredPut) -> Self {
        Strategy::CashSecuredPut(p)
    }
}

impl From<BearCallSpread> for Strategy {
    fn from(p: BearCallSpread) -> Self {
        Strategy::BearCallSpread(p)
    }
}

impl From<BullPutSpread> for Strategy {
    fn from(p: BullPutSpread) -> Self {
        Strategy::BullPutSpread(p)
    }
}
