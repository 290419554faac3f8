//! # pnl-strategies
//!
//! Payoff profiles for retail option income strategies: covered calls,
//! cash-secured puts, and the two vertical credit spreads, plus payoff-curve
//! sampling for charting.
//!
//! Evaluation is a total numeric function: no validation, no I/O, no
//! panics on finite input, NaN in gives NaN out. Callers that need input
//! checking use [`Strategy::validate`] before evaluating.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod curve;
pub mod payoff;
pub mod strategy;

pub use curve::{CurvePoint, PayoffCurve, PriceRange, DEFAULT_SAMPLES};
pub use payoff::{PayoffProfile, PayoffResult};
pub use strategy::{BearCallSpread, BullPutSpread, CashSecuredPut, CoveredCall, Strategy};
