//! # pnlsim
//!
//! Profit/loss simulation for the four classic retail option income
//! strategies: covered calls, cash-secured puts, bear call spreads, and
//! bull put spreads.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `pnl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! pnlsim = "0.1"
//! ```
//!
//! ```rust
//! use pnlsim::strategies::{CoveredCall, PayoffProfile, Strategy};
//!
//! let position = Strategy::from(CoveredCall::new(10.0, 11.0, 0.5, 1));
//! let result = position.evaluate(12.0);
//! assert!((result.profit_loss - 150.0).abs() < 1e-9);
//! assert!((result.break_even - 9.5).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use pnl_core as core;

/// Strategy payoff profiles and curve sampling.
pub use pnl_strategies as strategies;

/// The persistable trade journal.
pub use pnl_journal as journal;
