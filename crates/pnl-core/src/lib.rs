//! # pnl-core
//!
//! Core types, constants, and error definitions for pnlsim.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – numeric type aliases, the contract
//! multiplier, the error type with its `ensure!` / `fail!` macros, and
//! floating-point comparison helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Floating-point comparison helpers.
pub mod comparison;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A per-share price (strike, premium, underlying quote).
pub type Price = Real;

/// A position-level monetary amount (profit, loss, credit).
pub type Money = Real;

/// Number of option contracts (lots) in a position.
pub type Quantity = u32;

/// Underlying shares covered by one option contract.
pub const CONTRACT_SIZE: Real = 100.0;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
