//! # pnl-journal
//!
//! A running log of evaluated trades: each entry captures the strategy, the
//! ticker, the credit collected, and the profit/loss at the chosen
//! settlement price, with JSON-file persistence for the whole journal.
//!
//! The journal is the only stateful piece of the workspace; the payoff
//! engine itself stays pure and is called exactly once per logged trade.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod journal;
pub mod record;

pub use journal::{JournalError, TradeJournal};
pub use record::TradeRecord;
