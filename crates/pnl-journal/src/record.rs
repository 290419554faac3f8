//! A single journaled trade.

use chrono::{DateTime, Utc};
use pnl_core::{Money, Price};
use pnl_strategies::{PayoffProfile, Strategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One logged trade: the strategy label, the ticker, a parameter summary,
/// the credit collected at open, and the profit/loss realized at the
/// settlement price chosen when the trade was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Strategy display name, e.g. "Covered Call".
    pub strategy: String,
    /// Underlying ticker symbol, upper-cased.
    pub ticker: String,
    /// Short parameter summary, e.g. "Strikes: 30.00/35.00".
    pub parameters: String,
    /// Net option premium collected when the position was opened.
    pub credit: Money,
    /// Profit/loss at the settlement price chosen at log time.
    pub profit_loss: Money,
    /// When the trade was logged.
    pub logged_at: DateTime<Utc>,
}

impl TradeRecord {
    /// Build a record by evaluating `strategy` once at `settlement_price`.
    pub fn from_position(strategy: &Strategy, ticker: &str, settlement_price: Price) -> Self {
        Self {
            strategy: strategy.name().to_string(),
            ticker: ticker.to_uppercase(),
            parameters: strategy.description(),
            credit: strategy.net_credit(),
            profit_loss: strategy.profit_loss(settlement_price),
            logged_at: Utc::now(),
        }
    }
}

impl fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) credit {:.2} P/L {:.2}",
            self.ticker, self.strategy, self.parameters, self.credit, self.profit_loss
        )
    }
}
