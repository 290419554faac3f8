//! The trade journal: an ordered log with JSON-file persistence.

use crate::record::TradeRecord;
use pnl_core::Money;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by journal persistence.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Reading or writing the journal file failed.
    #[error("journal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The journal file does not hold a valid record list.
    #[error("journal format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// An ordered log of evaluated trades.
///
/// Appending never re-evaluates anything: the caller evaluates a position
/// once (usually via [`TradeRecord::from_position`]) and hands the record
/// over. The journal owns its records and persists them as a JSON array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradeJournal {
    records: Vec<TradeRecord>,
}

impl TradeJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trade record.
    pub fn record(&mut self, record: TradeRecord) {
        debug!("trade recorded: {record}");
        self.records.push(record);
    }

    /// Number of logged trades.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the journal holds no trades.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Iterate over records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TradeRecord> {
        self.records.iter()
    }

    /// Running total of the logged profit/loss figures.
    pub fn total_profit_loss(&self) -> Money {
        self.records.iter().map(|r| r.profit_loss).sum()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Write the journal to `path` as a pretty-printed JSON array.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), JournalError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(path, json)?;
        info!("journal saved: {} trades to {}", self.records.len(), path.display());
        Ok(())
    }

    /// Read a journal previously written by [`TradeJournal::save`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let records: Vec<TradeRecord> = serde_json::from_str(&json)?;
        info!("journal loaded: {} trades from {}", records.len(), path.display());
        Ok(Self { records })
    }
}

impl FromIterator<TradeRecord> for TradeJournal {
    fn from_iter<I: IntoIterator<Item = TradeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
