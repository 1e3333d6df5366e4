//! Order book snapshot for market data.

use super::types::{Price, Quantity, Sequence};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Aggregate view of one price level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub price: Price,
    pub total_volume: Quantity,
    pub order_count: usize,
}

/// A snapshot of the order book state at a specific point in the event
/// stream. Levels are best first on both sides; `sequence` is the logical
/// time the snapshot was taken at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book.
    pub symbol: String,

    /// Sequence number of the last event before the snapshot.
    pub sequence: Sequence,

    /// Snapshot of bid price levels, highest price first.
    pub bids: Vec<LevelSnapshot>,

    /// Snapshot of ask price levels, lowest price first.
    pub asks: Vec<LevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and volume.
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        let bid = self
            .bids
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_bid: {:?}", bid);
        bid
    }

    /// Get the best ask price and volume.
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        let ask = self
            .asks
            .first()
            .map(|level| (level.price, level.total_volume));
        trace!("best_ask: {:?}", ask);
        ask
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid, _)), Some((ask, _))) => Some(Price(ask.0 - bid.0)),
            _ => None,
        }
    }

    /// Total volume across the captured bid levels.
    pub fn total_bid_volume(&self) -> Quantity {
        Quantity(self.bids.iter().map(|level| level.total_volume.0).sum())
    }

    /// Total volume across the captured ask levels.
    pub fn total_ask_volume(&self) -> Quantity {
        Quantity(self.asks.iter().map(|level| level.total_volume.0).sum())
    }
}
