//! Core OrderBook state and read accessors.

use super::events::Event;
use super::level::LimitLevel;
use super::pool::{Order, OrderPool};
use super::snapshot::{LevelSnapshot, OrderBookSnapshot};
use super::types::{OrderId, Price, Quantity, Sequence, Side};
use std::collections::{BTreeMap, HashMap};
use tracing::trace;

/// Default record capacity: sized for a deep single-instrument book.
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// A single-instrument limit order book with an event-sourced log.
///
/// All mutating operations are serial (`&mut self`); the sequence counter is
/// the engine's only clock. Replaying the recorded input events through a
/// fresh book reproduces the log bit for bit.
pub struct OrderBook {
    /// The symbol or identifier for this order book.
    pub(super) symbol: String,

    /// Bid levels keyed by raw price; best bid is the largest key.
    pub(super) bids: BTreeMap<i64, LimitLevel>,

    /// Ask levels keyed by raw price; best ask is the smallest key.
    pub(super) asks: BTreeMap<i64, LimitLevel>,

    /// Resting order id to pool slot. An id is present exactly while its
    /// record sits on some level chain.
    pub(super) order_index: HashMap<OrderId, u32>,

    /// Owns all record storage; levels and the index borrow slot handles.
    pub(super) pool: OrderPool,

    /// Append-only event log, never reordered or compacted.
    pub(super) events: Vec<Event>,

    /// Logical clock; incremented once per input event and once per trade.
    pub(super) sequence: u64,
}

impl OrderBook {
    /// Create a book with [`DEFAULT_CAPACITY`] records.
    pub fn new(symbol: &str) -> Self {
        Self::with_capacity(symbol, DEFAULT_CAPACITY)
    }

    /// Create a book sized for `capacity` simultaneously live records. The
    /// pool and log reserve everything up front; the matching and cancel
    /// paths allocate nothing.
    pub fn with_capacity(symbol: &str, capacity: usize) -> Self {
        trace!("creating order book {} with capacity {}", symbol, capacity);
        Self {
            symbol: symbol.to_string(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            order_index: HashMap::with_capacity(capacity),
            pool: OrderPool::with_capacity(capacity),
            events: Vec::with_capacity(capacity),
            sequence: 0,
        }
    }

    /// Get the symbol of this order book.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fixed record capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Get the best bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied().map(Price)
    }

    /// Get the best ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied().map(Price)
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(Price(ask.0 - bid.0)),
            _ => None,
        }
    }

    /// Integer midpoint of the touch, rounded toward zero.
    pub fn mid_price(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(Price((bid.0 + ask.0) / 2)),
            _ => None,
        }
    }

    /// Total resting volume at one price on one side.
    pub fn volume_at(&self, side: Side, price: Price) -> Quantity {
        let levels = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        levels
            .get(&price.0)
            .map(|level| level.total_volume())
            .unwrap_or(Quantity(0))
    }

    /// Number of resting orders at one price on one side.
    pub fn orders_at(&self, side: Side, price: Price) -> usize {
        let levels = match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        };
        levels.get(&price.0).map(|level| level.order_count()).unwrap_or(0)
    }

    /// Look up a resting order by id.
    pub fn get_order(&self, id: OrderId) -> Option<&Order> {
        self.order_index.get(&id).map(|&slot| self.pool.get(slot))
    }

    /// Number of orders currently resting on either side.
    pub fn resting_orders(&self) -> usize {
        self.order_index.len()
    }

    /// Borrow the event log as an ordered sequence.
    pub fn event_log(&self) -> &[Event] {
        &self.events
    }

    /// The sequence number of the most recent event, `Sequence(0)` before
    /// the first command.
    pub fn last_sequence(&self) -> Sequence {
        Sequence(self.sequence)
    }

    /// Create a per-level aggregate snapshot of the top `depth` levels on
    /// each side, best first.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let bids = self
            .bids
            .iter()
            .rev()
            .take(depth)
            .map(|(&price, level)| LevelSnapshot {
                price: Price(price),
                total_volume: level.total_volume(),
                order_count: level.order_count(),
            })
            .collect();

        let asks = self
            .asks
            .iter()
            .take(depth)
            .map(|(&price, level)| LevelSnapshot {
                price: Price(price),
                total_volume: level.total_volume(),
                order_count: level.order_count(),
            })
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            sequence: self.last_sequence(),
            bids,
            asks,
        }
    }
}
