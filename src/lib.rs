//! # Deterministic Limit Order Book Matching Engine
//!
//! A single-instrument, event-sourced limit order book written in Rust. The
//! engine accepts a serial stream of order-submission and cancellation
//! commands, matches with strict price/time priority, and records every
//! input and every trade in an append-only event log.
//!
//! ## Key Features
//!
//! - **Deterministic**: a monotonic sequence counter is the engine's only
//!   clock. Replaying a recorded log through a fresh book reproduces the
//!   identical event log, field for field.
//!
//! - **Event-Sourced**: input commands are logged before they are acted on;
//!   trades are logged as they happen. The log renders to a fixed
//!   line-per-record textual format and parses back.
//!
//! - **Allocation-Free Hot Path**: order records live in a pool sized at
//!   construction. Matching and cancellation recycle pool slots and rewire
//!   intrusive level chains; they never touch the heap.
//!
//! - **O(1) Cancellation**: each price level is an intrusive doubly-linked
//!   FIFO, so removing an arbitrary resting order is constant time.
//!
//! - **Exact Prices**: prices are scaled 64-bit integers (four decimal
//!   places); no floating point exists in matching or book state.
//!
//! ## Design Goals
//!
//! 1. **Correctness**: every operation maintains the book's structural
//!    invariants; debug builds verify them after each command.
//! 2. **Determinism**: identical input command sequences produce identical
//!    event logs, byte for byte.
//! 3. **Performance**: price/time priority lookups through ordered maps,
//!    constant-time queue surgery, zero hot-path allocation.
//!
//! ## Use Cases
//!
//! - Core component for building trading systems and exchange simulators
//! - Back-testing with exactly reproducible fills
//! - Reference implementation for studying matching-engine mechanics
//!
//! ## Status
//!
//! This project is a single-threaded engine by contract: all operations
//! take `&mut self` and callers feed it from one producer.

mod orderbook;
mod utils;

pub use orderbook::book::DEFAULT_CAPACITY;
pub use orderbook::events::{parse_log, render_log, Event};
pub use orderbook::pool::Order;
pub use orderbook::replay::{replay_events, replay_from_str};
pub use orderbook::snapshot::{LevelSnapshot, OrderBookSnapshot};
pub use orderbook::types::{OrderId, Price, Quantity, Sequence, Side, PRICE_SCALE};
pub use orderbook::{OrderBook, OrderBookError};
pub use utils::setup_logger;
