//! Deterministic replay of recorded event logs.
//!
//! Replay re-processes the input events (`NEW_ORDER`, `CANCEL_ORDER`) of a
//! recorded session through a fresh book. Trade records are outputs of
//! matching, so they are skipped and re-emitted by the fresh engine at the
//! same sequence numbers. A replayed book's log equals the original log
//! field for field; that equality is the end-to-end determinism contract.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::events::{parse_log, Event};

/// Rebuild a book from a recorded event sequence.
///
/// The fresh book is sized from the number of `NEW_ORDER` records, which
/// bounds the number of simultaneously resting orders, so replaying a log
/// recorded by a non-exhausted engine cannot itself exhaust the pool.
pub fn replay_events(symbol: &str, events: &[Event]) -> Result<OrderBook, OrderBookError> {
    let capacity = events
        .iter()
        .filter(|event| matches!(event, Event::NewOrder { .. }))
        .count()
        .max(1);
    let mut book = OrderBook::with_capacity(symbol, capacity);

    for event in events {
        match *event {
            Event::NewOrder {
                id,
                side,
                price,
                quantity,
                ..
            } => book.process_new_order(id, side, price, quantity)?,
            Event::CancelOrder { id, .. } => book.process_cancel(id),
            Event::Trade { .. } => {}
        }
    }

    Ok(book)
}

/// Parse a textual log (one record per line) and replay it.
pub fn replay_from_str(symbol: &str, input: &str) -> Result<OrderBook, OrderBookError> {
    let events = parse_log(input);
    replay_events(symbol, &events)
}
