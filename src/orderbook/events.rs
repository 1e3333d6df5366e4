//! Event log records and the textual record format.
//!
//! The log is the engine's source of truth: every input command is appended
//! before it is acted on, and every trade is appended as it happens. One
//! event renders to one comma-separated line; prices appear as raw scaled
//! integers so the format stays exact.

use super::types::{OrderId, Price, Quantity, Sequence, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// One entry of the append-only event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Input command, logged before matching.
    NewOrder {
        sequence: Sequence,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    },
    /// Input command, logged before the removal attempt.
    CancelOrder { sequence: Sequence, id: OrderId },
    /// Produced during matching. The price is always the passive order's
    /// resting price.
    Trade {
        sequence: Sequence,
        passive_id: OrderId,
        aggressive_id: OrderId,
        price: Price,
        quantity: Quantity,
    },
}

impl Event {
    pub fn sequence(&self) -> Sequence {
        match *self {
            Event::NewOrder { sequence, .. }
            | Event::CancelOrder { sequence, .. }
            | Event::Trade { sequence, .. } => sequence,
        }
    }

    /// Parse one record line. Returns `None` for anything malformed; callers
    /// skip such lines.
    pub fn parse(line: &str) -> Option<Event> {
        let mut fields = line.trim().split(',');
        let event = match fields.next()? {
            "NEW_ORDER" => Event::NewOrder {
                sequence: Sequence(fields.next()?.parse().ok()?),
                id: OrderId(fields.next()?.parse().ok()?),
                side: Side::from_token(fields.next()?)?,
                price: Price(fields.next()?.parse().ok()?),
                quantity: Quantity(fields.next()?.parse().ok()?),
            },
            "CANCEL_ORDER" => Event::CancelOrder {
                sequence: Sequence(fields.next()?.parse().ok()?),
                id: OrderId(fields.next()?.parse().ok()?),
            },
            "TRADE" => Event::Trade {
                sequence: Sequence(fields.next()?.parse().ok()?),
                passive_id: OrderId(fields.next()?.parse().ok()?),
                aggressive_id: OrderId(fields.next()?.parse().ok()?),
                price: Price(fields.next()?.parse().ok()?),
                quantity: Quantity(fields.next()?.parse().ok()?),
            },
            _ => return None,
        };
        if fields.next().is_some() {
            return None;
        }
        Some(event)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Event::NewOrder {
                sequence,
                id,
                side,
                price,
                quantity,
            } => write!(
                f,
                "NEW_ORDER,{},{},{},{},{}",
                sequence.0, id.0, side, price.0, quantity.0
            ),
            Event::CancelOrder { sequence, id } => {
                write!(f, "CANCEL_ORDER,{},{}", sequence.0, id.0)
            }
            Event::Trade {
                sequence,
                passive_id,
                aggressive_id,
                price,
                quantity,
            } => write!(
                f,
                "TRADE,{},{},{},{},{}",
                sequence.0, passive_id.0, aggressive_id.0, price.0, quantity.0
            ),
        }
    }
}

/// Render a log as newline-separated record lines.
pub fn render_log(events: &[Event]) -> String {
    let mut out = String::new();
    for event in events {
        let _ = writeln!(out, "{event}");
    }
    out
}

/// Parse a rendered log. Empty and malformed lines are skipped.
pub fn parse_log(input: &str) -> Vec<Event> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(Event::parse)
        .collect()
}
