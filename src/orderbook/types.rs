//! Strongly typed identifiers, prices, quantities and sequence numbers.
//!
//! Each wrapper is `#[repr(transparent)]` over its integer, so the type
//! safety is free at runtime: a `Quantity` cannot be handed to something
//! expecting a `Price` even though both are plain machine words underneath.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of fixed-point units per whole price unit (four decimal places).
pub const PRICE_SCALE: i64 = 10_000;

/// Caller-assigned order identifier, unique among resting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Limit price as a scaled integer. All comparisons and map keys use the raw
/// value; decimals exist only at the [`Price::from_decimal`] boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Price(pub i64);

impl Price {
    /// Convert a decimal price to fixed point. This is the only place a
    /// floating-point price is ever observed.
    pub fn from_decimal(value: f64) -> Self {
        Price((value * PRICE_SCALE as f64).round() as i64)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:04}", self.0 / PRICE_SCALE, (self.0 % PRICE_SCALE).abs())
    }
}

/// Order quantity in whole units, strictly positive on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Quantity(pub u64);

impl Quantity {
    pub fn saturating_sub(self, other: Self) -> Self {
        Quantity(self.0.saturating_sub(other.0))
    }

    pub fn min(self, other: Self) -> Self {
        Quantity(self.0.min(other.0))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The engine's logical clock. Stamped on every event; strictly increasing
/// over the lifetime of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Sequence(pub u64);

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    Buy = 0,
    Sell = 1,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    /// Parse the wire token used by the textual event format.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "BUY" => Some(Side::Buy),
            "SELL" => Some(Side::Sell),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}
