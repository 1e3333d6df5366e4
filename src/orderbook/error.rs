//! Order book error types.

use std::fmt;

/// Errors that can occur within the OrderBook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderBookError {
    /// The pre-sized record pool has no free slot left. Fatal for the
    /// session: the input event was already logged.
    PoolExhausted {
        /// Fixed capacity the pool was constructed with.
        capacity: usize,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::PoolExhausted { capacity } => {
                write!(f, "order pool exhausted: all {} records in use", capacity)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
