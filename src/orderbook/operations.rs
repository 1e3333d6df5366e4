//! Public order entry: new-order submission and cancellation.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::events::Event;
use super::level::LimitLevel;
use super::types::{OrderId, Price, Quantity, Sequence, Side};
use tracing::trace;

impl OrderBook {
    /// Submit a limit order.
    ///
    /// The input event is logged first, then the order matches against the
    /// opposite side; any residual rests at its limit price. Preconditions
    /// (`price > 0`, `quantity > 0`) are the caller's to enforce.
    ///
    /// Pool exhaustion is fatal for the session: the input event is already
    /// logged and the book cannot accept the order, so the error surfaces to
    /// the caller, whose job is to size the pool.
    pub fn process_new_order(
        &mut self,
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Result<(), OrderBookError> {
        debug_assert!(price.0 > 0, "non-positive price");
        debug_assert!(!quantity.is_zero(), "zero quantity");

        self.sequence += 1;
        let submission = Sequence(self.sequence);
        self.events.push(Event::NewOrder {
            sequence: submission,
            id,
            side,
            price,
            quantity,
        });
        trace!(
            "{}: new order {} {} {} x {}",
            self.symbol, id, side, price, quantity
        );

        let slot = self
            .pool
            .allocate(id, submission, side, price, quantity)
            .ok_or(OrderBookError::PoolExhausted {
                capacity: self.pool.capacity(),
            })?;

        // Indexed before matching; removed again below if fully consumed.
        self.order_index.insert(id, slot);

        self.match_incoming(slot);

        if self.pool.get(slot).is_filled() {
            self.order_index.remove(&id);
            self.pool.deallocate(slot);
        } else {
            self.rest(slot);
        }

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(())
    }

    /// Cancel a resting order by id.
    ///
    /// Unknown ids are tolerated silently: the order may already have filled
    /// or been cancelled. The cancel event is logged either way, which keeps
    /// replay faithful.
    pub fn process_cancel(&mut self, id: OrderId) {
        self.sequence += 1;
        self.events.push(Event::CancelOrder {
            sequence: Sequence(self.sequence),
            id,
        });
        trace!("{}: cancel {}", self.symbol, id);

        let Some(&slot) = self.order_index.get(&id) else {
            return;
        };

        let (side, price) = {
            let order = self.pool.get(slot);
            (order.side, order.price)
        };
        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        if let Some(level) = levels.get_mut(&price.0) {
            level.unlink(slot, &mut self.pool);
            if level.is_empty() {
                levels.remove(&price.0);
            }
        }

        self.order_index.remove(&id);
        self.pool.deallocate(slot);

        #[cfg(debug_assertions)]
        self.assert_invariants();
    }

    /// Park the residual of a new order on its own side.
    fn rest(&mut self, slot: u32) {
        let (side, price) = {
            let order = self.pool.get(slot);
            (order.side, order.price)
        };
        let levels = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let level = levels
            .entry(price.0)
            .or_insert_with(|| LimitLevel::new(price));
        level.push_back(slot, &mut self.pool);
    }
}
