use super::book::OrderBook;
use super::types::Side;

impl OrderBook {
    /// Validate the structural invariants of the live book: uncrossed touch,
    /// per-level aggregate consistency, id-index completeness and pool
    /// accounting. Debug builds run this after every mutating operation;
    /// tests call it directly. Release builds compile the call sites out.
    pub(crate) fn assert_invariants(&self) {
        if let (Some(bid), Some(ask)) = (self.best_bid(), self.best_ask()) {
            assert!(bid.0 < ask.0, "crossed book: bid {} >= ask {}", bid, ask);
        }

        let mut chained = 0usize;
        for (side, levels) in [(Side::Buy, &self.bids), (Side::Sell, &self.asks)] {
            for (&price, level) in levels {
                assert!(level.order_count() > 0, "empty level at raw price {}", price);

                let mut volume = 0u64;
                let mut count = 0usize;
                for (slot, order) in level.orders(&self.pool) {
                    assert_eq!(order.side, side, "order {} on wrong side", order.id);
                    assert_eq!(order.price.0, price, "order {} on wrong level", order.id);
                    assert!(
                        !order.remaining_quantity.is_zero(),
                        "filled order {} still chained",
                        order.id
                    );
                    assert!(
                        order.remaining_quantity <= order.original_quantity,
                        "order {} overfilled",
                        order.id
                    );
                    assert_eq!(
                        self.order_index.get(&order.id).copied(),
                        Some(slot),
                        "id index missing or stale for order {}",
                        order.id
                    );
                    volume += order.remaining_quantity.0;
                    count += 1;
                }

                assert_eq!(
                    volume,
                    level.total_volume().0,
                    "level volume drift at raw price {}",
                    price
                );
                assert_eq!(
                    count,
                    level.order_count(),
                    "level count drift at raw price {}",
                    price
                );
                chained += count;
            }
        }

        assert_eq!(chained, self.order_index.len(), "id index out of sync");
        assert_eq!(chained, self.pool.in_use(), "pool accounting out of sync");
    }
}
