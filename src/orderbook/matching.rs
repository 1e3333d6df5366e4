//! Contains the core matching logic for the order book.

use super::book::OrderBook;
use super::events::Event;
use super::types::{Price, Sequence, Side};

impl OrderBook {
    /// Walk the opposite side best level first while the aggressor still has
    /// remaining quantity and its limit price crosses. Emptied levels are
    /// erased before advancing.
    pub(super) fn match_incoming(&mut self, aggressor: u32) {
        loop {
            let (side, filled, limit) = {
                let order = self.pool.get(aggressor);
                (order.side, order.is_filled(), order.price.0)
            };
            if filled {
                break;
            }

            let best = match side {
                Side::Buy => self.asks.keys().next().copied(),
                Side::Sell => self.bids.keys().next_back().copied(),
            };
            let Some(level_price) = best else {
                break;
            };

            let crosses = match side {
                Side::Buy => limit >= level_price,
                Side::Sell => limit <= level_price,
            };
            if !crosses {
                break;
            }

            self.fill_at_level(aggressor, level_price);

            let opposite = match side {
                Side::Buy => &mut self.asks,
                Side::Sell => &mut self.bids,
            };
            if opposite
                .get(&level_price)
                .is_some_and(|level| level.is_empty())
            {
                opposite.remove(&level_price);
            }
        }
    }

    /// FIFO fills against one level. Every trade executes at the level's
    /// price, i.e. the passive order's resting price. Fully filled passive
    /// records are popped, deindexed and returned to the pool before the
    /// next head is examined.
    fn fill_at_level(&mut self, aggressor: u32, level_price: i64) {
        loop {
            let (side, aggressive_id, agg_remaining) = {
                let order = self.pool.get(aggressor);
                (order.side, order.id, order.remaining_quantity)
            };
            if agg_remaining.is_zero() {
                break;
            }

            let opposite = match side {
                Side::Buy => &mut self.asks,
                Side::Sell => &mut self.bids,
            };
            let Some(level) = opposite.get_mut(&level_price) else {
                break;
            };
            let Some(passive) = level.peek_front() else {
                break;
            };

            let (passive_id, passive_remaining) = {
                let order = self.pool.get(passive);
                (order.id, order.remaining_quantity)
            };
            let fill = agg_remaining.min(passive_remaining);

            self.sequence += 1;
            self.events.push(Event::Trade {
                sequence: Sequence(self.sequence),
                passive_id,
                aggressive_id,
                price: Price(level_price),
                quantity: fill,
            });

            self.pool.get_mut(aggressor).fill(fill);
            self.pool.get_mut(passive).fill(fill);
            level.adjust_volume(fill);

            if self.pool.get(passive).is_filled() {
                level.pop_front(&mut self.pool);
                self.order_index.remove(&passive_id);
                self.pool.deallocate(passive);
            }
        }
    }
}
