//! Order records and the pre-sized pool that owns their storage.
//!
//! The pool hands out `u32` slot handles into a slab that is allocated once
//! at construction and never grows, so a handle stays valid and stable until
//! the matching [`OrderPool::deallocate`]. Level chains and the id index hold
//! these handles; only the pool owns the records themselves.

use super::types::{OrderId, Price, Quantity, Sequence, Side};

/// Null slot handle used to terminate the intrusive level chains.
pub(super) const NIL: u32 = u32::MAX;

/// A single order record.
///
/// `prev`/`next` are the intrusive FIFO links of the limit level the record
/// currently sits on; they are `NIL` while the record is off-book.
#[derive(Debug, Clone)]
pub struct Order {
    /// Caller-assigned identifier.
    pub id: OrderId,
    /// Sequence number assigned on submission; the FIFO tiebreaker.
    pub sequence: Sequence,
    pub side: Side,
    pub price: Price,
    pub original_quantity: Quantity,
    pub remaining_quantity: Quantity,
    pub(super) prev: u32,
    pub(super) next: u32,
}

impl Order {
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity.is_zero()
    }

    pub(super) fn fill(&mut self, quantity: Quantity) {
        self.remaining_quantity = self.remaining_quantity.saturating_sub(quantity);
    }
}

/// Fixed-capacity slab of order records with a free list.
///
/// Allocation overwrites every field of the reused slot, so records are not
/// zeroed on recycling. Exhaustion is reported to the caller; the pool never
/// reallocates, which is what keeps outstanding slot handles stable.
pub struct OrderPool {
    slots: Vec<Order>,
    free: Vec<u32>,
}

impl OrderPool {
    pub fn with_capacity(capacity: usize) -> Self {
        let vacant = Order {
            id: OrderId(0),
            sequence: Sequence(0),
            side: Side::Buy,
            price: Price(0),
            original_quantity: Quantity(0),
            remaining_quantity: Quantity(0),
            prev: NIL,
            next: NIL,
        };
        Self {
            slots: vec![vacant; capacity],
            free: (0..capacity as u32).rev().collect(),
        }
    }

    /// Claim a free slot and initialise it in place. Returns `None` when the
    /// pool is exhausted.
    pub fn allocate(
        &mut self,
        id: OrderId,
        sequence: Sequence,
        side: Side,
        price: Price,
        quantity: Quantity,
    ) -> Option<u32> {
        let slot = self.free.pop()?;
        self.slots[slot as usize] = Order {
            id,
            sequence,
            side,
            price,
            original_quantity: quantity,
            remaining_quantity: quantity,
            prev: NIL,
            next: NIL,
        };
        Some(slot)
    }

    /// Return a slot to the free list. The handle and any copies of it are
    /// invalid afterwards.
    pub fn deallocate(&mut self, slot: u32) {
        debug_assert!((slot as usize) < self.slots.len());
        self.free.push(slot);
    }

    pub fn get(&self, slot: u32) -> &Order {
        &self.slots[slot as usize]
    }

    pub(super) fn get_mut(&mut self, slot: u32) -> &mut Order {
        &mut self.slots[slot as usize]
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn in_use(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}
