//! Item acceptor component: owns a building's input slots and tracks, per
//! slot, the item currently queued for consumption by the processor.

use crate::item::Item;
use crate::slot::AcceptorSlot;
use serde::{Deserialize, Serialize};

/// Input-side component of a placed entity.
///
/// Slot geometry is variant-scoped and only ever replaced wholesale via
/// [`ItemAcceptor::set_slots`]; there is no per-slot mutation API. The
/// `pending` array is kept parallel to `slots` at all times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemAcceptor {
    slots: Vec<AcceptorSlot>,
    pending: Vec<Option<Item>>,
}

impl ItemAcceptor {
    /// An acceptor with no slots. Geometry arrives with the first variant
    /// configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: Vec<AcceptorSlot>) -> Self {
        let pending = vec![None; slots.len()];
        Self { slots, pending }
    }

    pub fn slots(&self) -> &[AcceptorSlot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Wholesale slot replacement. Any items still queued on the old
    /// geometry are dropped; occupancy resets to empty.
    pub fn set_slots(&mut self, slots: Vec<AcceptorSlot>) {
        self.pending = vec![None; slots.len()];
        self.slots = slots;
    }

    /// Whether the slot can take `item` right now: in range, filter passes,
    /// and nothing already queued on it.
    pub fn can_accept(&self, slot: usize, item: Item) -> bool {
        match self.slots.get(slot) {
            Some(s) => s.accepts(item.kind) && self.pending[slot].is_none(),
            None => false,
        }
    }

    /// Queue an item on a slot. Returns `false` (leaving state unchanged)
    /// when the slot is out of range, filtered against the item, or occupied.
    pub fn offer_item(&mut self, slot: usize, item: Item) -> bool {
        if !self.can_accept(slot, item) {
            return false;
        }
        self.pending[slot] = Some(item);
        true
    }

    /// Item queued on a slot, if any.
    pub fn pending_item(&self, slot: usize) -> Option<Item> {
        self.pending.get(slot).copied().flatten()
    }

    /// Remove and return the queued item, freeing the slot. Called by the
    /// simulation tick when the processor consumes the input.
    pub fn take_pending(&mut self, slot: usize) -> Option<Item> {
        self.pending.get_mut(slot).and_then(|p| p.take())
    }
}
