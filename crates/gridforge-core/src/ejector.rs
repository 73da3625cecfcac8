//! Item ejector component: owns a building's output slots and tracks, per
//! slot, the item awaiting pickup by the transport layer.

use crate::item::Item;
use crate::slot::EjectorSlot;
use serde::{Deserialize, Serialize};

/// Output-side component of a placed entity.
///
/// Like the acceptor, slot geometry is variant-scoped: [`ItemEjector::set_slots`]
/// replaces the list wholesale and resets occupancy, keeping the occupancy
/// array parallel to `slots` at all times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemEjector {
    slots: Vec<EjectorSlot>,
    occupancy: Vec<Option<Item>>,
}

impl ItemEjector {
    /// An ejector with no slots. Geometry arrives with the first variant
    /// configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: Vec<EjectorSlot>) -> Self {
        let occupancy = vec![None; slots.len()];
        Self { slots, occupancy }
    }

    pub fn slots(&self) -> &[EjectorSlot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Wholesale slot replacement; occupancy resets to empty.
    pub fn set_slots(&mut self, slots: Vec<EjectorSlot>) {
        self.occupancy = vec![None; slots.len()];
        self.slots = slots;
    }

    pub fn is_slot_free(&self, slot: usize) -> bool {
        matches!(self.occupancy.get(slot), Some(None))
    }

    /// Place an item on an output slot. Returns `false` when the slot is out
    /// of range or still occupied.
    pub fn put_item(&mut self, slot: usize, item: Item) -> bool {
        if !self.is_slot_free(slot) {
            return false;
        }
        self.occupancy[slot] = Some(item);
        true
    }

    /// Item currently waiting on a slot, if any.
    pub fn item_at(&self, slot: usize) -> Option<Item> {
        self.occupancy.get(slot).copied().flatten()
    }

    /// Remove and return the waiting item, freeing the slot. Called by the
    /// transport layer when the item moves onto a belt.
    pub fn take_item(&mut self, slot: usize) -> Option<Item> {
        self.occupancy.get_mut(slot).and_then(|o| o.take())
    }

    /// Number of slots currently free to receive output.
    pub fn free_slot_count(&self) -> usize {
        self.occupancy.iter().filter(|o| o.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, TilePos};
    use crate::id::ItemTypeId;

    fn north_slot(x: i32) -> EjectorSlot {
        EjectorSlot::new(TilePos::new(x, 0), Direction::North)
    }

    #[test]
    fn set_slots_resets_occupancy() {
        let mut ejector = ItemEjector::with_slots(vec![north_slot(0), north_slot(1)]);
        assert!(ejector.put_item(0, Item::shape(ItemTypeId(1))));
        ejector.set_slots(vec![north_slot(0)]);
        assert_eq!(ejector.slot_count(), 1);
        assert!(ejector.item_at(0).is_none());
        assert_eq!(ejector.free_slot_count(), 1);
    }

    #[test]
    fn put_take_cycle() {
        let mut ejector = ItemEjector::with_slots(vec![north_slot(0)]);
        assert!(ejector.is_slot_free(0));
        assert!(ejector.put_item(0, Item::shape(ItemTypeId(3))));
        assert!(!ejector.is_slot_free(0));
        assert!(!ejector.put_item(0, Item::shape(ItemTypeId(4))));
        assert_eq!(ejector.take_item(0), Some(Item::shape(ItemTypeId(3))));
        assert!(ejector.is_slot_free(0));
    }

    #[test]
    fn out_of_range_slot_is_never_free() {
        let mut ejector = ItemEjector::with_slots(vec![north_slot(0)]);
        assert!(!ejector.is_slot_free(9));
        assert!(!ejector.put_item(9, Item::shape(ItemTypeId(1))));
        assert!(ejector.take_item(9).is_none());
    }

    #[test]
    fn free_slot_count_tracks_occupancy() {
        let mut ejector =
            ItemEjector::with_slots(vec![north_slot(0), north_slot(1), north_slot(2)]);
        assert_eq!(ejector.free_slot_count(), 3);
        ejector.put_item(1, Item::shape(ItemTypeId(1)));
        assert_eq!(ejector.free_slot_count(), 2);
    }
}
