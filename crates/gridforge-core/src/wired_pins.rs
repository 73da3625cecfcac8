//! Wired pins component: typed wiring slots for signal-based building
//! variants. Present on an entity only while the active variant declares
//! wiring; attached and detached as a unit by the building definition.

use crate::slot::PinSlot;
use serde::{Deserialize, Serialize};

/// Wiring component of a placed entity. Signal values live in the external
/// wire-network collaborator; this component only declares pin geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WiredPins {
    slots: Vec<PinSlot>,
}

impl WiredPins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slots(slots: Vec<PinSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[PinSlot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Wholesale slot replacement, same policy as acceptor and ejector.
    pub fn set_slots(&mut self, slots: Vec<PinSlot>) {
        self.slots = slots;
    }
}
