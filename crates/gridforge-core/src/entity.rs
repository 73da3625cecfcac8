//! Placed entities and their component record.
//!
//! An entity holds at most one component of each kind; the record is a fixed
//! set of `Option` fields, so "at most one per kind" holds statically rather
//! than via runtime map lookups. Component sets are only mutated through the
//! owning building definition's setup/reconfigure operations; the simulation
//! tick reads and writes slot/occupancy state but never attaches or detaches.

use crate::acceptor::ItemAcceptor;
use crate::ejector::ItemEjector;
use crate::processor::ItemProcessor;
use crate::wired_pins::WiredPins;
use serde::{Deserialize, Serialize};

/// Closed enumeration of component kinds an entity may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Acceptor,
    Ejector,
    Processor,
    WiredPins,
}

impl ComponentKind {
    pub fn all() -> [ComponentKind; 4] {
        [
            ComponentKind::Acceptor,
            ComponentKind::Ejector,
            ComponentKind::Processor,
            ComponentKind::WiredPins,
        ]
    }
}

/// A placed building instance. Created on placement, destroyed on removal;
/// which components are present is decided entirely by the owning building
/// definition's active variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    acceptor: Option<ItemAcceptor>,
    ejector: Option<ItemEjector>,
    processor: Option<ItemProcessor>,
    wired_pins: Option<WiredPins>,
}

impl Entity {
    /// A bare entity with no components attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Acceptor => self.acceptor.is_some(),
            ComponentKind::Ejector => self.ejector.is_some(),
            ComponentKind::Processor => self.processor.is_some(),
            ComponentKind::WiredPins => self.wired_pins.is_some(),
        }
    }

    // -- acceptor -----------------------------------------------------------

    pub fn acceptor(&self) -> Option<&ItemAcceptor> {
        self.acceptor.as_ref()
    }

    pub fn acceptor_mut(&mut self) -> Option<&mut ItemAcceptor> {
        self.acceptor.as_mut()
    }

    /// Attach an acceptor, replacing any existing one.
    pub fn attach_acceptor(&mut self, acceptor: ItemAcceptor) {
        self.acceptor = Some(acceptor);
    }

    pub fn detach_acceptor(&mut self) -> Option<ItemAcceptor> {
        self.acceptor.take()
    }

    // -- ejector ------------------------------------------------------------

    pub fn ejector(&self) -> Option<&ItemEjector> {
        self.ejector.as_ref()
    }

    pub fn ejector_mut(&mut self) -> Option<&mut ItemEjector> {
        self.ejector.as_mut()
    }

    pub fn attach_ejector(&mut self, ejector: ItemEjector) {
        self.ejector = Some(ejector);
    }

    pub fn detach_ejector(&mut self) -> Option<ItemEjector> {
        self.ejector.take()
    }

    // -- processor ----------------------------------------------------------

    pub fn processor(&self) -> Option<&ItemProcessor> {
        self.processor.as_ref()
    }

    pub fn processor_mut(&mut self) -> Option<&mut ItemProcessor> {
        self.processor.as_mut()
    }

    pub fn attach_processor(&mut self, processor: ItemProcessor) {
        self.processor = Some(processor);
    }

    pub fn detach_processor(&mut self) -> Option<ItemProcessor> {
        self.processor.take()
    }

    // -- wired pins ---------------------------------------------------------

    pub fn wired_pins(&self) -> Option<&WiredPins> {
        self.wired_pins.as_ref()
    }

    pub fn wired_pins_mut(&mut self) -> Option<&mut WiredPins> {
        self.wired_pins.as_mut()
    }

    pub fn attach_wired_pins(&mut self, pins: WiredPins) {
        self.wired_pins = Some(pins);
    }

    pub fn detach_wired_pins(&mut self) -> Option<WiredPins> {
        self.wired_pins.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::ProcessKind;

    #[test]
    fn new_entity_has_no_components() {
        let e = Entity::new();
        for kind in ComponentKind::all() {
            assert!(!e.has(kind));
        }
    }

    #[test]
    fn attach_detach_round_trip() {
        let mut e = Entity::new();
        e.attach_wired_pins(WiredPins::new());
        assert!(e.has(ComponentKind::WiredPins));
        assert!(e.detach_wired_pins().is_some());
        assert!(!e.has(ComponentKind::WiredPins));
        assert!(e.detach_wired_pins().is_none());
    }

    #[test]
    fn attach_replaces_existing_component() {
        let mut e = Entity::new();
        e.attach_processor(ItemProcessor::new(ProcessKind::Cut, 1));
        e.attach_processor(ItemProcessor::new(ProcessKind::CutQuad, 1));
        assert_eq!(e.processor().unwrap().kind(), ProcessKind::CutQuad);
    }

    #[test]
    fn component_accessors_are_independent() {
        let mut e = Entity::new();
        e.attach_acceptor(ItemAcceptor::new());
        e.attach_ejector(ItemEjector::new());
        assert!(e.has(ComponentKind::Acceptor));
        assert!(e.has(ComponentKind::Ejector));
        e.detach_acceptor();
        assert!(!e.has(ComponentKind::Acceptor));
        assert!(e.has(ComponentKind::Ejector));
    }
}
