//! Item processor component: accumulates accepted inputs and signals when a
//! processing cycle can run.
//!
//! The processor deliberately knows nothing about slot geometry. Output
//! multiplicity is encoded by the ejector's slot count, so the simulation
//! tick pairs [`ItemProcessor::take_inputs`] with one emitted item per
//! ejector slot without any per-kind branching here.

use crate::item::Item;
use serde::{Deserialize, Serialize};

/// What a processing cycle does to its inputs. Closed enumeration; the
/// simulation tick dispatches on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessKind {
    /// Cut a shape into two halves.
    Cut,
    /// Cut a shape into four quarters.
    CutQuad,
    /// Signal-controlled cut; direction chosen by the wire network.
    CutLaser,
}

impl ProcessKind {
    /// Base processing rate in items per second, before any upgrade
    /// multipliers (those live in the progression collaborator). The stats
    /// panel shows this per selected variant. Quad and laser share the base
    /// cutter rate; only upgrades differentiate throughput.
    pub fn base_items_per_second(self) -> f64 {
        match self {
            ProcessKind::Cut => 0.5,
            ProcessKind::CutQuad => 0.5,
            ProcessKind::CutLaser => 0.5,
        }
    }
}

/// Processing component of a placed entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProcessor {
    kind: ProcessKind,
    inputs_required: u32,
    inputs: Vec<Item>,
}

impl ItemProcessor {
    /// Panics if `inputs_required` is zero; a processor that triggers on
    /// nothing is a definition bug, not a runtime condition.
    pub fn new(kind: ProcessKind, inputs_required: u32) -> Self {
        assert!(inputs_required >= 1, "processor requires at least one input");
        Self {
            kind,
            inputs_required,
            inputs: Vec::new(),
        }
    }

    pub fn kind(&self) -> ProcessKind {
        self.kind
    }

    /// Retag the processing kind. Accumulated inputs are kept: a variant
    /// switch mid-accumulation reprocesses them under the new kind.
    pub fn set_kind(&mut self, kind: ProcessKind) {
        self.kind = kind;
    }

    pub fn inputs_required(&self) -> u32 {
        self.inputs_required
    }

    /// Panics if `inputs_required` is zero, same contract as [`ItemProcessor::new`].
    pub fn set_inputs_required(&mut self, inputs_required: u32) {
        assert!(inputs_required >= 1, "processor requires at least one input");
        self.inputs_required = inputs_required;
    }

    pub fn accumulated_count(&self) -> usize {
        self.inputs.len()
    }

    /// Accept one input into the accumulator. Returns `false` once the
    /// accumulator is full; the tick must drain via `take_inputs` first.
    pub fn offer_input(&mut self, item: Item) -> bool {
        if self.is_ready() {
            return false;
        }
        self.inputs.push(item);
        true
    }

    /// Whether enough inputs have accumulated to run one cycle.
    pub fn is_ready(&self) -> bool {
        self.inputs.len() as u32 >= self.inputs_required
    }

    /// Drain the accumulated inputs for one processing cycle. Returns `None`
    /// until ready; on success the accumulator resets in the same call, so
    /// readiness and reset are never observable separately.
    pub fn take_inputs(&mut self) -> Option<Vec<Item>> {
        if !self.is_ready() {
            return None;
        }
        Some(std::mem::take(&mut self.inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ItemTypeId;

    #[test]
    fn not_ready_until_required_count() {
        let mut p = ItemProcessor::new(ProcessKind::Cut, 2);
        assert!(!p.is_ready());
        assert!(p.offer_input(Item::shape(ItemTypeId(1))));
        assert!(!p.is_ready());
        assert!(p.take_inputs().is_none());
        assert!(p.offer_input(Item::shape(ItemTypeId(2))));
        assert!(p.is_ready());
    }

    #[test]
    fn take_inputs_drains_and_resets() {
        let mut p = ItemProcessor::new(ProcessKind::Cut, 1);
        p.offer_input(Item::shape(ItemTypeId(1)));
        let batch = p.take_inputs().unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(p.accumulated_count(), 0);
        assert!(!p.is_ready());
    }

    #[test]
    fn full_accumulator_refuses_input() {
        let mut p = ItemProcessor::new(ProcessKind::Cut, 1);
        assert!(p.offer_input(Item::shape(ItemTypeId(1))));
        assert!(!p.offer_input(Item::shape(ItemTypeId(2))));
        assert_eq!(p.accumulated_count(), 1);
    }

    #[test]
    fn set_kind_keeps_accumulated_inputs() {
        let mut p = ItemProcessor::new(ProcessKind::Cut, 2);
        p.offer_input(Item::shape(ItemTypeId(1)));
        p.set_kind(ProcessKind::CutQuad);
        assert_eq!(p.kind(), ProcessKind::CutQuad);
        assert_eq!(p.accumulated_count(), 1);
    }

    #[test]
    fn base_speed_table_is_positive_and_shared() {
        let kinds = [ProcessKind::Cut, ProcessKind::CutQuad, ProcessKind::CutLaser];
        for kind in kinds {
            assert!(kind.base_items_per_second() > 0.0);
        }
        assert_eq!(
            ProcessKind::Cut.base_items_per_second(),
            ProcessKind::CutQuad.base_items_per_second()
        );
    }

    #[test]
    #[should_panic(expected = "at least one input")]
    fn zero_required_inputs_panics() {
        let _ = ItemProcessor::new(ProcessKind::Cut, 0);
    }

    #[test]
    #[should_panic(expected = "at least one input")]
    fn set_zero_required_inputs_panics() {
        let mut p = ItemProcessor::new(ProcessKind::Cut, 1);
        p.set_inputs_required(0);
    }
}
