//! The cutter building kind.
//!
//! Three variants: `default` cuts a shape into two halves, `quad` into four
//! quarters, `laser` cuts under wire-network control. Output slot count and
//! position encode how many pieces a cut yields and where they travel, so
//! the simulation tick reads slot descriptors instead of branching per kind.

use crate::building::{BuildingDef, BuildingError, VariantId, DEFAULT_VARIANT};
use crate::progress::{Reward, RewardLookup};
use gridforge_core::{
    AcceptorSlot, Direction, EjectorSlot, Entity, Footprint, ItemAcceptor, ItemEjector, ItemKind,
    ItemProcessor, PinKind, PinSlot, ProcessKind, TilePos, WiredPins,
};

/// Variant identifier for the four-output cutter.
pub const CUTTER_QUAD: VariantId = VariantId("quad");
/// Variant identifier for the wire-controlled cutter.
pub const CUTTER_LASER: VariantId = VariantId("laser");

/// Closed variant enumeration. Public identifiers resolve through
/// [`CutterVariant::parse`]; everything past that point is exhaustive and
/// cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CutterVariant {
    Default,
    Quad,
    Laser,
}

impl CutterVariant {
    fn parse(id: VariantId) -> Option<CutterVariant> {
        match id {
            DEFAULT_VARIANT => Some(CutterVariant::Default),
            CUTTER_QUAD => Some(CutterVariant::Quad),
            CUTTER_LASER => Some(CutterVariant::Laser),
            _ => None,
        }
    }
}

/// The cutter's building definition. Stateless; one instance serves every
/// placed cutter.
#[derive(Debug, Default)]
pub struct CutterBuilding;

impl CutterBuilding {
    pub fn new() -> Self {
        CutterBuilding
    }

    fn unknown(&self, variant: VariantId) -> BuildingError {
        BuildingError::UnknownVariant {
            kind: self.kind(),
            variant: variant.as_str(),
        }
    }

    /// One input slot on the south side, filtered to shapes. Shared by the
    /// default and quad variants.
    fn south_shape_input() -> Vec<AcceptorSlot> {
        vec![AcceptorSlot::new(
            TilePos::new(0, 0),
            vec![Direction::South],
            Some(ItemKind::Shape),
        )]
    }

    /// `n` output slots spread along the north side.
    fn north_outputs(n: i32) -> Vec<EjectorSlot> {
        (0..n)
            .map(|x| EjectorSlot::new(TilePos::new(x, 0), Direction::North))
            .collect()
    }

    /// Apply one variant's full recipe. All four reconfiguration steps run
    /// here in one pass: wiring presence, acceptor slots, ejector slots,
    /// processor kind. Infallible by construction -- the variant is already
    /// resolved.
    fn apply_variant(&self, entity: &mut Entity, variant: CutterVariant) {
        match variant {
            CutterVariant::Default => {
                entity.detach_wired_pins();
                if let Some(acceptor) = entity.acceptor_mut() {
                    acceptor.set_slots(Self::south_shape_input());
                }
                if let Some(ejector) = entity.ejector_mut() {
                    ejector.set_slots(Self::north_outputs(2));
                }
                if let Some(processor) = entity.processor_mut() {
                    processor.set_kind(ProcessKind::Cut);
                    processor.set_inputs_required(1);
                }
            }
            CutterVariant::Quad => {
                entity.detach_wired_pins();
                if let Some(acceptor) = entity.acceptor_mut() {
                    acceptor.set_slots(Self::south_shape_input());
                }
                if let Some(ejector) = entity.ejector_mut() {
                    ejector.set_slots(Self::north_outputs(4));
                }
                if let Some(processor) = entity.processor_mut() {
                    processor.set_kind(ProcessKind::CutQuad);
                    processor.set_inputs_required(1);
                }
            }
            CutterVariant::Laser => {
                if entity.wired_pins().is_none() {
                    entity.attach_wired_pins(WiredPins::new());
                }
                if let Some(pins) = entity.wired_pins_mut() {
                    pins.set_slots(vec![
                        PinSlot::new(TilePos::new(1, 0), Direction::North, PinKind::LogicalAcceptor),
                        PinSlot::new(TilePos::new(1, 0), Direction::South, PinKind::LogicalAcceptor),
                        PinSlot::new(TilePos::new(0, 0), Direction::South, PinKind::LogicalAcceptor),
                        PinSlot::new(TilePos::new(0, 0), Direction::North, PinKind::LogicalAcceptor),
                    ]);
                }
                if let Some(acceptor) = entity.acceptor_mut() {
                    acceptor.set_slots(vec![AcceptorSlot::new(
                        TilePos::new(0, 0),
                        vec![Direction::West],
                        Some(ItemKind::Shape),
                    )]);
                }
                if let Some(ejector) = entity.ejector_mut() {
                    ejector.set_slots(vec![
                        EjectorSlot::new(TilePos::new(1, 0), Direction::East),
                        EjectorSlot::new(TilePos::new(1, 0), Direction::South),
                    ]);
                }
                if let Some(processor) = entity.processor_mut() {
                    processor.set_kind(ProcessKind::CutLaser);
                    processor.set_inputs_required(1);
                }
            }
        }
    }
}

impl BuildingDef for CutterBuilding {
    fn kind(&self) -> &'static str {
        "cutter"
    }

    fn silhouette_color(&self) -> &'static str {
        "#7dcda2"
    }

    fn footprint(&self, variant: VariantId) -> Result<Footprint, BuildingError> {
        match CutterVariant::parse(variant).ok_or_else(|| self.unknown(variant))? {
            CutterVariant::Default | CutterVariant::Laser => Ok(Footprint::new(2, 1)),
            CutterVariant::Quad => Ok(Footprint::new(4, 1)),
        }
    }

    fn available_variants(&self, progress: &dyn RewardLookup) -> Vec<VariantId> {
        // Earlier-tier unlock sorts first: quad before laser.
        let mut variants = vec![DEFAULT_VARIANT];
        if progress.is_reward_unlocked(Reward::CutterQuad) {
            variants.push(CUTTER_QUAD);
        }
        if progress.is_reward_unlocked(Reward::SmartCutter) {
            variants.push(CUTTER_LASER);
        }
        variants
    }

    fn is_unlocked(&self, progress: &dyn RewardLookup) -> bool {
        progress.is_reward_unlocked(Reward::CutterAndTrash)
    }

    fn setup_components(&self, entity: &mut Entity) {
        entity.attach_processor(ItemProcessor::new(ProcessKind::Cut, 1));
        entity.attach_ejector(ItemEjector::new());
        entity.attach_acceptor(ItemAcceptor::new());
        self.apply_variant(entity, CutterVariant::Default);
    }

    fn reconfigure(&self, entity: &mut Entity, variant: VariantId) -> Result<(), BuildingError> {
        let variant = CutterVariant::parse(variant).ok_or_else(|| self.unknown(variant))?;
        self.apply_variant(entity, variant);
        Ok(())
    }
}
