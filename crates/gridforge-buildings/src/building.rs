//! The building-definition contract.
//!
//! One stateless [`BuildingDef`] instance exists per building kind. It
//! declares footprints and variant availability for the placement UI, builds
//! the initial component set when an entity is placed, and reconfigures that
//! set in place whenever the player cycles the variant. It is the only code
//! path that attaches or detaches entity components.

use crate::progress::RewardLookup;
use gridforge_core::{Entity, EntityId, Footprint, World};
use std::fmt;

/// Identifies a variant of a building kind. Building definitions map these
/// to their own closed variant enums; identifiers the UI passes here must
/// come from a prior `available_variants` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantId(pub &'static str);

impl VariantId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Every building kind has this variant; it is always first in
/// `available_variants` and needs no unlock beyond the kind itself.
pub const DEFAULT_VARIANT: VariantId = VariantId("default");

/// Errors raised by building definitions.
///
/// `UnknownVariant` is a caller bug, not a recoverable runtime condition:
/// the UI layer is contractually required to only pass identifiers it got
/// from `available_variants`. Callers surface it as a hard failure rather
/// than recovering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildingError {
    #[error("unknown variant `{variant}` for building kind `{kind}`")]
    UnknownVariant {
        kind: &'static str,
        variant: &'static str,
    },
}

/// A stateless descriptor of one building kind.
///
/// Implementations hold no per-entity state; every method is a pure function
/// of its arguments. The variant is the state of a placed entity's
/// configuration and [`BuildingDef::reconfigure`] is its only transition
/// function -- there is no "in transit" between variants.
pub trait BuildingDef: fmt::Debug {
    /// Stable kind identifier, used for registry lookup and UI keys.
    fn kind(&self) -> &'static str;

    /// Silhouette color for the placement preview.
    fn silhouette_color(&self) -> &'static str;

    /// Tile dimensions of the given variant.
    fn footprint(&self, variant: VariantId) -> Result<Footprint, BuildingError>;

    /// Variants selectable under the given progression state, default
    /// variant first. Deterministic and order-stable for equal progression;
    /// earlier-tier unlocks sort first.
    fn available_variants(&self, progress: &dyn RewardLookup) -> Vec<VariantId> {
        let _ = progress;
        vec![DEFAULT_VARIANT]
    }

    /// Whether this kind may be placed at all.
    fn is_unlocked(&self, progress: &dyn RewardLookup) -> bool {
        let _ = progress;
        true
    }

    /// Attach the full default-variant component set to a freshly created
    /// entity. Initialization-only: calling this on an already-populated
    /// entity is undefined.
    fn setup_components(&self, entity: &mut Entity);

    /// Switch the entity's component configuration to `variant`:
    /// wiring presence, acceptor slots, ejector slots, and processor kind
    /// all move together. The variant is validated before anything is
    /// touched, so an `UnknownVariant` failure leaves the entity unchanged
    /// and the simulation tick can never observe a partial switch.
    fn reconfigure(&self, entity: &mut Entity, variant: VariantId) -> Result<(), BuildingError>;
}

/// Place a building: create the entity and run the definition's initial
/// component setup. This is the placement collaborator's single entry point.
pub fn place_building(world: &mut World, def: &dyn BuildingDef) -> EntityId {
    let id = world.place();
    if let Some(entity) = world.get_mut(id) {
        def.setup_components(entity);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal kind exercising the trait's default methods.
    #[derive(Debug)]
    struct Slab;

    impl BuildingDef for Slab {
        fn kind(&self) -> &'static str {
            "slab"
        }

        fn silhouette_color(&self) -> &'static str {
            "#999999"
        }

        fn footprint(&self, variant: VariantId) -> Result<Footprint, BuildingError> {
            if variant == DEFAULT_VARIANT {
                Ok(Footprint::single())
            } else {
                Err(BuildingError::UnknownVariant {
                    kind: self.kind(),
                    variant: variant.as_str(),
                })
            }
        }

        fn setup_components(&self, _entity: &mut Entity) {}

        fn reconfigure(&self, _entity: &mut Entity, variant: VariantId) -> Result<(), BuildingError> {
            self.footprint(variant).map(|_| ())
        }
    }

    #[test]
    fn default_variant_list_is_just_default() {
        use crate::progress::UnlockSet;
        let variants = Slab.available_variants(&UnlockSet::all());
        assert_eq!(variants, vec![DEFAULT_VARIANT]);
    }

    #[test]
    fn default_is_unlocked() {
        use crate::progress::UnlockSet;
        assert!(Slab.is_unlocked(&UnlockSet::new()));
    }

    #[test]
    fn unknown_variant_error_names_kind_and_variant() {
        let err = Slab.footprint(VariantId("bogus")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bogus"), "got: {msg}");
        assert!(msg.contains("slab"), "got: {msg}");
    }

    #[test]
    fn place_building_creates_entity() {
        let mut world = World::new();
        let id = place_building(&mut world, &Slab);
        assert!(world.contains(id));
    }
}
