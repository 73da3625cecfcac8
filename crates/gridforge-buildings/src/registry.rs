//! The building registry: every placeable kind, in toolbar order.
//!
//! Built once at startup via [`BuildingRegistryBuilder`] and frozen; the
//! selection UI iterates it in registration order and the placement layer
//! looks kinds up by identifier. Injected by reference into collaborators --
//! there is no ambient global.

use crate::building::BuildingDef;
use crate::progress::RewardLookup;
use std::collections::HashMap;

/// Errors raised while assembling the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate building kind: {0}")]
    DuplicateKind(&'static str),
}

/// Builder for constructing an immutable [`BuildingRegistry`].
#[derive(Debug, Default)]
pub struct BuildingRegistryBuilder {
    defs: Vec<Box<dyn BuildingDef>>,
    kind_to_index: HashMap<&'static str, usize>,
}

impl BuildingRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a building kind. Registration order is toolbar order.
    pub fn register(mut self, def: Box<dyn BuildingDef>) -> Result<Self, RegistryError> {
        let kind = def.kind();
        if self.kind_to_index.contains_key(kind) {
            return Err(RegistryError::DuplicateKind(kind));
        }
        self.kind_to_index.insert(kind, self.defs.len());
        self.defs.push(def);
        Ok(self)
    }

    /// Freeze the registry. No mutation is possible past this point.
    pub fn build(self) -> BuildingRegistry {
        BuildingRegistry {
            defs: self.defs,
            kind_to_index: self.kind_to_index,
        }
    }
}

/// Ordered, immutable collection of building definitions.
#[derive(Debug)]
pub struct BuildingRegistry {
    defs: Vec<Box<dyn BuildingDef>>,
    kind_to_index: HashMap<&'static str, usize>,
}

impl BuildingRegistry {
    /// All definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn BuildingDef> {
        self.defs.iter().map(|d| d.as_ref())
    }

    /// Definitions placeable under the given progression state, in
    /// registration order. This is what the toolbar renders.
    pub fn placeable<'a>(
        &'a self,
        progress: &'a dyn RewardLookup,
    ) -> impl Iterator<Item = &'a dyn BuildingDef> {
        self.iter().filter(move |def| def.is_unlocked(progress))
    }

    pub fn get(&self, kind: &str) -> Option<&dyn BuildingDef> {
        self.kind_to_index
            .get(kind)
            .map(|&i| self.defs[i].as_ref())
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cutter::CutterBuilding;
    use crate::progress::{Reward, UnlockSet};

    fn cutter_only() -> BuildingRegistry {
        BuildingRegistryBuilder::new()
            .register(Box::new(CutterBuilding::new()))
            .unwrap()
            .build()
    }

    #[test]
    fn lookup_by_kind() {
        let registry = cutter_only();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("cutter").is_some());
        assert!(registry.get("painter").is_none());
    }

    #[test]
    fn duplicate_kind_is_rejected() {
        let result = BuildingRegistryBuilder::new()
            .register(Box::new(CutterBuilding::new()))
            .unwrap()
            .register(Box::new(CutterBuilding::new()));
        assert!(matches!(result, Err(RegistryError::DuplicateKind("cutter"))));
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let registry = cutter_only();
        let kinds: Vec<&str> = registry.iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, vec!["cutter"]);
    }

    #[test]
    fn placeable_filters_by_unlock() {
        let registry = cutter_only();
        assert_eq!(registry.placeable(&UnlockSet::new()).count(), 0);
        let mut progress = UnlockSet::new();
        progress.grant(Reward::CutterAndTrash);
        assert_eq!(registry.placeable(&progress).count(), 1);
    }

    #[test]
    fn empty_registry() {
        let registry = BuildingRegistryBuilder::new().build();
        assert!(registry.is_empty());
    }
}
