//! Entity storage: a slotmap of placed entities keyed by [`EntityId`].
//!
//! Single-threaded by design. The placement/UI action is the only writer of
//! component sets and the simulation tick the only other reader; the game's
//! update loop serializes the two, so no locking exists here.

use crate::entity::Entity;
use crate::id::EntityId;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

/// All placed entities. Keys are stable across removals of other entities.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct World {
    entities: SlotMap<EntityId, Entity>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bare entity. Callers are expected to immediately hand it to
    /// a building definition for component setup.
    pub fn place(&mut self) -> EntityId {
        self.entities.insert(Entity::new())
    }

    /// Destroy an entity, returning its final state (the persistence
    /// collaborator serializes it from here if needed).
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.entities.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ComponentKind;
    use crate::processor::{ItemProcessor, ProcessKind};

    #[test]
    fn place_and_remove() {
        let mut world = World::new();
        let id = world.place();
        assert!(world.contains(id));
        assert_eq!(world.len(), 1);
        assert!(world.remove(id).is_some());
        assert!(world.is_empty());
        assert!(world.remove(id).is_none());
    }

    #[test]
    fn removed_id_stays_invalid() {
        let mut world = World::new();
        let a = world.place();
        world.remove(a);
        let b = world.place();
        assert_ne!(a, b);
        assert!(!world.contains(a));
        assert!(world.contains(b));
    }

    #[test]
    fn remove_returns_final_component_state() {
        let mut world = World::new();
        let id = world.place();
        world
            .get_mut(id)
            .unwrap()
            .attach_processor(ItemProcessor::new(ProcessKind::Cut, 1));
        let entity = world.remove(id).unwrap();
        assert!(entity.has(ComponentKind::Processor));
    }

    #[test]
    fn iter_visits_all_entities() {
        let mut world = World::new();
        for _ in 0..3 {
            world.place();
        }
        assert_eq!(world.iter().count(), 3);
    }
}
