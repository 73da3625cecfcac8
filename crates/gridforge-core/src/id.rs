use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Identifies a placed entity in the world.
    pub struct EntityId;
}

/// Identifies an item type. Cheap to copy and compare; the item catalogue
/// itself is owned by an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemTypeId(pub u32);
