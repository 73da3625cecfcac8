//! Items travelling between buildings. The item catalogue (which shapes and
//! colors exist) is owned externally; this core only needs the content kind
//! for acceptor filtering plus a type id for the simulation to route on.

use crate::id::ItemTypeId;
use serde::{Deserialize, Serialize};

/// The kind of content an item carries. Acceptor slot filters match on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Shape,
    Color,
    Boolean,
}

/// A single item in transit. Cheap to copy; the payload behind `type_id`
/// lives in the external item catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub type_id: ItemTypeId,
}

impl Item {
    pub const fn new(kind: ItemKind, type_id: ItemTypeId) -> Self {
        Self { kind, type_id }
    }

    /// Shorthand for a shape item.
    pub const fn shape(type_id: ItemTypeId) -> Self {
        Self::new(ItemKind::Shape, type_id)
    }

    /// Shorthand for a color item.
    pub const fn color(type_id: ItemTypeId) -> Self {
        Self::new(ItemKind::Color, type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_constructors_set_kind() {
        assert_eq!(Item::shape(ItemTypeId(1)).kind, ItemKind::Shape);
        assert_eq!(Item::color(ItemTypeId(2)).kind, ItemKind::Color);
    }

    #[test]
    fn items_compare_by_kind_and_type() {
        let a = Item::shape(ItemTypeId(7));
        let b = Item::shape(ItemTypeId(7));
        assert_eq!(a, b);
        assert_ne!(a, Item::color(ItemTypeId(7)));
    }
}
