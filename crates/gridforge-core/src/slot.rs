//! Slot descriptors: passive data describing where a building accepts,
//! emits, or wires. Immutable once handed to a component; variant changes
//! replace slot lists wholesale, never field-by-field.

use crate::grid::{Direction, TilePos};
use crate::item::ItemKind;
use serde::{Deserialize, Serialize};

/// An input slot on an acceptor. `directions` lists the sides items may
/// arrive from; `filter` of `None` accepts any content kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptorSlot {
    pub pos: TilePos,
    pub directions: Vec<Direction>,
    pub filter: Option<ItemKind>,
}

impl AcceptorSlot {
    pub fn new(pos: TilePos, directions: Vec<Direction>, filter: Option<ItemKind>) -> Self {
        Self {
            pos,
            directions,
            filter,
        }
    }

    /// Whether an item of the given kind passes this slot's filter.
    pub fn accepts(&self, kind: ItemKind) -> bool {
        match self.filter {
            None => true,
            Some(f) => f == kind,
        }
    }
}

/// An output slot on an ejector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EjectorSlot {
    pub pos: TilePos,
    pub direction: Direction,
}

impl EjectorSlot {
    pub const fn new(pos: TilePos, direction: Direction) -> Self {
        Self { pos, direction }
    }
}

/// The role of a wiring pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PinKind {
    /// Reads a signal from the wire network.
    LogicalAcceptor,
    /// Drives a signal onto the wire network.
    LogicalEjector,
}

/// A typed wiring slot used by signal-based building variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSlot {
    pub pos: TilePos,
    pub direction: Direction,
    pub kind: PinKind,
}

impl PinSlot {
    pub const fn new(pos: TilePos, direction: Direction, kind: PinKind) -> Self {
        Self {
            pos,
            direction,
            kind,
        }
    }
}
