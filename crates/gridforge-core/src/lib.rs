//! Gridforge Core -- entity/component primitives for tile-based factory games.
//!
//! This crate provides the component kinds a placed building is composed of
//! (item acceptor, item ejector, processor, wired pins), the slot descriptors
//! that encode their geometry as data, and the slotmap-backed entity store.
//! Building definitions (which variants exist, which components each variant
//! gets) live in `gridforge-buildings` and are the only code path that
//! attaches or detaches components.
//!
//! # Design rules
//!
//! - Slot geometry is replaced wholesale per variant, never mutated
//!   field-by-field; every replacement resets per-slot occupancy, so the
//!   occupancy array can never drift out of sync with the slot list.
//! - The processor is unaware of slot geometry: output multiplicity is
//!   encoded by the ejector's slot count, so the simulation tick needs no
//!   per-kind branching.
//! - Everything is single-threaded and tick-driven; there are no locks and
//!   no async boundaries.
//!
//! # Key types
//!
//! - [`entity::Entity`] -- fixed optional-component record, at most one
//!   component per [`entity::ComponentKind`].
//! - [`world::World`] -- slotmap of placed entities.
//! - [`acceptor::ItemAcceptor`] / [`ejector::ItemEjector`] -- slot lists plus
//!   parallel occupancy.
//! - [`processor::ItemProcessor`] -- input accumulator tagged with a
//!   [`processor::ProcessKind`].
//! - [`wired_pins::WiredPins`] -- typed pin slots for signal-based variants.

pub mod acceptor;
pub mod ejector;
pub mod entity;
pub mod grid;
pub mod id;
pub mod item;
pub mod processor;
pub mod slot;
pub mod wired_pins;
pub mod world;

pub use acceptor::ItemAcceptor;
pub use ejector::ItemEjector;
pub use entity::{ComponentKind, Entity};
pub use grid::{Direction, Footprint, TilePos};
pub use id::{EntityId, ItemTypeId};
pub use item::{Item, ItemKind};
pub use processor::{ItemProcessor, ProcessKind};
pub use slot::{AcceptorSlot, EjectorSlot, PinKind, PinSlot};
pub use wired_pins::WiredPins;
pub use world::World;
