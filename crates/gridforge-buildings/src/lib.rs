//! Gridforge Buildings -- building definitions and variant composition.
//!
//! A [`building::BuildingDef`] translates an abstract building kind into the
//! concrete component set of a placed entity, per selected variant. The
//! variant is the state, [`building::BuildingDef::reconfigure`] the only
//! transition: it switches wiring presence, acceptor/ejector slot geometry,
//! and processor kind together, atomically with respect to tick boundaries.
//!
//! Concrete kinds live alongside the contract ([`cutter::CutterBuilding`] is
//! the worked example); the [`registry::BuildingRegistry`] collects one
//! instance per kind in toolbar order; [`progress`] is the interface
//! boundary to the external unlock system.

pub mod building;
pub mod cutter;
pub mod progress;
pub mod registry;

pub use building::{place_building, BuildingDef, BuildingError, VariantId, DEFAULT_VARIANT};
pub use cutter::{CutterBuilding, CUTTER_LASER, CUTTER_QUAD};
pub use progress::{Reward, RewardLookup, UnlockSet};
pub use registry::{BuildingRegistry, BuildingRegistryBuilder, RegistryError};
