//! The interface boundary to the progression/unlock collaborator.
//!
//! Building definitions consult unlock flags to decide which kinds and
//! variants are placeable; how flags get set (goals, research, sandbox
//! toggles) is entirely the collaborator's business.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Closed enumeration of unlock flags this crate's building kinds consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reward {
    /// Base cutter (and trash) placement.
    CutterAndTrash,
    /// The cutter's quad variant.
    CutterQuad,
    /// The cutter's wire-controlled laser variant.
    SmartCutter,
}

impl Reward {
    /// Every known flag, in tier order.
    pub fn all() -> [Reward; 3] {
        [
            Reward::CutterAndTrash,
            Reward::CutterQuad,
            Reward::SmartCutter,
        ]
    }
}

/// Boolean-flag lookup provided by the progression collaborator.
pub trait RewardLookup {
    fn is_reward_unlocked(&self, reward: Reward) -> bool;
}

/// Plain set-backed implementation, used by tests and the sandbox overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnlockSet {
    unlocked: HashSet<Reward>,
}

impl UnlockSet {
    /// No flags set; only always-available buildings are placeable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every known flag set.
    pub fn all() -> Self {
        let mut set = Self::new();
        for reward in Reward::all() {
            set.grant(reward);
        }
        set
    }

    pub fn grant(&mut self, reward: Reward) {
        self.unlocked.insert(reward);
    }

    pub fn revoke(&mut self, reward: Reward) {
        self.unlocked.remove(&reward);
    }
}

impl RewardLookup for UnlockSet {
    fn is_reward_unlocked(&self, reward: Reward) -> bool {
        self.unlocked.contains(&reward)
    }
}
