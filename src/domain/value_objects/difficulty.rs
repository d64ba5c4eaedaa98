//! Difficulty tiers
//!
//! Standard and expert encounter sets are orthogonal difficulty dimensions.
//! `StandardSet::Random` is a request-only sentinel that the generator
//! resolves to a concrete owned tier when it can.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StandardSet {
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Standard II")]
    StandardII,
    #[serde(rename = "Standard III")]
    StandardIII,
    #[serde(rename = "Random")]
    Random,
}

impl StandardSet {
    pub fn is_random(&self) -> bool {
        matches!(self, StandardSet::Random)
    }
}

impl Default for StandardSet {
    fn default() -> Self {
        StandardSet::Standard
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExpertSet {
    #[serde(rename = "Expert")]
    Expert,
    #[serde(rename = "Expert II")]
    ExpertII,
    #[serde(rename = "None")]
    None,
}

impl Default for ExpertSet {
    fn default() -> Self {
        ExpertSet::None
    }
}

/// A standard + expert pairing, used both as a request and as the
/// resolved difficulty of a scenario or game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Difficulty {
    pub standard_set: StandardSet,
    pub expert_set: ExpertSet,
}

impl Difficulty {
    pub fn new(standard_set: StandardSet, expert_set: ExpertSet) -> Self {
        Self {
            standard_set,
            expert_set,
        }
    }
}
