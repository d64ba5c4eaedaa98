//! Aspect tags - deckbuilding identities assignable to a hero

use serde::{Deserialize, Serialize};

/// A thematic deckbuilding tag.
///
/// `Basic` is universal: every deck may use it, so it is never handed out
/// by the aspect randomizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Aspect {
    Aggression,
    Justice,
    Leadership,
    Protection,
    Pool,
    Basic,
}

impl Aspect {
    pub const ALL: [Aspect; 6] = [
        Aspect::Aggression,
        Aspect::Justice,
        Aspect::Leadership,
        Aspect::Protection,
        Aspect::Pool,
        Aspect::Basic,
    ];

    pub fn is_basic(&self) -> bool {
        matches!(self, Aspect::Basic)
    }

    pub fn display(&self) -> &'static str {
        match self {
            Aspect::Aggression => "Aggression",
            Aspect::Justice => "Justice",
            Aspect::Leadership => "Leadership",
            Aspect::Protection => "Protection",
            Aspect::Pool => "'Pool",
            Aspect::Basic => "Basic",
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}
