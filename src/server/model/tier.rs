use serde::{Deserialize, Serialize};

/// Named progression tier derived from a pilot's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Recruit,
    Advanced,
    Veteran,
    Elite,
    Legend,
}

/// Minimum level for each tier, walked from the highest threshold down.
///
/// The first row whose threshold the level meets decides the tier. Levels below every
/// threshold fall through to [`Tier::Recruit`].
pub const TIER_TABLE: [(i64, Tier); 5] = [
    (20, Tier::Legend),
    (15, Tier::Elite),
    (10, Tier::Veteran),
    (5, Tier::Advanced),
    (0, Tier::Recruit),
];

impl Tier {
    /// Classifies a level into its tier.
    ///
    /// Total over all integers; zero and negative levels clamp to [`Tier::Recruit`].
    pub fn classify(level: i64) -> Self {
        TIER_TABLE
            .iter()
            .find(|(threshold, _)| level >= *threshold)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::Recruit)
    }

    /// Tier number from 1 (Recruit) to 5 (Legend).
    pub fn number(&self) -> u8 {
        match self {
            Self::Recruit => 1,
            Self::Advanced => 2,
            Self::Veteran => 3,
            Self::Elite => 4,
            Self::Legend => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Recruit => "Recruit",
            Self::Advanced => "Advanced",
            Self::Veteran => "Veteran",
            Self::Elite => "Elite",
            Self::Legend => "Legend",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
