//! Raid registry
//!
//! The carry-run targets the tool knows about: roster size, difficulty
//! options, and the clear reward per difficulty (useful as a pricing anchor,
//! not as the bus price itself).

use serde::{Deserialize, Serialize};

use crate::{gold::Gold, run::RunSize};

/// Raid difficulty tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Normal mode.
    Normal,
    /// Hard mode.
    Hard,
}

/// A raid that can be sold as a carry run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raid {
    id: &'static str,
    name: &'static str,
    run_size: RunSize,
    default_difficulty: Difficulty,
    rewards: &'static [(Difficulty, Gold)],
}

impl Raid {
    /// Stable identifier, e.g. `"behemoth"`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Roster size of this raid.
    pub fn run_size(&self) -> RunSize {
        self.run_size
    }

    /// Difficulty preselected by the original tool.
    pub fn default_difficulty(&self) -> Difficulty {
        self.default_difficulty
    }

    /// Difficulties this raid can be run at.
    pub fn difficulties(&self) -> impl Iterator<Item = Difficulty> + '_ {
        self.rewards.iter().map(|(difficulty, _)| *difficulty)
    }

    /// Clear gold reward at `difficulty`, if the raid offers it.
    pub fn reward(&self, difficulty: Difficulty) -> Option<Gold> {
        self.rewards
            .iter()
            .find(|(tier, _)| *tier == difficulty)
            .map(|(_, gold)| *gold)
    }
}

const RAIDS: &[Raid] = &[
    Raid {
        id: "echidna",
        name: "Echidna",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 16_000), (Difficulty::Hard, 19_500)],
    },
    Raid {
        id: "kakul",
        name: "Kakul-Saydon",
        run_size: RunSize::Four,
        default_difficulty: Difficulty::Normal,
        rewards: &[(Difficulty::Normal, 2_000)],
    },
    Raid {
        id: "brelshaza-act2",
        name: "Brelshaza Act 2",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 27_500), (Difficulty::Hard, 34_000)],
    },
    Raid {
        id: "akkan",
        name: "Akkan",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 5_400), (Difficulty::Hard, 7_500)],
    },
    Raid {
        id: "kayangel",
        name: "Kayangel",
        run_size: RunSize::Four,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 3_600), (Difficulty::Hard, 3_800)],
    },
    Raid {
        id: "thaemine",
        name: "Thaemine",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 11_000), (Difficulty::Hard, 18_800)],
    },
    Raid {
        id: "valtan",
        name: "Valtan",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 750), (Difficulty::Hard, 1_100)],
    },
    Raid {
        id: "vykas",
        name: "Vykas",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 1_000), (Difficulty::Hard, 1_500)],
    },
    Raid {
        id: "behemoth",
        name: "Behemoth",
        run_size: RunSize::Sixteen,
        default_difficulty: Difficulty::Normal,
        rewards: &[(Difficulty::Normal, 18_000)],
    },
    Raid {
        id: "voldis",
        name: "Voldis",
        run_size: RunSize::Four,
        default_difficulty: Difficulty::Normal,
        rewards: &[(Difficulty::Normal, 6_500), (Difficulty::Hard, 13_000)],
    },
    Raid {
        id: "aegir",
        name: "Aegir",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Normal,
        rewards: &[(Difficulty::Normal, 23_000), (Difficulty::Hard, 27_500)],
    },
    Raid {
        id: "brelshaza",
        name: "Brelshaza",
        run_size: RunSize::Eight,
        default_difficulty: Difficulty::Hard,
        rewards: &[(Difficulty::Normal, 4_600), (Difficulty::Hard, 5_600)],
    },
];

/// Every known raid, in the original tool's display order.
pub fn all() -> &'static [Raid] {
    RAIDS
}

/// Find a raid by its identifier.
pub fn find(id: &str) -> Option<&'static Raid> {
    RAIDS.iter().find(|raid| raid.id == id)
}
