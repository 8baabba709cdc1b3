//! Difficulty tiers and their gameplay policy tables.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Puzzle difficulty tier.
///
/// Each tier fixes three gameplay constants: how many cells the generator
/// removes from a solved board, how many hints a session may spend, and the
/// base point value a placement is scored with.
///
/// | Tier   | Cells removed | Hints | Base points |
/// |--------|---------------|-------|-------------|
/// | Easy   | 35            | 5     | 10          |
/// | Medium | 45            | 4     | 20          |
/// | Hard   | 52            | 3     | 30          |
/// | Expert | 58            | 2     | 40          |
/// | Master | 64            | 1     | 50          |
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Difficulty {
    /// 35 cells removed, 5 hints, 10 base points.
    #[default]
    Easy,
    /// 45 cells removed, 4 hints, 20 base points.
    Medium,
    /// 52 cells removed, 3 hints, 30 base points.
    Hard,
    /// 58 cells removed, 2 hints, 40 base points.
    Expert,
    /// 64 cells removed, 1 hint, 50 base points.
    Master,
}

impl Difficulty {
    /// All tiers from easiest to hardest.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Expert,
        Self::Master,
    ];

    /// Number of cells the generator clears from a solved board.
    #[must_use]
    pub const fn cells_removed(self) -> usize {
        match self {
            Self::Easy => 35,
            Self::Medium => 45,
            Self::Hard => 52,
            Self::Expert => 58,
            Self::Master => 64,
        }
    }

    /// Number of hints a session at this tier may spend.
    #[must_use]
    pub const fn hint_allowance(self) -> u32 {
        match self {
            Self::Easy => 5,
            Self::Medium => 4,
            Self::Hard => 3,
            Self::Expert => 2,
            Self::Master => 1,
        }
    }

    /// Base point value for scoring placements at this tier.
    #[must_use]
    pub const fn base_points(self) -> u64 {
        match self {
            Self::Easy => 10,
            Self::Medium => 20,
            Self::Hard => 30,
            Self::Expert => 40,
            Self::Master => 50,
        }
    }

    /// Lowercase tier name, as used in textual interfaces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
            Self::Master => "master",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?}, expected one of easy/medium/hard/expert/master")]
pub struct ParseDifficultyError {
    /// The unrecognized input.
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            "master" => Ok(Self::Master),
            _ => Err(ParseDifficultyError { name: s.to_owned() }),
        }
    }
}
