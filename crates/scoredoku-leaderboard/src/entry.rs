//! Submission and ranking records.

use std::collections::HashMap;

use scoredoku_core::{Difficulty, Grid};
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

/// One completed session's results, submitted under a player identity.
///
/// Player identity is an opaque string; accounts and authentication are
/// host concerns. `puzzle` carries the problem grid's 81-character form so
/// backends can fingerprint or audit boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// Opaque player identity.
    pub player: String,
    /// Final session score.
    pub score: u64,
    /// Difficulty the session was played at.
    pub difficulty: Difficulty,
    /// Active play time in whole seconds.
    pub time_secs: u64,
    /// Mistakes made during the session.
    pub mistakes: u32,
    /// Hints spent during the session.
    pub hints_used: u32,
    /// The problem grid in its 81-character form.
    pub puzzle: String,
}

/// A player's accumulated standing.
///
/// Submissions add to the running total and bump the game count; the
/// leaderboard ranks players by total score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Sum of all submitted session scores.
    pub total_score: u64,
    /// Number of submitted sessions.
    pub games: u64,
}

impl PlayerRecord {
    /// Folds one submission into the record.
    pub fn absorb(&mut self, submission: &ScoreSubmission) {
        self.total_score += submission.score;
        self.games += 1;
    }
}

/// One row of the ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based rank, best first.
    pub rank: usize,
    /// Opaque player identity.
    pub player: String,
    /// Accumulated total score.
    pub score: u64,
    /// Number of submitted sessions.
    pub games: u64,
}

/// Ranks accumulated records by total score, descending.
///
/// Ties break by player name so the ordering is stable across backends.
pub(crate) fn rank_records(records: &HashMap<String, PlayerRecord>) -> Vec<RankedEntry> {
    let mut players: Vec<(&String, &PlayerRecord)> = records.iter().collect();
    players.sort_by(|(a_name, a), (b_name, b)| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| a_name.cmp(b_name))
    });
    players
        .into_iter()
        .enumerate()
        .map(|(i, (player, record))| RankedEntry {
            rank: i + 1,
            player: player.clone(),
            score: record.total_score,
            games: record.games,
        })
        .collect()
}

/// SHA-256 fingerprint of a puzzle, as 64 lowercase hex characters.
///
/// Identifies a board (for dedup or audit) without shipping it around.
///
/// # Examples
///
/// ```
/// use scoredoku_core::Grid;
/// use scoredoku_leaderboard::puzzle_fingerprint;
///
/// let grid = Grid::new();
/// let fingerprint = puzzle_fingerprint(&grid);
/// assert_eq!(fingerprint.len(), 64);
/// assert_eq!(fingerprint, puzzle_fingerprint(&grid));
/// ```
#[must_use]
pub fn puzzle_fingerprint(grid: &Grid) -> String {
    let digest = Sha256::digest(grid.to_string().as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(player: &str, score: u64) -> ScoreSubmission {
        ScoreSubmission {
            player: player.to_owned(),
            score,
            difficulty: Difficulty::Medium,
            time_secs: 240,
            mistakes: 1,
            hints_used: 0,
            puzzle: ".".repeat(81),
        }
    }

    #[test]
    fn records_accumulate() {
        let mut record = PlayerRecord::default();
        record.absorb(&submission("ada", 100));
        record.absorb(&submission("ada", 250));
        assert_eq!(record.total_score, 350);
        assert_eq!(record.games, 2);
    }

    #[test]
    fn ranking_is_total_descending_with_stable_ties() {
        let mut records = HashMap::new();
        records.insert(
            "ada".to_owned(),
            PlayerRecord {
                total_score: 300,
                games: 2,
            },
        );
        records.insert(
            "grace".to_owned(),
            PlayerRecord {
                total_score: 500,
                games: 1,
            },
        );
        records.insert(
            "alan".to_owned(),
            PlayerRecord {
                total_score: 300,
                games: 3,
            },
        );

        let ranked = rank_records(&records);
        let order: Vec<(&str, usize)> = ranked
            .iter()
            .map(|entry| (entry.player.as_str(), entry.rank))
            .collect();
        assert_eq!(order, [("grace", 1), ("ada", 2), ("alan", 3)]);
    }

    #[test]
    fn fingerprints_distinguish_boards() {
        let empty = Grid::new();
        let solved: Grid =
            "123456789456789123789123456214365897365897214897214365531642978642978531978531642"
                .parse()
                .unwrap();
        assert_ne!(puzzle_fingerprint(&empty), puzzle_fingerprint(&solved));
        assert!(
            puzzle_fingerprint(&solved)
                .chars()
                .all(|c| c.is_ascii_hexdigit())
        );
    }
}
