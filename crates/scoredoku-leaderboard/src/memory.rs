//! In-memory leaderboard backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::entry::rank_records;
use crate::{LeaderboardError, LeaderboardStore, PlayerRecord, RankedEntry, ScoreSubmission};

/// Leaderboard backend holding all records in memory.
///
/// Useful for tests and ephemeral hosts. The availability switch lets
/// failure paths (swallowed submissions, display fallbacks) be exercised
/// deterministically.
#[derive(Debug)]
pub struct InMemoryLeaderboard {
    records: Mutex<HashMap<String, PlayerRecord>>,
    available: AtomicBool,
}

impl Default for InMemoryLeaderboard {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLeaderboard {
    /// Creates an empty, available leaderboard.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Switches whether the backend reports (and behaves) as available.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    fn records(&self) -> std::sync::MutexGuard<'_, HashMap<String, PlayerRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_available(&self) -> Result<(), LeaderboardError> {
        if self.available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(LeaderboardError::Unavailable)
        }
    }
}

impl LeaderboardStore for InMemoryLeaderboard {
    fn submit(&self, submission: &ScoreSubmission) -> Result<(), LeaderboardError> {
        self.check_available()?;
        self.records()
            .entry(submission.player.clone())
            .or_default()
            .absorb(submission);
        Ok(())
    }

    fn top(&self, limit: usize) -> Result<Vec<RankedEntry>, LeaderboardError> {
        self.check_available()?;
        let mut ranked = rank_records(&self.records());
        ranked.truncate(limit);
        Ok(ranked)
    }

    fn rank_of(&self, player: &str) -> Result<Option<RankedEntry>, LeaderboardError> {
        self.check_available()?;
        Ok(rank_records(&self.records())
            .into_iter()
            .find(|entry| entry.player == player))
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use scoredoku_core::Difficulty;

    use super::*;

    fn submission(player: &str, score: u64) -> ScoreSubmission {
        ScoreSubmission {
            player: player.to_owned(),
            score,
            difficulty: Difficulty::Hard,
            time_secs: 600,
            mistakes: 2,
            hints_used: 3,
            puzzle: ".".repeat(81),
        }
    }

    #[test]
    fn totals_accumulate_across_submissions() {
        let store = InMemoryLeaderboard::new();
        store.submit(&submission("ada", 100)).unwrap();
        store.submit(&submission("ada", 150)).unwrap();
        store.submit(&submission("grace", 300)).unwrap();

        let top = store.top(10).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!((top[0].player.as_str(), top[0].score), ("grace", 300));
        assert_eq!((top[1].player.as_str(), top[1].score), ("ada", 250));
        assert_eq!(top[1].games, 2);
    }

    #[test]
    fn top_respects_the_limit() {
        let store = InMemoryLeaderboard::new();
        for (i, player) in ["a", "b", "c", "d"].into_iter().enumerate() {
            store.submit(&submission(player, 100 * (i as u64 + 1))).unwrap();
        }
        let top = store.top(2).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].player, "d");
        assert_eq!(top[0].rank, 1);
        assert_eq!(top[1].rank, 2);
    }

    #[test]
    fn rank_of_finds_the_player() {
        let store = InMemoryLeaderboard::new();
        store.submit(&submission("ada", 100)).unwrap();
        store.submit(&submission("grace", 300)).unwrap();

        let entry = store.rank_of("ada").unwrap().unwrap();
        assert_eq!(entry.rank, 2);
        assert_eq!(entry.score, 100);
        assert!(store.rank_of("nobody").unwrap().is_none());
    }

    #[test]
    fn unavailable_backend_errors_every_operation() {
        let store = InMemoryLeaderboard::new();
        store.set_available(false);
        assert!(!store.is_available());
        assert!(matches!(
            store.submit(&submission("ada", 1)),
            Err(LeaderboardError::Unavailable)
        ));
        assert!(matches!(store.top(5), Err(LeaderboardError::Unavailable)));
        assert!(matches!(
            store.rank_of("ada"),
            Err(LeaderboardError::Unavailable)
        ));
    }
}
