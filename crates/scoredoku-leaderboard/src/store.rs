//! The leaderboard backend trait and fire-and-forget submission.

use log::{debug, warn};

use crate::{RankedEntry, ScoreSubmission};

/// Error returned by leaderboard backends.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LeaderboardError {
    /// Reading or writing the backing store failed.
    #[display("leaderboard storage error: {_0}")]
    Io(std::io::Error),
    /// The backing store held malformed data.
    #[display("leaderboard format error: {_0}")]
    Format(serde_json::Error),
    /// The backend is not reachable right now.
    #[display("leaderboard backend unavailable")]
    Unavailable,
}

/// A leaderboard backend: accepts score submissions and serves rankings.
///
/// Submissions accumulate per player (total score and game count); rankings
/// order players by total score, descending. The trait takes `&self` so a
/// backend can be shared between a session host and a display surface.
pub trait LeaderboardStore {
    /// Folds a completed session's score into the player's record.
    ///
    /// # Errors
    ///
    /// Returns a [`LeaderboardError`] when the backend is unavailable or
    /// its storage fails.
    fn submit(&self, submission: &ScoreSubmission) -> Result<(), LeaderboardError>;

    /// Returns up to `limit` ranked entries, best first.
    ///
    /// # Errors
    ///
    /// Returns a [`LeaderboardError`] when the backend is unavailable or
    /// its storage fails.
    fn top(&self, limit: usize) -> Result<Vec<RankedEntry>, LeaderboardError>;

    /// Returns the named player's ranked entry, or `None` when the player
    /// has no submissions.
    ///
    /// # Errors
    ///
    /// Returns a [`LeaderboardError`] when the backend is unavailable or
    /// its storage fails.
    fn rank_of(&self, player: &str) -> Result<Option<RankedEntry>, LeaderboardError>;

    /// Whether the backend can currently serve requests.
    fn is_available(&self) -> bool;

    /// Backend name for display and logging.
    fn name(&self) -> &str;
}

/// Submits a final score, swallowing any failure.
///
/// Score submission is fire-and-forget from the engine's point of view: a
/// backend failure must never disturb local play, so errors are logged at
/// `warn` and dropped. Returns whether the submission went through, for
/// hosts that want to surface a non-blocking notice.
pub fn submit_final_score(store: &dyn LeaderboardStore, submission: &ScoreSubmission) -> bool {
    match store.submit(submission) {
        Ok(()) => {
            debug!(
                "submitted {} points for {} to {}",
                submission.score,
                submission.player,
                store.name()
            );
            true
        }
        Err(err) => {
            warn!(
                "score submission to {} failed (ignored): {err}",
                store.name()
            );
            false
        }
    }
}
