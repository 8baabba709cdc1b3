//! Streak-multiplied score bookkeeping.

/// Running score and correct-placement streak for one session.
///
/// A correct placement extends the streak and awards the base point value
/// multiplied by the new streak length. A mistake resets the streak and
/// deducts one base point value, never taking the score below zero.
///
/// # Examples
///
/// ```
/// use scoredoku_session::ScoreTracker;
///
/// let mut tracker = ScoreTracker::new(10);
/// assert_eq!(tracker.record_correct(), 10);
/// assert_eq!(tracker.record_correct(), 20);
/// assert_eq!(tracker.score(), 30);
///
/// assert_eq!(tracker.record_mistake(), 10);
/// assert_eq!(tracker.streak(), 0);
/// assert_eq!(tracker.score(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTracker {
    base_points: u64,
    score: u64,
    streak: u32,
}

impl ScoreTracker {
    /// Creates a tracker scoring with the given base point value.
    #[must_use]
    pub const fn new(base_points: u64) -> Self {
        Self {
            base_points,
            score: 0,
            streak: 0,
        }
    }

    /// Restores a tracker from persisted counters.
    pub(crate) const fn restore(base_points: u64, score: u64, streak: u32) -> Self {
        Self {
            base_points,
            score,
            streak,
        }
    }

    /// Records a correct placement, returning the points awarded.
    pub fn record_correct(&mut self) -> u64 {
        self.streak += 1;
        let awarded = self.base_points * u64::from(self.streak);
        self.score += awarded;
        awarded
    }

    /// Records a mistake, returning the points actually deducted.
    ///
    /// The deduction is capped at the current score, so the score floors at
    /// zero rather than going negative.
    pub fn record_mistake(&mut self) -> u64 {
        self.streak = 0;
        let deducted = self.score.min(self.base_points);
        self.score -= deducted;
        deducted
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Consecutive correct placements since the last mistake.
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }
}
