//! Score submission and leaderboard read model for scoredoku.
//!
//! The play session produces a final score; this crate carries it to a
//! leaderboard and serves rankings back for display. Scores accumulate per
//! player — each submission adds to the player's running total and game
//! count — and rankings order players by total score, descending.
//!
//! Backends implement [`LeaderboardStore`]; an in-memory store
//! ([`InMemoryLeaderboard`]) and a JSON-file store ([`FileLeaderboard`])
//! are provided. Submission from gameplay goes through
//! [`submit_final_score`], which swallows backend failures — a leaderboard
//! outage never interrupts local play.
//!
//! # Examples
//!
//! ```
//! use scoredoku_core::Difficulty;
//! use scoredoku_leaderboard::{
//!     InMemoryLeaderboard, LeaderboardStore as _, ScoreSubmission, submit_final_score,
//! };
//!
//! let store = InMemoryLeaderboard::new();
//! submit_final_score(
//!     &store,
//!     &ScoreSubmission {
//!         player: "ada".into(),
//!         score: 6300,
//!         difficulty: Difficulty::Easy,
//!         time_secs: 312,
//!         mistakes: 0,
//!         hints_used: 0,
//!         puzzle: ".".repeat(81),
//!     },
//! );
//!
//! let top = store.top(10).unwrap();
//! assert_eq!(top[0].player, "ada");
//! assert_eq!(top[0].rank, 1);
//! ```

pub mod entry;
pub mod file;
pub mod memory;
pub mod store;

pub use self::entry::{PlayerRecord, RankedEntry, ScoreSubmission, puzzle_fingerprint};
pub use self::file::FileLeaderboard;
pub use self::memory::InMemoryLeaderboard;
pub use self::store::{LeaderboardError, LeaderboardStore, submit_final_score};
