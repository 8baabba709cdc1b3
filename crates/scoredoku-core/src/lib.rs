//! Core data types for the scoredoku game engine.
//!
//! This crate holds the pure, I/O-free vocabulary shared by the generator,
//! the play session, and the leaderboard bridge:
//!
//! - [`Digit`]: type-safe sudoku digits 1-9
//! - [`Position`]: row/column cell coordinates with the `sees` adjacency
//!   relation
//! - [`DigitSet`]: a bitmask set of digits, used for pencil-mark notes and
//!   house validation
//! - [`Grid`]: the 9×9 board of optional digits, placement legality
//!   checking, and the 81-character textual form
//! - [`Difficulty`]: the five gameplay tiers and their policy tables
//!   (removal counts, hint allowances, base point values)
//!
//! # Examples
//!
//! ```
//! use scoredoku_core::{Difficulty, Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Digit::new(5));
//!
//! assert!(!grid.is_legal_placement(Position::new(0, 5), Digit::Five));
//! assert!(grid.is_legal_placement(Position::new(5, 5), Digit::Five));
//!
//! assert_eq!(Difficulty::Easy.cells_removed(), 35);
//! ```

pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;

pub use self::difficulty::{Difficulty, ParseDifficultyError};
pub use self::digit::Digit;
pub use self::digit_set::DigitSet;
pub use self::grid::{Grid, ParseGridError};
pub use self::position::Position;
