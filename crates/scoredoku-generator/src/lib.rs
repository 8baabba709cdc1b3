//! Seeded Sudoku puzzle generation.
//!
//! This crate turns a 32-byte [`PuzzleSeed`] into a [`GeneratedPuzzle`]: a
//! fully solved grid plus a playable problem derived from it by clearing a
//! difficulty-scaled number of cells. Generation is pure computation over a
//! PCG-64 stream, so the same seed always reproduces the same board.
//!
//! Derivation clears an exact number of cells per tier and does not filter
//! for single-solution puzzles; [`count_solutions`] and
//! [`has_unique_solution`] are provided for callers that want to measure
//! that property themselves.
//!
//! # Examples
//!
//! ```
//! use scoredoku_core::Difficulty;
//! use scoredoku_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate_with_seed(
//!     PuzzleSeed::from_phrase("docs"),
//!     Difficulty::Easy,
//! );
//!
//! assert!(puzzle.solution.is_valid_solution());
//! assert_eq!(81 - puzzle.problem.filled_count(), 35);
//! ```

pub mod generate;
pub mod seed;
pub mod uniqueness;

pub use self::generate::{GeneratedPuzzle, PuzzleGenerator, derive_puzzle, generate_solved_grid};
pub use self::seed::{ParseSeedError, PuzzleSeed};
pub use self::uniqueness::{count_solutions, has_unique_solution};
