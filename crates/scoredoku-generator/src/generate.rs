//! Solved-grid construction and puzzle derivation.

use log::debug;
use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use scoredoku_core::{Difficulty, Digit, Grid, Position};

use crate::PuzzleSeed;

/// A generated puzzle together with its solution and provenance.
///
/// `problem` agrees with `solution` on every filled cell; the number of
/// empty cells equals the difficulty's removal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid with cells removed.
    pub problem: Grid,
    /// The fully solved grid the problem was derived from.
    pub solution: Grid,
    /// Difficulty tier the puzzle was generated for.
    pub difficulty: Difficulty,
    /// Seed that reproduces this puzzle exactly.
    pub seed: PuzzleSeed,
}

/// Sudoku puzzle generator.
///
/// Builds a solved grid by randomized backtracking, then derives the
/// problem by clearing a difficulty-scaled number of cells. Generation is
/// driven entirely by the seed, so [`generate_with_seed`] is reproducible
/// bit for bit.
///
/// [`generate_with_seed`]: PuzzleGenerator::generate_with_seed
///
/// # Examples
///
/// ```
/// use scoredoku_core::Difficulty;
/// use scoredoku_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("example");
/// let puzzle = generator.generate_with_seed(seed, Difficulty::Medium);
///
/// assert!(puzzle.solution.is_valid_solution());
/// assert_eq!(puzzle.problem.filled_count(), 81 - 45);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates a puzzle from fresh entropy.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random(), difficulty)
    }

    /// Generates the puzzle determined by `seed` and `difficulty`.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed, difficulty: Difficulty) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let solution = generate_solved_grid(&mut rng);
        let problem = derive_puzzle(&solution, difficulty, &mut rng);
        debug!(
            "generated {difficulty} puzzle from seed {seed}: {} givens",
            problem.filled_count()
        );
        GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        }
    }
}

/// Produces a fully solved grid by randomized backtracking.
///
/// Cells are visited in row-major order; at each empty cell the nine digits
/// are tried in a freshly shuffled order and the first legal one is placed,
/// backtracking when a cell admits no digit. Failure at the root restarts
/// from an empty grid, though from an empty grid the search always finds a
/// solution.
pub fn generate_solved_grid<R: Rng>(rng: &mut R) -> Grid {
    loop {
        let mut grid = Grid::new();
        if fill_from(&mut grid, 0, rng) {
            return grid;
        }
    }
}

fn fill_from<R: Rng>(grid: &mut Grid, index: usize, rng: &mut R) -> bool {
    let Some(&pos) = Position::ALL.get(index) else {
        return true;
    };
    if grid.get(pos).is_some() {
        return fill_from(grid, index + 1, rng);
    }
    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if grid.is_legal_placement(pos, digit) {
            grid.set(pos, Some(digit));
            if fill_from(grid, index + 1, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

/// Derives a playable problem from a solved grid by clearing exactly
/// `difficulty.cells_removed()` cells, chosen uniformly.
///
/// The removal count is unconditional; whether the remaining givens pin
/// down a unique solution is not checked here. Use
/// [`has_unique_solution`](crate::has_unique_solution) when uniqueness
/// matters.
pub fn derive_puzzle<R: Rng>(solution: &Grid, difficulty: Difficulty, rng: &mut R) -> Grid {
    let mut positions = Position::ALL;
    positions.shuffle(rng);

    let mut problem = *solution;
    for &pos in &positions[..difficulty.cells_removed()] {
        problem.set(pos, None);
    }
    problem
}
