//! Capped solution counting.
//!
//! Puzzle derivation clears a fixed number of cells per difficulty and does
//! not promise a unique solution (at the highest tiers it cannot). These
//! functions let callers measure uniqueness separately: counting stops as
//! soon as the cap is reached, so probing for "zero, one, or more" stays
//! cheap even on wide-open grids.

use scoredoku_core::{Digit, Grid, Position};

/// Counts the solutions of `grid`, stopping once `cap` have been found.
///
/// Returns a value in `0..=cap`. A return below the cap is the exact
/// solution count; a return equal to the cap means "at least this many".
/// A grid whose existing digits already collide has no solutions.
///
/// # Examples
///
/// ```
/// use scoredoku_core::Grid;
/// use scoredoku_generator::count_solutions;
///
/// // An empty grid has a vast number of solutions; the cap bounds the work.
/// assert_eq!(count_solutions(&Grid::new(), 3), 3);
/// ```
#[must_use]
pub fn count_solutions(grid: &Grid, cap: u32) -> u32 {
    let consistent = Position::ALL.into_iter().all(|pos| match grid.get(pos) {
        Some(digit) => grid.is_legal_placement(pos, digit),
        None => true,
    });
    if !consistent {
        return 0;
    }
    let mut scratch = *grid;
    count_from(&mut scratch, 0, cap)
}

/// Returns `true` when `grid` has exactly one solution.
#[must_use]
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, 2) == 1
}

fn count_from(grid: &mut Grid, index: usize, cap: u32) -> u32 {
    if cap == 0 {
        return 0;
    }
    let Some(&pos) = Position::ALL.get(index) else {
        return 1;
    };
    if grid.get(pos).is_some() {
        return count_from(grid, index + 1, cap);
    }
    let mut found = 0;
    for digit in Digit::ALL {
        if grid.is_legal_placement(pos, digit) {
            grid.set(pos, Some(digit));
            found += count_from(grid, index + 1, cap - found);
            grid.set(pos, None);
            if found >= cap {
                break;
            }
        }
    }
    found
}
