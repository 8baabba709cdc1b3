//! The 9×9 digit grid and placement validation.

use std::fmt::{self, Debug, Display};
use std::ops::Index;
use std::str::FromStr;

use crate::{Digit, DigitSet, Position};

/// A 9×9 grid of optional digits in row-major order.
///
/// `Grid` carries no game state beyond cell contents. Solutions, puzzle
/// problems, and scratch boards during generation are all plain grids; the
/// play session layers givens, notes, and scoring on top.
///
/// The textual form is 81 characters, `'1'`-`'9'` for digits and `'.'` for
/// empty cells (parsing also accepts `'0'` as empty):
///
/// ```
/// use scoredoku_core::Grid;
///
/// let grid: Grid = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///     .parse()
///     .unwrap();
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid([Option<Digit>; 81]);

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 81])
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.0[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.0[pos.index()] = digit;
    }

    /// Returns `true` when placing `digit` at `pos` would not collide with
    /// any other cell in the same row, column, or box.
    ///
    /// The cell at `pos` itself is ignored, so probing a cell's current
    /// digit never reports a self-conflict. Legality says nothing about the
    /// intended solution: a placement can be legal here and still wrong for
    /// the puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoredoku_core::{Digit, Grid, Position};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Position::new(0, 0), Digit::new(5));
    ///
    /// // Same row collides, a different digit there does not.
    /// assert!(!grid.is_legal_placement(Position::new(0, 8), Digit::Five));
    /// assert!(grid.is_legal_placement(Position::new(0, 8), Digit::Six));
    ///
    /// // Re-probing the occupied cell itself is legal.
    /// assert!(grid.is_legal_placement(Position::new(0, 0), Digit::Five));
    /// ```
    #[must_use]
    pub fn is_legal_placement(&self, pos: Position, digit: Digit) -> bool {
        Position::ALL
            .into_iter()
            .filter(|other| other.sees(pos))
            .all(|other| self.get(other) != Some(digit))
    }

    /// Returns `true` when every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Returns `true` when the grid is complete and every row, column, and
    /// box contains each digit exactly once.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut boxes = [DigitSet::EMPTY; 9];
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            rows[pos.row() as usize].insert(digit);
            cols[pos.col() as usize].insert(digit);
            boxes[pos.box_index() as usize].insert(digit);
        }
        rows.iter()
            .chain(&cols)
            .chain(&boxes)
            .all(|house| *house == DigitSet::ALL)
    }

    /// Iterates over the empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_none())
    }

    /// Returns the number of cells holding a digit.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.0[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({self})")
    }
}

/// Error returned when parsing a grid from its 81-character form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not have exactly 81 characters.
    #[display("grid string must have 81 cells, got {length}")]
    InvalidLength {
        /// Number of characters in the input.
        length: usize,
    },
    /// The input held a character other than `1`-`9`, `0`, or `.`.
    #[display("invalid cell character {character:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index.
        index: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != 81 {
            return Err(ParseGridError::InvalidLength { length });
        }
        let mut grid = Self::new();
        for (index, character) in s.chars().enumerate() {
            let cell = match character {
                '.' | '0' => None,
                '1'..='9' => Digit::new(character as u8 - b'0'),
                _ => return Err(ParseGridError::InvalidCharacter { character, index }),
            };
            grid.0[index] = cell;
        }
        Ok(grid)
    }
}


#[cfg(test)]
mod prop_tests {
    use proptest::prelude::*;

    use super::*;

    /// Reference legality check scanning the three houses directly.
    fn scan_houses(grid: &Grid, pos: Position, digit: Digit) -> bool {
        let row = (0..9).map(|c| Position::new(pos.row(), c));
        let col = (0..9).map(|r| Position::new(r, pos.col()));
        let box_origin = (pos.row() / 3 * 3, pos.col() / 3 * 3);
        let boxed = (0..3).flat_map(move |r| {
            (0..3).map(move |c| Position::new(box_origin.0 + r, box_origin.1 + c))
        });
        row.chain(col)
            .chain(boxed)
            .all(|peer| peer == pos || grid.get(peer) != Some(digit))
    }

    proptest! {
        #[test]
        fn legality_matches_house_scan(
            cells in proptest::collection::vec((0usize..81, 1u8..=9), 0..40),
            probe in 0usize..81,
            value in 1u8..=9,
        ) {
            let mut grid = Grid::new();
            for (index, value) in cells {
                grid.set(Position::from_index(index), Digit::new(value));
            }
            let pos = Position::from_index(probe);
            let digit = Digit::new(value).unwrap();
            prop_assert_eq!(
                grid.is_legal_placement(pos, digit),
                scan_houses(&grid, pos, digit)
            );
        }
    }
}
