//! Working-grid cell states.

use scoredoku_core::{Digit, DigitSet};

/// State of one cell on the working grid.
///
/// The variants make two invariants structural: a cell holding a digit can
/// never carry notes, and notes are only tracked while at least one digit is
/// pencilled in (removing the last note returns the cell to [`Empty`]).
///
/// [`Empty`]: CellState::Empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CellState {
    /// No digit and no notes.
    Empty,
    /// A digit supplied by the puzzle, immutable during play.
    Given(Digit),
    /// A digit entered by the player (possibly wrong).
    Filled(Digit),
    /// A non-empty set of pencil-mark candidates.
    Notes(DigitSet),
}

impl CellState {
    /// Returns the digit shown in this cell, given or player-entered.
    #[must_use]
    pub const fn digit(&self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(*digit),
            Self::Empty | Self::Notes(_) => None,
        }
    }

    /// Returns the pencil-mark notes, empty unless this is a notes cell.
    #[must_use]
    pub const fn notes(&self) -> DigitSet {
        match self {
            Self::Notes(notes) => *notes,
            _ => DigitSet::EMPTY,
        }
    }

    /// Returns `true` when the cell holds no digit (empty or notes-only).
    ///
    /// Vacant cells are the ones placements, hints, and note toggles target.
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        matches!(self, Self::Empty | Self::Notes(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_and_notes_accessors() {
        assert_eq!(CellState::Empty.digit(), None);
        assert_eq!(CellState::Given(Digit::Three).digit(), Some(Digit::Three));
        assert_eq!(CellState::Filled(Digit::Eight).digit(), Some(Digit::Eight));

        let notes: DigitSet = [Digit::One, Digit::Four].into_iter().collect();
        assert_eq!(CellState::Notes(notes).digit(), None);
        assert_eq!(CellState::Notes(notes).notes(), notes);
        assert_eq!(CellState::Filled(Digit::Two).notes(), DigitSet::EMPTY);
    }

    #[test]
    fn vacancy_excludes_digit_holders() {
        assert!(CellState::Empty.is_vacant());
        assert!(CellState::Notes(DigitSet::ALL).is_vacant());
        assert!(!CellState::Given(Digit::One).is_vacant());
        assert!(!CellState::Filled(Digit::One).is_vacant());
    }
}
