//! Derived presentation state.
//!
//! Highlighting, error marks, and flashes are never stored on the session;
//! [`Session::view`] recomputes them from the domain state on demand, so a
//! stale projection can never leak back into gameplay.

use scoredoku_core::{Digit, DigitSet, Position};

use crate::{CellState, FlashKind, Session};

bitflags::bitflags! {
    /// Per-cell visual state, recomputed on every [`Session::view`] call.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        /// The selected cell.
        const SELECTED = 0b0000_0001;
        /// Shares a row, column, or box with the selection.
        const HIGHLIGHTED = 0b0000_0010;
        /// Shows the same digit as the selected cell.
        const SAME_DIGIT = 0b0000_0100;
        /// Player-filled and disagrees with the solution.
        const ERROR = 0b0000_1000;
        /// Holds a digit that collides with a peer on the working grid.
        const CONFLICT = 0b0001_0000;
        /// Live correct-placement flash.
        const FLASH_CORRECT = 0b0010_0000;
        /// Live mistake flash.
        const FLASH_MISTAKE = 0b0100_0000;
    }
}

/// Presentation state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// The digit shown in the cell, if any.
    pub digit: Option<Digit>,
    /// Whether the digit was supplied by the puzzle.
    pub is_given: bool,
    /// Pencil-mark notes.
    pub notes: DigitSet,
    /// Visual flags.
    pub flags: CellFlags,
}

/// A full-board projection for rendering.
///
/// While the session is paused the view reveals nothing: digits, notes, and
/// flags are all blanked so a host cannot accidentally render the board
/// behind its pause curtain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: [CellView; 81],
    paused: bool,
}

impl BoardView {
    /// The view of the cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos.index()]
    }

    /// Whether the session was paused when this view was taken.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Session {
    /// Computes the presentation state for the current board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        const BLANK: CellView = CellView {
            digit: None,
            is_given: false,
            notes: DigitSet::EMPTY,
            flags: CellFlags::empty(),
        };
        if self.paused {
            return BoardView {
                cells: [BLANK; 81],
                paused: true,
            };
        }

        let shown = self.to_grid();
        let selected_digit = self
            .selected
            .and_then(|pos| self.cells[pos.index()].digit());
        let mut cells = [BLANK; 81];
        for pos in Position::ALL {
            let state = &self.cells[pos.index()];
            let digit = state.digit();
            let mut flags = CellFlags::empty();

            if let Some(selected) = self.selected {
                if selected == pos {
                    flags |= CellFlags::SELECTED;
                } else if selected.sees(pos) {
                    flags |= CellFlags::HIGHLIGHTED;
                }
                if digit.is_some() && digit == selected_digit && selected != pos {
                    flags |= CellFlags::SAME_DIGIT;
                }
            }
            if let Some(digit) = digit {
                if matches!(state, CellState::Filled(_)) && self.solution.get(pos) != Some(digit) {
                    flags |= CellFlags::ERROR;
                }
                if !shown.is_legal_placement(pos, digit) {
                    flags |= CellFlags::CONFLICT;
                }
            }
            if let Some(flash) = self.flash
                && flash.position == pos
            {
                flags |= match flash.kind {
                    FlashKind::Correct => CellFlags::FLASH_CORRECT,
                    FlashKind::Mistake => CellFlags::FLASH_MISTAKE,
                };
            }

            cells[pos.index()] = CellView {
                digit,
                is_given: state.is_given(),
                notes: state.notes(),
                flags,
            };
        }
        BoardView {
            cells,
            paused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use scoredoku_core::{Difficulty, Grid};
    use scoredoku_generator::{GeneratedPuzzle, PuzzleSeed};

    use super::*;
    use crate::PlaceOutcome;

    const SOLVED: &str =
        "123456789456789123789123456214365897365897214897214365531642978642978531978531642";

    fn session_with_holes(holes: &[Position]) -> Session {
        let solution: Grid = SOLVED.parse().unwrap();
        let mut problem = solution;
        for &pos in holes {
            problem.set(pos, None);
        }
        Session::from_puzzle(GeneratedPuzzle {
            problem,
            solution,
            difficulty: Difficulty::Easy,
            seed: PuzzleSeed::from_bytes([1; 32]),
        })
    }

    #[test]
    fn selection_highlights_row_column_and_box() {
        let mut session = session_with_holes(&[Position::new(4, 4)]);
        session.select(Position::new(4, 4));
        let view = session.view();

        assert!(view.cell(Position::new(4, 4)).flags.contains(CellFlags::SELECTED));
        assert!(view.cell(Position::new(4, 0)).flags.contains(CellFlags::HIGHLIGHTED));
        assert!(view.cell(Position::new(0, 4)).flags.contains(CellFlags::HIGHLIGHTED));
        assert!(view.cell(Position::new(3, 3)).flags.contains(CellFlags::HIGHLIGHTED));
        assert!(!view.cell(Position::new(0, 0)).flags.contains(CellFlags::HIGHLIGHTED));
    }

    #[test]
    fn same_digit_marks_other_occurrences() {
        let mut session = session_with_holes(&[]);
        // (0,0) holds 1; so do eight other cells.
        session.select(Position::new(0, 0));
        let view = session.view();

        let same: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| view.cell(*pos).flags.contains(CellFlags::SAME_DIGIT))
            .collect();
        assert_eq!(same.len(), 8);
        assert!(!same.contains(&Position::new(0, 0)));
        for pos in same {
            assert_eq!(view.cell(pos).digit, Some(Digit::One));
        }
    }

    #[test]
    fn wrong_fill_is_error_and_conflict() {
        let hole = Position::new(0, 0);
        let mut session = session_with_holes(&[hole]);
        session.select(hole);
        // 2 already appears at (0,1): wrong for the solution and illegal.
        let outcome = session.place_digit(Digit::Two);
        assert!(matches!(outcome, PlaceOutcome::Mistake { .. }));

        let view = session.view();
        let flags = view.cell(hole).flags;
        assert!(flags.contains(CellFlags::ERROR));
        assert!(flags.contains(CellFlags::CONFLICT));
        assert!(flags.contains(CellFlags::FLASH_MISTAKE));
        // The peer it collides with conflicts too, but is not an error.
        let peer = view.cell(Position::new(0, 1)).flags;
        assert!(peer.contains(CellFlags::CONFLICT));
        assert!(!peer.contains(CellFlags::ERROR));
    }

    #[test]
    fn correct_fill_flashes_then_clears() {
        let hole = Position::new(8, 8);
        let mut session = session_with_holes(&[hole]);
        session.select(hole);
        let PlaceOutcome::Correct { flash, .. } = session.place_digit(Digit::Two) else {
            panic!("(8,8) holds 2 in the solution");
        };

        let flags = session.view().cell(hole).flags;
        assert!(flags.contains(CellFlags::FLASH_CORRECT));
        assert!(!flags.contains(CellFlags::ERROR));
        assert!(!flags.contains(CellFlags::CONFLICT));

        session.clear_flash(flash);
        let flags = session.view().cell(hole).flags;
        assert!(!flags.contains(CellFlags::FLASH_CORRECT));
    }

    #[test]
    fn givens_and_notes_are_reported() {
        let hole = Position::new(2, 2);
        let mut session = session_with_holes(&[hole]);
        session.select(hole);
        session.toggle_notes_mode();
        session.place_digit(Digit::Four);
        session.place_digit(Digit::Eight);

        let view = session.view();
        assert!(view.cell(Position::new(0, 0)).is_given);
        let noted = view.cell(hole);
        assert!(!noted.is_given);
        assert_eq!(noted.digit, None);
        let expected: DigitSet = [Digit::Four, Digit::Eight].into_iter().collect();
        assert_eq!(noted.notes, expected);
    }

    #[test]
    fn paused_view_reveals_nothing() {
        let mut session = session_with_holes(&[Position::new(5, 5)]);
        session.select(Position::new(0, 0));
        session.toggle_pause();

        let view = session.view();
        assert!(view.is_paused());
        for pos in Position::ALL {
            let cell = view.cell(pos);
            assert_eq!(cell.digit, None);
            assert_eq!(cell.notes, DigitSet::EMPTY);
            assert_eq!(cell.flags, CellFlags::empty());
        }
    }
}
