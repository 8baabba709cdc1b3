//! Serializable session snapshots.
//!
//! A snapshot captures an uncompleted session between visits: grids in
//! their 81-character forms, notes as explicit digit lists (not a native
//! set), and the scoring/clock counters. Pause state is deliberately not
//! stored; restoration always resumes the clock, rebased by the saved
//! elapsed seconds.

use std::time::{Duration, Instant};

use log::debug;
use scoredoku_core::{Digit, DigitSet, Grid, ParseGridError, Position};
use serde::{Deserialize, Serialize};

use crate::{CellState, ScoreTracker, Session};

/// Notes of one cell, serialized as an explicit digit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEntry {
    /// Row coordinate (0-8).
    pub row: u8,
    /// Column coordinate (0-8).
    pub col: u8,
    /// Pencilled digits (1-9), ascending.
    pub digits: Vec<u8>,
}

/// Persistable state of an uncompleted session.
///
/// Produced by [`Session::snapshot`] and consumed by
/// [`Session::from_snapshot`]. Grids are stored in their textual forms so
/// the snapshot stays portable and diffable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Problem grid (givens only), 81 characters.
    pub problem: String,
    /// Solution grid, 81 characters.
    pub solution: String,
    /// Player-filled digits only, 81 characters.
    pub filled: String,
    /// Pencil-mark notes per cell; cells without notes are omitted.
    pub notes: Vec<NoteEntry>,
    /// Selected cell as `(row, col)`, if any.
    pub selected: Option<(u8, u8)>,
    /// Difficulty tier.
    pub difficulty: scoredoku_core::Difficulty,
    /// Active play time at save, in whole seconds.
    pub elapsed_secs: u64,
    /// Mistake count.
    pub mistakes: u32,
    /// Hints spent.
    pub hints_used: u32,
    /// Whether notes mode was active.
    pub notes_mode: bool,
    /// Score at save.
    pub score: u64,
    /// Correct-placement streak at save.
    pub streak: u32,
}

/// Error returned when restoring a session from a corrupt snapshot.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SnapshotError {
    /// A grid string failed to parse.
    #[display("invalid grid: {_0}")]
    #[from]
    Grid(ParseGridError),
    /// The solution grid is not a valid Sudoku solution.
    #[display("solution grid is not a valid solution")]
    InvalidSolution,
    /// A given disagrees with the solution.
    #[display("problem disagrees with solution at {position}")]
    ProblemConflictsWithSolution {
        /// The offending cell.
        position: Position,
    },
    /// A player-filled digit overlaps a given cell.
    #[display("filled digit overlaps a given at {position}")]
    FilledOverGiven {
        /// The offending cell.
        position: Position,
    },
    /// A note entry names a cell off the board.
    #[display("note position ({row}, {col}) out of range")]
    NotePositionOutOfRange {
        /// Stored row.
        row: u8,
        /// Stored column.
        col: u8,
    },
    /// A note entry holds a value outside 1-9.
    #[display("note digit {value} out of range")]
    NoteDigitOutOfRange {
        /// The offending value.
        value: u8,
    },
    /// A note entry targets a cell that holds a digit.
    #[display("notes on occupied cell {position}")]
    NotesOnOccupiedCell {
        /// The offending cell.
        position: Position,
    },
    /// The stored selection is off the board.
    #[display("selection ({row}, {col}) out of range")]
    SelectionOutOfRange {
        /// Stored row.
        row: u8,
        /// Stored column.
        col: u8,
    },
    /// The stored hint count exceeds the difficulty's allowance.
    #[display("{hints_used} hints used exceeds the allowance of {allowance}")]
    HintsOverAllowance {
        /// Stored hint count.
        hints_used: u32,
        /// The difficulty's allowance.
        allowance: u32,
    },
}

impl Session {
    /// Captures a snapshot of this session, or `None` once it has
    /// completed.
    ///
    /// Completed sessions are never persisted; hosts should discard any
    /// stored snapshot when the session finishes. Pause state is not
    /// captured.
    #[must_use]
    pub fn snapshot(&self) -> Option<SessionSnapshot> {
        if self.completed {
            return None;
        }
        let mut filled = Grid::new();
        let mut notes = Vec::new();
        for pos in Position::ALL {
            match self.cells[pos.index()] {
                CellState::Filled(digit) => filled.set(pos, Some(digit)),
                CellState::Notes(set) => notes.push(NoteEntry {
                    row: pos.row(),
                    col: pos.col(),
                    digits: set.iter().map(Digit::value).collect(),
                }),
                CellState::Empty | CellState::Given(_) => {}
            }
        }
        Some(SessionSnapshot {
            problem: self.problem.to_string(),
            solution: self.solution.to_string(),
            filled: filled.to_string(),
            notes,
            selected: self.selected.map(|pos| (pos.row(), pos.col())),
            difficulty: self.difficulty,
            elapsed_secs: self.elapsed().as_secs(),
            mistakes: self.mistakes,
            hints_used: self.hints_used,
            notes_mode: self.notes_mode,
            score: self.score.score(),
            streak: self.score.streak(),
        })
    }

    /// Restores a session from a snapshot.
    ///
    /// The clock resumes immediately, rebased by the stored elapsed
    /// seconds; the restored session is never paused. Restored sessions
    /// carry no generation seed.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotError`] when a grid string is malformed, the
    /// solution is invalid, fills overlap givens, notes land on occupied or
    /// out-of-range cells, the selection is out of range, or the hint count
    /// exceeds the difficulty's allowance.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Result<Self, SnapshotError> {
        let problem: Grid = snapshot.problem.parse()?;
        let solution: Grid = snapshot.solution.parse()?;
        let filled: Grid = snapshot.filled.parse()?;

        if !solution.is_valid_solution() {
            return Err(SnapshotError::InvalidSolution);
        }
        let allowance = snapshot.difficulty.hint_allowance();
        if snapshot.hints_used > allowance {
            return Err(SnapshotError::HintsOverAllowance {
                hints_used: snapshot.hints_used,
                allowance,
            });
        }

        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                if solution.get(pos) != Some(digit) {
                    return Err(SnapshotError::ProblemConflictsWithSolution { position: pos });
                }
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        for pos in Position::ALL {
            if let Some(digit) = filled.get(pos) {
                if problem.get(pos).is_some() {
                    return Err(SnapshotError::FilledOverGiven { position: pos });
                }
                cells[pos.index()] = CellState::Filled(digit);
            }
        }
        for entry in &snapshot.notes {
            if entry.row >= 9 || entry.col >= 9 {
                return Err(SnapshotError::NotePositionOutOfRange {
                    row: entry.row,
                    col: entry.col,
                });
            }
            let pos = Position::new(entry.row, entry.col);
            if !cells[pos.index()].is_vacant() {
                return Err(SnapshotError::NotesOnOccupiedCell { position: pos });
            }
            let mut set = DigitSet::EMPTY;
            for &value in &entry.digits {
                let digit = Digit::new(value)
                    .ok_or(SnapshotError::NoteDigitOutOfRange { value })?;
                set.insert(digit);
            }
            if !set.is_empty() {
                cells[pos.index()] = CellState::Notes(set);
            }
        }
        let selected = match snapshot.selected {
            Some((row, col)) if row >= 9 || col >= 9 => {
                return Err(SnapshotError::SelectionOutOfRange { row, col });
            }
            Some((row, col)) => Some(Position::new(row, col)),
            None => None,
        };

        let mut session = Self {
            cells,
            problem,
            solution,
            difficulty: snapshot.difficulty,
            seed: None,
            selected,
            notes_mode: snapshot.notes_mode,
            score: ScoreTracker::restore(
                snapshot.difficulty.base_points(),
                snapshot.score,
                snapshot.streak,
            ),
            mistakes: snapshot.mistakes,
            hints_used: snapshot.hints_used,
            accumulated: Duration::from_secs(snapshot.elapsed_secs),
            started_at: Some(Instant::now()),
            paused: false,
            completed: false,
            generation: 0,
            flash: None,
        };
        // Valid snapshots are never of completed sessions, but a full grid
        // in a hand-edited one should still land in the terminal state.
        session.check_completion();
        debug!(
            "restored {} session: {} filled, {}s elapsed",
            session.difficulty,
            filled.filled_count(),
            snapshot.elapsed_secs
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use scoredoku_core::Difficulty;
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
            difficulty: Difficulty::Medium,
            seed: PuzzleSeed::from_bytes([9; 32]),
        })
    }

    fn played_session() -> Session {
        let holes = [
            Position::new(0, 0),
            Position::new(1, 3),
            Position::new(4, 4),
            Position::new(8, 8),
        ];
        let mut session = session_with_holes(&holes);
        let solution: Grid = SOLVED.parse().unwrap();

        session.select(holes[0]);
        assert!(matches!(
            session.place_digit(solution.get(holes[0]).unwrap()),
            PlaceOutcome::Correct { .. }
        ));
        session.select(holes[1]);
        session.toggle_notes_mode();
        session.place_digit(Digit::Five);
        session.place_digit(Digit::Nine);
        session
    }

    #[test]
    fn round_trip_preserves_play_state() {
        let session = played_session();
        let snapshot = session.snapshot().unwrap();

        // Sets become explicit digit lists.
        assert_eq!(
            snapshot.notes,
            [NoteEntry {
                row: 1,
                col: 3,
                digits: vec![5, 9]
            }]
        );
        assert_eq!(snapshot.selected, Some((1, 3)));
        assert_eq!(snapshot.score, 20);
        assert_eq!(snapshot.streak, 1);
        assert!(snapshot.notes_mode);

        let restored = Session::from_snapshot(&snapshot).unwrap();
        for pos in Position::ALL {
            assert_eq!(restored.cell(pos), session.cell(pos), "cell {pos}");
        }
        assert_eq!(restored.selected(), session.selected());
        assert_eq!(restored.difficulty(), Difficulty::Medium);
        assert_eq!(restored.score(), 20);
        assert_eq!(restored.streak(), 1);
        assert_eq!(restored.mistakes(), 0);
        assert_eq!(restored.hints_used(), 0);
        assert!(restored.notes_mode());
        assert_eq!(restored.seed(), None);
    }

    #[test]
    fn snapshot_survives_json() {
        let session = played_session();
        let snapshot = session.snapshot().unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn restore_is_never_paused_and_rebases_the_clock() {
        let mut session = played_session();
        session.toggle_pause();
        let snapshot = session.snapshot().unwrap();

        let restored = Session::from_snapshot(&snapshot).unwrap();
        assert!(!restored.is_paused());
        assert!(restored.elapsed() >= Duration::from_secs(snapshot.elapsed_secs));
        assert!(restored.elapsed() < Duration::from_secs(snapshot.elapsed_secs + 2));
    }

    #[test]
    fn completed_sessions_are_not_snapshotted() {
        let pos = Position::new(0, 0);
        let mut session = session_with_holes(&[pos]);
        session.select(pos);
        session.place_digit(Digit::One);
        assert!(session.is_completed());
        assert!(session.snapshot().is_none());
    }

    #[test]
    fn corrupt_grids_are_rejected() {
        let mut snapshot = played_session().snapshot().unwrap();
        snapshot.filled = "not a grid".into();
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::Grid(_))
        ));

        let mut snapshot = played_session().snapshot().unwrap();
        snapshot.solution = ".".repeat(81);
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::InvalidSolution)
        ));
    }

    #[test]
    fn fill_over_given_is_rejected() {
        let mut snapshot = played_session().snapshot().unwrap();
        // (8, 0) is a given; claim the player filled it too.
        let mut filled: Grid = snapshot.filled.parse().unwrap();
        filled.set(Position::new(8, 0), Digit::new(9));
        snapshot.filled = filled.to_string();
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::FilledOverGiven { position }) if position == Position::new(8, 0)
        ));
    }

    #[test]
    fn bad_notes_are_rejected() {
        let mut snapshot = played_session().snapshot().unwrap();
        snapshot.notes.push(NoteEntry {
            row: 9,
            col: 0,
            digits: vec![1],
        });
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::NotePositionOutOfRange { row: 9, col: 0 })
        ));

        let mut snapshot = played_session().snapshot().unwrap();
        snapshot.notes[0].digits.push(12);
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::NoteDigitOutOfRange { value: 12 })
        ));

        let mut snapshot = played_session().snapshot().unwrap();
        // (0, 0) was filled by the player.
        snapshot.notes.push(NoteEntry {
            row: 0,
            col: 0,
            digits: vec![3],
        });
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::NotesOnOccupiedCell { .. })
        ));
    }

    #[test]
    fn excess_hints_are_rejected() {
        let mut snapshot = played_session().snapshot().unwrap();
        snapshot.hints_used = Difficulty::Medium.hint_allowance() + 1;
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::HintsOverAllowance { allowance: 4, .. })
        ));
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut snapshot = played_session().snapshot().unwrap();
        snapshot.selected = Some((0, 9));
        assert!(matches!(
            Session::from_snapshot(&snapshot),
            Err(SnapshotError::SelectionOutOfRange { row: 0, col: 9 })
        ));
    }

    #[test]
    fn full_grid_snapshot_restores_as_completed() {
        // Hand-edited snapshot with every cell filled lands terminal.
        let pos = Position::new(0, 0);
        let session = session_with_holes(&[pos]);
        let mut snapshot = session.snapshot().unwrap();
        let mut filled: Grid = snapshot.filled.parse().unwrap();
        filled.set(pos, Digit::new(1));
        snapshot.filled = filled.to_string();

        let restored = Session::from_snapshot(&snapshot).unwrap();
        assert!(restored.is_completed());
        assert!(restored.snapshot().is_none());
    }
}
