//! The interactive play-session state machine.

use std::time::{Duration, Instant};

use log::{debug, info};
use scoredoku_core::{Difficulty, Digit, Grid, Position};
use scoredoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

use crate::{CellState, ScoreTracker};

/// How long hosts should display the correct-placement flash.
pub const CORRECT_FLASH: Duration = Duration::from_millis(300);

/// How long hosts should display the mistake flash.
pub const MISTAKE_FLASH: Duration = Duration::from_millis(400);

/// Kind of transient cell flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    /// A correct placement or a revealed hint.
    Correct,
    /// A placement that disagreed with the solution.
    Mistake,
}

impl FlashKind {
    /// Nominal display duration for this flash kind.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Correct => CORRECT_FLASH,
            Self::Mistake => MISTAKE_FLASH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Flash {
    pub(crate) position: Position,
    pub(crate) kind: FlashKind,
}

/// Handle for clearing a transient flash after its display window.
///
/// The engine never sleeps; a flash-producing operation returns a ticket,
/// the host schedules the delay ([`FlashKind::duration`]) and then calls
/// [`Session::clear_flash`]. Tickets are keyed to the session generation, so
/// a timer that fires after a restart is ignored instead of touching the new
/// board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashTicket {
    generation: u64,
    position: Position,
    kind: FlashKind,
}

impl FlashTicket {
    /// The flashed cell.
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// The flash kind, which determines the display duration.
    #[must_use]
    pub const fn kind(self) -> FlashKind {
        self.kind
    }
}

/// Result of [`Session::place_digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlaceOutcome {
    /// The input was silently ignored (paused, completed, no selection, or
    /// the selected cell is given).
    Ignored,
    /// Notes mode was active; the digit was toggled in the pencil marks.
    NoteToggled {
        /// The toggled digit.
        digit: Digit,
        /// `true` when the digit was added, `false` when removed.
        added: bool,
    },
    /// The digit matched the solution.
    Correct {
        /// Points awarded (base points times the new streak).
        awarded: u64,
        /// Ticket for clearing the celebration flash.
        flash: FlashTicket,
    },
    /// The digit disagreed with the solution.
    Mistake {
        /// Points actually deducted (capped at the previous score).
        deducted: u64,
        /// Ticket for clearing the error flash.
        flash: FlashTicket,
    },
}

/// Result of [`Session::use_hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum HintOutcome {
    /// No hint was spent (paused, completed, allowance exhausted, or no
    /// vacant cell remains).
    Ignored,
    /// The solution digit was written into a cell.
    Revealed {
        /// The revealed cell.
        position: Position,
        /// The digit written there.
        digit: Digit,
        /// Ticket for clearing the reveal flash.
        flash: FlashTicket,
    },
}

/// Final results of a completed session, ready for score submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Final score.
    pub score: u64,
    /// Difficulty the session was played at.
    pub difficulty: Difficulty,
    /// Total active play time in whole seconds (paused time excluded).
    pub elapsed_secs: u64,
    /// Number of mistakes made.
    pub mistakes: u32,
    /// Number of hints spent.
    pub hints_used: u32,
    /// The original problem grid in its 81-character form.
    pub puzzle: String,
}

/// One interactive Sudoku play session.
///
/// Owns the working grid, selection, notes mode, score, streak, mistakes,
/// hints, and the pause-aware clock. All player-facing operations follow a
/// silent no-op policy: invalid inputs (editing a given cell, placing with
/// no selection, hinting past the allowance) change nothing and are reported
/// through outcome enums, never as errors.
///
/// # Examples
///
/// ```
/// use scoredoku_core::Difficulty;
/// use scoredoku_generator::PuzzleSeed;
/// use scoredoku_session::Session;
///
/// let session = Session::with_seed(PuzzleSeed::from_phrase("docs"), Difficulty::Easy);
/// assert_eq!(session.score(), 0);
/// assert_eq!(session.mistakes(), 0);
/// assert!(!session.is_completed());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) cells: [CellState; 81],
    pub(crate) problem: Grid,
    pub(crate) solution: Grid,
    pub(crate) difficulty: Difficulty,
    pub(crate) seed: Option<PuzzleSeed>,
    pub(crate) selected: Option<Position>,
    pub(crate) notes_mode: bool,
    pub(crate) score: ScoreTracker,
    pub(crate) mistakes: u32,
    pub(crate) hints_used: u32,
    pub(crate) accumulated: Duration,
    pub(crate) started_at: Option<Instant>,
    pub(crate) paused: bool,
    pub(crate) completed: bool,
    pub(crate) generation: u64,
    pub(crate) flash: Option<Flash>,
}

impl Session {
    /// Starts a session on a freshly generated puzzle.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_puzzle(PuzzleGenerator::new().generate(difficulty))
    }

    /// Starts a session on the puzzle determined by `seed` and `difficulty`.
    #[must_use]
    pub fn with_seed(seed: PuzzleSeed, difficulty: Difficulty) -> Self {
        Self::from_puzzle(PuzzleGenerator::new().generate_with_seed(seed, difficulty))
    }

    /// Starts a session on an already generated puzzle.
    #[must_use]
    pub fn from_puzzle(puzzle: GeneratedPuzzle) -> Self {
        Self::from_parts(puzzle, 0)
    }

    fn from_parts(puzzle: GeneratedPuzzle, generation: u64) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            problem,
            solution,
            difficulty,
            seed: Some(seed),
            selected: None,
            notes_mode: false,
            score: ScoreTracker::new(difficulty.base_points()),
            mistakes: 0,
            hints_used: 0,
            accumulated: Duration::ZERO,
            started_at: Some(Instant::now()),
            paused: false,
            completed: false,
            generation,
            flash: None,
        }
    }

    /// The difficulty this session is played at.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The seed the board was generated from, when known.
    ///
    /// Sessions restored from a snapshot carry no seed.
    #[must_use]
    pub const fn seed(&self) -> Option<PuzzleSeed> {
        self.seed
    }

    /// The original problem grid (givens only).
    #[must_use]
    pub const fn problem(&self) -> &Grid {
        &self.problem
    }

    /// State of the working-grid cell at `pos`.
    #[must_use]
    pub const fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// The currently selected cell, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Whether digit input currently toggles pencil marks.
    #[must_use]
    pub const fn notes_mode(&self) -> bool {
        self.notes_mode
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score.score()
    }

    /// Consecutive correct placements since the last mistake.
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.score.streak()
    }

    /// Number of mistakes made so far.
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Number of hints spent so far.
    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Whether the session is paused.
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the board is full and the session has ended.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Selects `pos`, or deselects when `pos` is already selected.
    ///
    /// Selecting a given cell is allowed; only edits are rejected there.
    /// No-op while paused or completed.
    pub fn select(&mut self, pos: Position) {
        if self.completed || self.paused {
            return;
        }
        self.selected = if self.selected == Some(pos) {
            None
        } else {
            Some(pos)
        };
    }

    /// Places `digit` in the selected cell, or toggles it as a pencil mark
    /// when notes mode is active.
    ///
    /// A normal-mode placement always writes the digit and compares it to
    /// the solution: a match extends the streak and awards points, a
    /// mismatch counts a mistake and deducts points (floored at zero).
    /// Either way the cell's notes are cleared and completion is
    /// re-evaluated.
    pub fn place_digit(&mut self, digit: Digit) -> PlaceOutcome {
        if self.completed || self.paused {
            return PlaceOutcome::Ignored;
        }
        let Some(pos) = self.selected else {
            return PlaceOutcome::Ignored;
        };
        let cell = self.cells[pos.index()];

        if self.notes_mode {
            if !cell.is_vacant() {
                return PlaceOutcome::Ignored;
            }
            let mut notes = cell.notes();
            let added = notes.toggle(digit);
            self.cells[pos.index()] = if notes.is_empty() {
                CellState::Empty
            } else {
                CellState::Notes(notes)
            };
            return PlaceOutcome::NoteToggled { digit, added };
        }

        if cell.is_given() {
            return PlaceOutcome::Ignored;
        }
        self.cells[pos.index()] = CellState::Filled(digit);
        let outcome = if self.solution.get(pos) == Some(digit) {
            let awarded = self.score.record_correct();
            debug!("correct {digit} at {pos}: +{awarded} (streak {})", self.streak());
            PlaceOutcome::Correct {
                awarded,
                flash: self.set_flash(pos, FlashKind::Correct),
            }
        } else {
            self.mistakes += 1;
            let deducted = self.score.record_mistake();
            debug!("mistake {digit} at {pos}: -{deducted} ({} mistakes)", self.mistakes);
            PlaceOutcome::Mistake {
                deducted,
                flash: self.set_flash(pos, FlashKind::Mistake),
            }
        };
        self.check_completion();
        outcome
    }

    /// Clears the selected cell's digit and notes.
    ///
    /// Returns `true` when something was erased. Score, streak, and
    /// mistakes are unaffected. No-op on given cells, with no selection, or
    /// while paused or completed.
    pub fn erase(&mut self) -> bool {
        if self.completed || self.paused {
            return false;
        }
        let Some(pos) = self.selected else {
            return false;
        };
        match self.cells[pos.index()] {
            CellState::Filled(_) | CellState::Notes(_) => {
                self.cells[pos.index()] = CellState::Empty;
                true
            }
            CellState::Empty | CellState::Given(_) => false,
        }
    }

    /// Flips notes mode. Existing values and notes are untouched.
    pub fn toggle_notes_mode(&mut self) {
        if self.completed || self.paused {
            return;
        }
        self.notes_mode = !self.notes_mode;
    }

    /// Reveals the solution digit in one vacant cell.
    ///
    /// The target is the selected cell when it is vacant, otherwise the
    /// first vacant cell in row-major order. Spends one hint from the
    /// difficulty's allowance; score and streak are unaffected. Ignored
    /// once the allowance is exhausted.
    pub fn use_hint(&mut self) -> HintOutcome {
        if self.completed || self.paused {
            return HintOutcome::Ignored;
        }
        if self.hints_used >= self.difficulty.hint_allowance() {
            return HintOutcome::Ignored;
        }
        let target = self
            .selected
            .filter(|pos| self.cells[pos.index()].is_vacant())
            .or_else(|| {
                Position::ALL
                    .into_iter()
                    .find(|pos| self.cells[pos.index()].is_vacant())
            });
        let Some(pos) = target else {
            return HintOutcome::Ignored;
        };
        let Some(digit) = self.solution.get(pos) else {
            // The solution grid is always complete.
            return HintOutcome::Ignored;
        };
        self.cells[pos.index()] = CellState::Filled(digit);
        self.hints_used += 1;
        debug!(
            "hint revealed {digit} at {pos} ({}/{} used)",
            self.hints_used,
            self.difficulty.hint_allowance()
        );
        let flash = self.set_flash(pos, FlashKind::Correct);
        self.check_completion();
        HintOutcome::Revealed {
            position: pos,
            digit,
            flash,
        }
    }

    /// Pauses the clock, or resumes it when already paused.
    ///
    /// Pausing folds the running segment into the accumulated time;
    /// resuming rebases the clock from now, so wall time spent paused never
    /// shows up in [`elapsed`](Self::elapsed). No-op once completed.
    pub fn toggle_pause(&mut self) {
        if self.completed {
            return;
        }
        if self.paused {
            self.started_at = Some(Instant::now());
            self.paused = false;
        } else {
            if let Some(started) = self.started_at.take() {
                self.accumulated += started.elapsed();
            }
            self.paused = true;
        }
    }

    /// Discards the board and starts over on a fresh puzzle at the same
    /// difficulty.
    ///
    /// The new board comes from a new random seed. All counters, the clock,
    /// the selection, and notes mode are reset. The session generation is
    /// bumped, so flash tickets issued before the restart become inert.
    pub fn restart(&mut self) {
        let puzzle = PuzzleGenerator::new().generate(self.difficulty);
        let generation = self.generation + 1;
        debug!("restarting session at {} (generation {generation})", self.difficulty);
        *self = Self::from_parts(puzzle, generation);
    }

    /// Clears the flash named by `ticket`, returning `true` when it was
    /// still live.
    ///
    /// Tickets from an earlier generation, or ones no longer matching the
    /// current flash (the player acted again in the meantime), are ignored.
    pub fn clear_flash(&mut self, ticket: FlashTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match self.flash {
            Some(flash) if flash.position == ticket.position && flash.kind == ticket.kind => {
                self.flash = None;
                true
            }
            _ => false,
        }
    }

    /// Total active play time, excluding paused intervals.
    ///
    /// Derived from the wall clock on every call rather than ticked, so
    /// missed refreshes never accumulate drift.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started) => self.accumulated + started.elapsed(),
            None => self.accumulated,
        }
    }

    /// Elapsed time formatted as `M:SS`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{}:{:02}", secs / 60, secs % 60)
    }

    /// How many cells currently show each digit, indexed by
    /// [`Digit::index`].
    ///
    /// Hosts use this to gray out digits that already appear nine times.
    #[must_use]
    pub fn digit_counts(&self) -> [usize; 9] {
        let mut counts = [0; 9];
        for cell in &self.cells {
            if let Some(digit) = cell.digit() {
                counts[digit.index()] += 1;
            }
        }
        counts
    }

    /// The working grid's shown digits (givens and fills) as a plain
    /// [`Grid`].
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cells[pos.index()].digit());
        }
        grid
    }

    /// Final results, available once the session has completed.
    #[must_use]
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.completed.then(|| SessionOutcome {
            score: self.score.score(),
            difficulty: self.difficulty,
            elapsed_secs: self.accumulated.as_secs(),
            mistakes: self.mistakes,
            hints_used: self.hints_used,
            puzzle: self.problem.to_string(),
        })
    }

    fn set_flash(&mut self, position: Position, kind: FlashKind) -> FlashTicket {
        self.flash = Some(Flash { position, kind });
        FlashTicket {
            generation: self.generation,
            position,
            kind,
        }
    }

    /// Completion is defined as a full board, not a correct one: wrong
    /// digits were already penalized when they were written.
    pub(crate) fn check_completion(&mut self) {
        if self.completed || !self.cells.iter().all(|cell| cell.digit().is_some()) {
            return;
        }
        self.completed = true;
        if let Some(started) = self.started_at.take() {
            self.accumulated += started.elapsed();
        }
        info!(
            "session completed: {} points, {} mistakes, {} hints, {}",
            self.score.score(),
            self.mistakes,
            self.hints_used,
            self.elapsed_display()
        );
    }
}
