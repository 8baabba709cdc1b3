//! The scoredoku play session: an interactive, scored Sudoku game engine.
//!
//! A [`Session`] owns everything one game needs: the working grid of
//! [`CellState`]s layered over an immutable solution, the selection, notes
//! mode, streak-multiplied scoring with mistake penalties, a per-difficulty
//! hint allowance, and a pause-aware clock. Player input follows a silent
//! no-op policy — invalid attempts change nothing and are reported through
//! outcome enums ([`PlaceOutcome`], [`HintOutcome`]), never as errors.
//!
//! Presentation is derived, not stored: [`Session::view`] recomputes
//! highlighting, error marks, conflicts, and flashes on demand. Transient
//! flashes are cleared by the host through generation-checked
//! [`FlashTicket`]s, so a timer that fires after a restart is inert.
//! Uncompleted sessions persist through [`SessionSnapshot`].
//!
//! # Examples
//!
//! ```
//! use scoredoku_core::{Difficulty, Position};
//! use scoredoku_generator::PuzzleSeed;
//! use scoredoku_session::{HintOutcome, Session};
//!
//! let mut session = Session::with_seed(PuzzleSeed::from_phrase("docs"), Difficulty::Easy);
//!
//! // A hint reveals the solution digit in the first vacant cell.
//! let HintOutcome::Revealed { position, digit, .. } = session.use_hint() else {
//!     unreachable!("a fresh easy board has vacant cells and hints");
//! };
//! assert_eq!(session.cell(position).digit(), Some(digit));
//! assert_eq!(session.hints_used(), 1);
//! assert_eq!(session.score(), 0);
//! ```

pub mod cell;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod view;

pub use self::cell::CellState;
pub use self::score::ScoreTracker;
pub use self::session::{
    CORRECT_FLASH, FlashKind, FlashTicket, HintOutcome, MISTAKE_FLASH, PlaceOutcome, Session,
    SessionOutcome,
};
pub use self::snapshot::{NoteEntry, SessionSnapshot, SnapshotError};
pub use self::view::{BoardView, CellFlags, CellView};
