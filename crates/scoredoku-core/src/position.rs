//! Board position types.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board, addressed by row and column (0-8 each).
///
/// Positions order row-major: all of row 0 left to right, then row 1, and so
/// on. [`Position::ALL`] and [`Position::index`] follow that order, and every
/// scan in the engine that cares about order (generation, hint targeting)
/// relies on it.
///
/// # Examples
///
/// ```
/// use scoredoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 4 * 9 + 7);
/// assert_eq!(pos.to_string(), "R5C8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater. Out-of-range coordinates are
    /// programmer errors, not runtime conditions.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoredoku_core::Position;
    ///
    /// let pos = Position::new(0, 8);
    /// assert_eq!(pos.col(), 8);
    /// ```
    ///
    /// ```should_panic
    /// use scoredoku_core::Position;
    ///
    /// let _ = Position::new(9, 0);
    /// ```
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Creates a position from a row-major cell index (0-80).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 81, "cell index out of range");
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3×3 box containing this position (0-8,
    /// left to right, top to bottom).
    ///
    /// # Examples
    ///
    /// ```
    /// use scoredoku_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_index(), 0);
    /// assert_eq!(Position::new(4, 4).box_index(), 4);
    /// assert_eq!(Position::new(8, 8).box_index(), 8);
    /// ```
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns `true` when `other` is a distinct cell sharing this cell's
    /// row, column, or box.
    ///
    /// This is the Sudoku adjacency relation: two cells see each other
    /// exactly when they are forbidden from holding the same digit. A cell
    /// never sees itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoredoku_core::Position;
    ///
    /// let pos = Position::new(4, 4);
    /// assert!(pos.sees(Position::new(4, 0))); // same row
    /// assert!(pos.sees(Position::new(0, 4))); // same column
    /// assert!(pos.sees(Position::new(3, 3))); // same box
    /// assert!(!pos.sees(pos));
    /// assert!(!pos.sees(Position::new(0, 0)));
    /// ```
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || self.box_index() == other.box_index()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}
