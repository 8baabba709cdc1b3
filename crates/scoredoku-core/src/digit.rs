//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Represents digits as a closed enum so that invalid values cannot be
/// constructed. Conversions from raw bytes go through [`Digit::new`], which
/// rejects anything outside 1-9.
///
/// # Examples
///
/// ```
/// use scoredoku_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit, Digit::Five);
/// assert_eq!(digit.value(), 5);
/// assert!(Digit::new(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    One = 1,
    /// The digit 2.
    Two = 2,
    /// The digit 3.
    Three = 3,
    /// The digit 4.
    Four = 4,
    /// The digit 5.
    Five = 5,
    /// The digit 6.
    Six = 6,
    /// The digit 7.
    Seven = 7,
    /// The digit 8.
    Eight = 8,
    /// The digit 9.
    Nine = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoredoku_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0], Digit::One);
    /// assert_eq!(Digit::ALL[8], Digit::Nine);
    /// ```
    pub const ALL: [Self; 9] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];

    /// Creates a digit from a numeric value, returning `None` outside 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use scoredoku_core::Digit;
    ///
    /// assert_eq!(Digit::new(1), Some(Digit::One));
    /// assert_eq!(Digit::new(9), Some(Digit::Nine));
    /// assert_eq!(Digit::new(0), None);
    /// assert_eq!(Digit::new(10), None);
    /// ```
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    ///
    /// # Examples
    ///
    /// ```
    /// use scoredoku_core::Digit;
    ///
    /// assert_eq!(Digit::One.value(), 1);
    /// assert_eq!(Digit::Nine.value(), 9);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this digit (0-8).
    ///
    /// Used to address per-digit slots in arrays of length 9.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::new(digit.value()), Some(digit));
        }
        assert_eq!(Digit::new(0), None);
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(255), None);
    }

    #[test]
    fn all_is_ascending_and_complete() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(digit.value() as usize, i + 1);
            assert_eq!(digit.index(), i);
        }
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(Digit::One.to_string(), "1");
        assert_eq!(Digit::Nine.to_string(), "9");

        let value: u8 = Digit::Five.into();
        assert_eq!(value, 5);
    }
}
