//! Compact digit sets.

use std::fmt::{self, Display};
use std::iter::FusedIterator;

use crate::Digit;

/// A set of sudoku digits backed by a `u16` bitmask.
///
/// Bit `n` holds membership of digit `n + 1`; the top seven bits stay zero.
/// The engine uses digit sets for pencil-mark notes and for house
/// validation, both of which only need cheap membership and iteration.
///
/// # Examples
///
/// ```
/// use scoredoku_core::{Digit, DigitSet};
///
/// let mut notes = DigitSet::EMPTY;
/// notes.insert(Digit::Three);
/// notes.insert(Digit::Seven);
/// assert!(notes.contains(Digit::Three));
/// assert_eq!(notes.len(), 2);
///
/// let digits: Vec<_> = notes.iter().collect();
/// assert_eq!(digits, [Digit::Three, Digit::Seven]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set of all nine digits.
    pub const ALL: Self = Self(0b1_1111_1111);

    /// Returns `true` when `digit` is a member.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << digit.index()) != 0
    }

    /// Adds `digit` to the set. Idempotent.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << digit.index();
    }

    /// Removes `digit` from the set. Idempotent.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << digit.index());
    }

    /// Flips membership of `digit`, returning `true` when the digit was
    /// added and `false` when it was removed.
    pub const fn toggle(&mut self, digit: Digit) -> bool {
        self.0 ^= 1 << digit.index();
        self.contains(digit)
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` when the set has no members.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the members in ascending digit order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        write!(f, "]")
    }
}

/// Ascending iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Digit::new(index + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_toggle() {
        let mut set = DigitSet::EMPTY;
        assert!(set.is_empty());

        set.insert(Digit::Four);
        set.insert(Digit::Four);
        assert_eq!(set.len(), 1);
        assert!(set.contains(Digit::Four));

        assert!(!set.toggle(Digit::Four));
        assert!(set.is_empty());
        assert!(set.toggle(Digit::Nine));
        assert!(set.contains(Digit::Nine));

        set.remove(Digit::Nine);
        set.remove(Digit::Nine);
        assert!(set.is_empty());
    }

    #[test]
    fn iterates_ascending() {
        let set: DigitSet = [Digit::Nine, Digit::One, Digit::Five].into_iter().collect();
        let digits: Vec<_> = set.iter().collect();
        assert_eq!(digits, [Digit::One, Digit::Five, Digit::Nine]);
        assert_eq!(set.iter().len(), 3);
    }

    #[test]
    fn all_contains_every_digit() {
        assert_eq!(DigitSet::ALL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::ALL.contains(digit));
        }
        let collected: DigitSet = Digit::ALL.into_iter().collect();
        assert_eq!(collected, DigitSet::ALL);
    }

    #[test]
    fn display_lists_members() {
        let set: DigitSet = [Digit::One, Digit::Four, Digit::Six, Digit::Nine]
            .into_iter()
            .collect();
        assert_eq!(set.to_string(), "[1469]");
        assert_eq!(DigitSet::EMPTY.to_string(), "[]");
    }
}
