//! Deterministic generation seeds.

use std::fmt::{self, Display};
use std::str::FromStr;

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that fully determines a generated puzzle.
///
/// The same seed and difficulty always reproduce the identical board, which
/// makes puzzles shareable and tests deterministic. The textual form is 64
/// lowercase hexadecimal characters.
///
/// # Examples
///
/// ```
/// use scoredoku_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("daily 2024-06-01");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>().unwrap(), seed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from fresh OS entropy.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives the seed for a phrase by hashing it with SHA-256.
    ///
    /// Useful for human-memorable puzzle identifiers ("daily 2024-06-01").
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a seed from its hexadecimal form fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("seed must be exactly 64 hexadecimal characters")]
pub struct ParseSeedError;

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError);
        }
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).map_err(|_| ParseSeedError)?;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips() {
        let seed = PuzzleSeed::from_bytes([0xab; 32]);
        let text = seed.to_string();
        assert_eq!(text, "ab".repeat(32));
        assert_eq!(text.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn phrase_seeds_are_stable_and_distinct() {
        let a = PuzzleSeed::from_phrase("daily 2024-06-01");
        let b = PuzzleSeed::from_phrase("daily 2024-06-01");
        let c = PuzzleSeed::from_phrase("daily 2024-06-02");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert_eq!("".parse::<PuzzleSeed>(), Err(ParseSeedError));
        assert_eq!("ab".parse::<PuzzleSeed>(), Err(ParseSeedError));
        // Correct length, bad character.
        let bad = format!("g{}", "a".repeat(63));
        assert_eq!(bad.parse::<PuzzleSeed>(), Err(ParseSeedError));
        // Signs are not hex digits even though from_str_radix takes them.
        let signed = format!("+1{}", "a".repeat(62));
        assert_eq!(signed.parse::<PuzzleSeed>(), Err(ParseSeedError));
    }

    #[test]
    fn random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
