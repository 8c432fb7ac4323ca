//! Idea Components
//!
//! Fixed-length binary ideas and the Hamming metric between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::{LandscapeError, Result};

/// Longest idea that fits in the packed representation
pub const MAX_IDEA_LEN: usize = 64;

/// An immutable binary vector of fixed length.
///
/// Digits are packed into a `u64`; position 0 is the most significant digit,
/// so ordering by `(len, bits)` matches lexicographic order of the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Idea {
    len: u8,
    bits: u64,
}

fn mask(len: usize) -> u64 {
    if len >= MAX_IDEA_LEN {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

impl Idea {
    /// Builds an idea of `len` digits from the low `len` bits of `bits`.
    pub(crate) fn from_bits(bits: u64, len: usize) -> Self {
        debug_assert!(len > 0 && len <= MAX_IDEA_LEN);
        Self {
            len: len as u8,
            bits: bits & mask(len),
        }
    }

    /// Builds an idea from a digit slice. Every digit must be 0 or 1.
    pub fn from_digits(digits: &[u8]) -> std::result::Result<Self, ParseIdeaError> {
        if digits.is_empty() {
            return Err(ParseIdeaError::Empty);
        }
        if digits.len() > MAX_IDEA_LEN {
            return Err(ParseIdeaError::TooLong(digits.len()));
        }
        let mut bits = 0u64;
        for &d in digits {
            let d = match d {
                0 | 1 => d as u64,
                other => {
                    let c = char::from_digit(u32::from(other), 36).unwrap_or('?');
                    return Err(ParseIdeaError::InvalidDigit(c));
                }
            };
            bits = (bits << 1) | d;
        }
        Ok(Self::from_bits(bits, digits.len()))
    }

    /// Number of digits
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Ideas always hold at least one digit
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed digits, position 0 in the highest used bit
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Digit at `position` (0 or 1)
    pub fn digit(&self, position: usize) -> u8 {
        assert!(position < self.len(), "digit position {} out of range", position);
        ((self.bits >> (self.len() - 1 - position)) & 1) as u8
    }

    /// Copy of this idea with the digit at `position` complemented
    pub fn flipped(&self, position: usize) -> Self {
        assert!(position < self.len(), "digit position {} out of range", position);
        Self {
            len: self.len,
            bits: self.bits ^ (1u64 << (self.len() - 1 - position)),
        }
    }

    /// All digits in order
    pub fn digits(&self) -> Vec<u8> {
        (0..self.len()).map(|i| self.digit(i)).collect()
    }
}

/// Counts the positions at which `a` and `b` differ.
pub fn hamming_distance(a: &Idea, b: &Idea) -> Result<u32> {
    if a.len() != b.len() {
        return Err(LandscapeError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok((a.bits ^ b.bits).count_ones())
}

impl fmt::Display for Idea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.len() {
            write!(f, "{}", self.digit(i))?;
        }
        Ok(())
    }
}

/// Error parsing an idea from text or digits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIdeaError {
    #[error("idea must contain at least one digit")]
    Empty,
    #[error("idea of {0} digits exceeds the maximum of 64")]
    TooLong(usize),
    #[error("invalid digit '{0}', expected 0 or 1")]
    InvalidDigit(char),
}

impl FromStr for Idea {
    type Err = ParseIdeaError;

    /// Parses an idea from a string like "0101".
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(0u8),
                '1' => Ok(1u8),
                other => Err(ParseIdeaError::InvalidDigit(other)),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::from_digits(&digits)
    }
}

impl From<Idea> for String {
    fn from(idea: Idea) -> Self {
        idea.to_string()
    }
}

impl TryFrom<String> for Idea {
    type Error = ParseIdeaError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(s: &str) -> Idea {
        s.parse().unwrap()
    }

    #[test]
    fn test_digit_order() {
        let v = idea("1000");
        assert_eq!(v.bits(), 8);
        assert_eq!(v.digit(0), 1);
        assert_eq!(v.digit(3), 0);
        assert_eq!(v.digits(), vec![1, 0, 0, 0]);
        assert_eq!(v.to_string(), "1000");
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let v = Idea::from_bits(1, 5);
        assert_eq!(v.to_string(), "00001");
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_from_bits_masks_excess() {
        assert_eq!(Idea::from_bits(0b1_0110, 4), idea("0110"));
    }

    #[test]
    fn test_flip() {
        let v = idea("0101");
        assert_eq!(v.flipped(0), idea("1101"));
        assert_eq!(v.flipped(3), idea("0100"));
        assert_eq!(v.flipped(2).flipped(2), v);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Idea>(), Err(ParseIdeaError::Empty));
        assert_eq!("0120".parse::<Idea>(), Err(ParseIdeaError::InvalidDigit('2')));
        assert_eq!(Idea::from_digits(&[0, 1, 3]), Err(ParseIdeaError::InvalidDigit('3')));
        let long = "1".repeat(65);
        assert_eq!(long.parse::<Idea>(), Err(ParseIdeaError::TooLong(65)));
    }

    #[test]
    fn test_equal_value_equal_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(idea("0110"));
        assert!(set.contains(&Idea::from_digits(&[0, 1, 1, 0]).unwrap()));
        // same bits, different length
        assert!(!set.contains(&idea("00110")));
    }

    #[test]
    fn test_hamming_identity() {
        for s in ["0", "1", "0101", "1111111"] {
            assert_eq!(hamming_distance(&idea(s), &idea(s)).unwrap(), 0);
        }
    }

    #[test]
    fn test_hamming_symmetric() {
        let pairs = [("0000", "1111"), ("0101", "0110"), ("1100", "0011"), ("1", "0")];
        for (a, b) in pairs {
            assert_eq!(
                hamming_distance(&idea(a), &idea(b)).unwrap(),
                hamming_distance(&idea(b), &idea(a)).unwrap()
            );
        }
        assert_eq!(hamming_distance(&idea("0000"), &idea("1111")).unwrap(), 4);
        assert_eq!(hamming_distance(&idea("0101"), &idea("0110")).unwrap(), 2);
    }

    #[test]
    fn test_hamming_length_mismatch() {
        let err = hamming_distance(&idea("010"), &idea("0101")).unwrap_err();
        assert_eq!(err, LandscapeError::LengthMismatch { left: 3, right: 4 });
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&idea("0011")).unwrap();
        assert_eq!(json, "\"0011\"");
        let back: Idea = serde_json::from_str(&json).unwrap();
        assert_eq!(back, idea("0011"));
        assert!(serde_json::from_str::<Idea>("\"01x\"").is_err());
    }
}
