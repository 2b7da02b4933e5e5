use thiserror::Error as ThisError;

use super::{BRACKET_COUNT, BRACKET_OFFSETS};

/// A bracket index outside 0..=5.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
#[error("invalid bracket index (got={}, max={})", .index, BRACKET_COUNT - 1)]
pub struct InvalidBracket {
    pub index: u8,
}

/// Prize brackets, ordered by the number of matched trailing digits.
///
/// `Match1` pays for matching the last digit only; `Match6` is a full match.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bracket {
    Match1 = 0,
    Match2 = 1,
    Match3 = 2,
    Match4 = 3,
    Match5 = 4,
    Match6 = 5,
}

impl TryFrom<u8> for Bracket {
    type Error = InvalidBracket;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bracket::Match1),
            1 => Ok(Bracket::Match2),
            2 => Ok(Bracket::Match3),
            3 => Ok(Bracket::Match4),
            4 => Ok(Bracket::Match5),
            5 => Ok(Bracket::Match6),
            index => Err(InvalidBracket { index }),
        }
    }
}

impl Bracket {
    /// All brackets in significance-ascending order (fewest matched digits
    /// first).
    pub const ALL: [Bracket; BRACKET_COUNT] = [
        Bracket::Match1,
        Bracket::Match2,
        Bracket::Match3,
        Bracket::Match4,
        Bracket::Match5,
        Bracket::Match6,
    ];

    /// Zero-based index into bracket-keyed tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Number of trailing digits this bracket covers.
    pub const fn digits(self) -> u32 {
        self as u32 + 1
    }

    /// Repunit sentinel added to this bracket's suffix when encoding.
    pub const fn offset(self) -> u32 {
        BRACKET_OFFSETS[self as usize]
    }

    /// Modulus that extracts this bracket's suffix (`10^digits`).
    pub const fn modulus(self) -> u32 {
        10u32.pow(self.digits())
    }

    /// The bracket covering one more trailing digit, if any.
    pub const fn next(self) -> Option<Bracket> {
        match self {
            Bracket::Match1 => Some(Bracket::Match2),
            Bracket::Match2 => Some(Bracket::Match3),
            Bracket::Match3 => Some(Bracket::Match4),
            Bracket::Match4 => Some(Bracket::Match5),
            Bracket::Match5 => Some(Bracket::Match6),
            Bracket::Match6 => None,
        }
    }
}
