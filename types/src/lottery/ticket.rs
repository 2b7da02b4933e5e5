use thiserror::Error as ThisError;

use super::{Bracket, TICKET_NUMBER_MAX, TICKET_NUMBER_MIN};

/// Opaque ticket identifier assigned by the surrounding application.
pub type TicketId = u64;

/// A ticket or winning number outside the playable range.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
#[error("number out of range (got={number}, valid={TICKET_NUMBER_MIN}..={TICKET_NUMBER_MAX})")]
pub struct NumberOutOfRange {
    pub number: u32,
}

/// A validated 6-digit ticket number.
///
/// Immutable once issued. The winning number drawn for a round has the same
/// shape and uses the same type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TicketNumber(u32);

impl TicketNumber {
    pub fn new(number: u32) -> Result<Self, NumberOutOfRange> {
        if number < TICKET_NUMBER_MIN || number > TICKET_NUMBER_MAX {
            return Err(NumberOutOfRange { number });
        }
        Ok(Self(number))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// The trailing digits covered by `bracket`.
    pub const fn suffix(self, bracket: Bracket) -> u32 {
        self.0 % bracket.modulus()
    }

    /// Bracket-encoded suffix.
    ///
    /// Two numbers encode equally at a bracket exactly when the trailing
    /// digits covered by that bracket are equal.
    pub const fn encoded(self, bracket: Bracket) -> u32 {
        bracket.offset() + self.suffix(bracket)
    }
}

impl TryFrom<u32> for TicketNumber {
    type Error = NumberOutOfRange;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
