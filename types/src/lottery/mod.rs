//! Lottery domain types.
//!
//! Defines ticket/bracket/rewards/settlement state and constants used by the
//! settlement engine and clients.

mod bracket;
mod constants;
mod rewards;
mod round;
mod ticket;

pub use bracket::*;
pub use constants::*;
pub use rewards::*;
pub use round::*;
pub use ticket::*;
