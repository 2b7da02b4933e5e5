pub mod lottery;

pub use lottery::{
    Bracket, NumberOutOfRange, RewardsBreakdown, RoundSettlement, TicketId, TicketNumber,
};
