//! Bracket classification for individual tickets.
//!
//! A ticket wins the bracket covering its longest run of trailing digits
//! equal to the winning number's. The scan walks brackets from the least
//! significant digit upward and stops at the first broken match, so a ticket
//! cannot skip a digit position.

use sixline_types::lottery::{Bracket, TicketId, TicketNumber};

/// Highest bracket at which `ticket` matches `winning`.
///
/// Returns `None` when even the last digit differs; the ticket then
/// contributes to no bracket and is owed nothing.
pub fn highest_bracket(ticket: TicketNumber, winning: TicketNumber) -> Option<Bracket> {
    let mut best = None;
    for bracket in Bracket::ALL {
        if ticket.encoded(bracket) != winning.encoded(bracket) {
            break;
        }
        best = Some(bracket);
    }
    best
}

/// Classify every sold ticket of a round, omitting tickets that match
/// nothing. Input order is preserved.
pub fn classify_all(
    tickets: &[(TicketId, TicketNumber)],
    winning: TicketNumber,
) -> Vec<(TicketId, Bracket)> {
    tickets
        .iter()
        .filter_map(|&(id, number)| highest_bracket(number, winning).map(|bracket| (id, bracket)))
        .collect()
}
