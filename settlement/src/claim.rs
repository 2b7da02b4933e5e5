//! Claim verification against a settled round.
//!
//! Claimants assert the bracket they believe each ticket won; the settled
//! payout table is the source of truth for amounts. Verification only checks
//! that the asserted bracket is exactly the ticket's highest match; it
//! never re-derives payouts.

use thiserror::Error;

use sixline_types::lottery::{Bracket, RoundSettlement, TicketId, TicketNumber};

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    /// The ticket's trailing digits do not match the winning number at the
    /// asserted bracket.
    #[error("ticket {ticket} did not win bracket {bracket:?}")]
    BracketNotWon { ticket: u32, bracket: Bracket },
    /// The ticket also matches at a longer suffix; a ticket pays out only at
    /// its highest bracket, so the claim must assert that one.
    #[error("ticket {ticket} won a bracket above {bracket:?}")]
    HigherBracketWon { ticket: u32, bracket: Bracket },
}

/// Verify one claim and return the payout owed to the ticket.
///
/// A zero payout is a valid outcome: the bracket won but the policy
/// allocated nothing to it.
pub fn verify_claim(
    ticket: TicketNumber,
    winning: TicketNumber,
    asserted: Bracket,
    settlement: &RoundSettlement,
) -> Result<u64, ClaimError> {
    if ticket.encoded(asserted) != winning.encoded(asserted) {
        return Err(ClaimError::BracketNotWon {
            ticket: ticket.get(),
            bracket: asserted,
        });
    }
    if let Some(higher) = asserted.next() {
        if ticket.encoded(higher) == winning.encoded(higher) {
            return Err(ClaimError::HigherBracketWon {
                ticket: ticket.get(),
                bracket: asserted,
            });
        }
    }
    Ok(settlement.payout(asserted))
}

/// Verify a batch of claims, failing fast on the first bad one.
///
/// Returns the payout owed per ticket, in input order. Marking tickets as
/// claimed and transferring funds remain the caller's concern.
pub fn settle_claims(
    claims: &[(TicketId, TicketNumber, Bracket)],
    winning: TicketNumber,
    settlement: &RoundSettlement,
) -> Result<Vec<(TicketId, u64)>, ClaimError> {
    let mut payouts = Vec::with_capacity(claims.len());
    for &(id, ticket, asserted) in claims {
        let payout = verify_claim(ticket, winning, asserted, settlement)?;
        payouts.push((id, payout));
    }
    Ok(payouts)
}
