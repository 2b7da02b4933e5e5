//! Round aggregation: winner counts, per-bracket payouts, and rollover.
//!
//! Runs once per round close over the frozen ticket population and the drawn
//! winning number. The resulting [`RoundSettlement`] is the source of truth
//! for claim-time payouts; claims never re-derive amounts.

use std::collections::HashMap;

use sixline_types::lottery::{
    Bracket, NumberOutOfRange, RewardsBreakdown, RoundSettlement, TicketNumber, BRACKET_COUNT,
};
use tracing::{debug, info, warn};

/// Suffix-match population counts keyed by bracket-encoded suffix.
///
/// A single ticket contributes one count per bracket, so a full-match ticket
/// is also present in every shorter-suffix bucket its digits align with.
/// The map is owned by the aggregator, lookup-only after construction, and
/// never iterated.
struct MatchHistogram(HashMap<u32, u64>);

impl MatchHistogram {
    fn with_capacity(tickets: usize) -> Self {
        Self(HashMap::with_capacity(tickets.saturating_mul(BRACKET_COUNT)))
    }

    fn increment(&mut self, key: u32) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    fn count(&self, key: u32) -> u64 {
        self.0.get(&key).copied().unwrap_or(0)
    }
}

/// Settle a closed round from raw ticket numbers.
///
/// Every number (tickets and the winning draw) is validated eagerly, before
/// any histogram mutation: one malformed ticket corrupts the counts of every
/// bracket it touches, so the whole round fails rather than producing a
/// degraded result. Numbers should already have been validated at purchase
/// time; this check is the settlement-side backstop.
pub fn aggregate(
    ticket_numbers: &[u32],
    winning_number: u32,
    breakdown: RewardsBreakdown,
    distributable: u64,
) -> Result<RoundSettlement, NumberOutOfRange> {
    let winning = TicketNumber::new(winning_number)?;
    let tickets = ticket_numbers
        .iter()
        .map(|&number| TicketNumber::new(number))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(aggregate_tickets(&tickets, winning, breakdown, distributable))
}

/// Settle a closed round from already-validated ticket numbers.
///
/// Walks brackets from most to least specific so that a ticket is paid only
/// at its highest match: winners already counted at a higher bracket are
/// subtracted from every lower bracket's suffix-match population. Brackets
/// with no winners (or no weight) defer their entire share to the next
/// round's pool. All division truncates toward zero; residual remainders
/// stay unpaid, which keeps the settlement within the pool it was built
/// from.
pub fn aggregate_tickets(
    tickets: &[TicketNumber],
    winning: TicketNumber,
    breakdown: RewardsBreakdown,
    distributable: u64,
) -> RoundSettlement {
    let mut histogram = MatchHistogram::with_capacity(tickets.len());
    for ticket in tickets {
        for bracket in Bracket::ALL {
            histogram.increment(ticket.encoded(bracket));
        }
    }

    let mut settlement = RoundSettlement::default();
    let mut previous_count = 0u64;
    for bracket in Bracket::ALL.into_iter().rev() {
        let lookup = histogram.count(winning.encoded(bracket));
        if lookup < previous_count {
            warn!(
                bracket = bracket.index(),
                lookup,
                previous_count,
                "suffix population below higher-bracket winners, clamping"
            );
        }
        let winners = lookup.saturating_sub(previous_count);
        let share = breakdown.share_of(distributable, bracket);
        settlement.winners_per_bracket[bracket.index()] = winners;
        if winners > 0 && breakdown.bps(bracket) > 0 {
            settlement.payout_per_bracket[bracket.index()] = share / winners;
            previous_count = lookup;
        } else {
            // The whole share defers (zero when the policy allocates nothing
            // to this bracket).
            settlement.rollover += share;
        }
        debug!(
            bracket = bracket.index(),
            winners,
            payout = settlement.payout_per_bracket[bracket.index()],
            "bracket settled"
        );
    }

    info!(
        tickets = tickets.len(),
        winning = winning.get(),
        rollover = settlement.rollover,
        "round settled"
    );
    settlement
}
