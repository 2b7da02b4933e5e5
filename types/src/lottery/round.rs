use super::{Bracket, BRACKET_COUNT};

/// The immutable result of settling one round.
///
/// Built once at round close by the aggregator and read repeatedly at claim
/// time. `payout_per_bracket[j]` is owed to each ticket whose highest match
/// is bracket `j`; brackets that were never rewarded hold 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundSettlement {
    pub payout_per_bracket: [u64; BRACKET_COUNT],
    pub winners_per_bracket: [u64; BRACKET_COUNT],
    /// Funds deferred to the next round's pool (shares of unrewarded
    /// brackets).
    pub rollover: u64,
}

impl RoundSettlement {
    /// Payout owed to one winning ticket of `bracket`.
    pub const fn payout(&self, bracket: Bracket) -> u64 {
        self.payout_per_bracket[bracket.index()]
    }

    /// Number of tickets whose highest match is `bracket`.
    pub const fn winners(&self, bracket: Bracket) -> u64 {
        self.winners_per_bracket[bracket.index()]
    }

    /// Total owed across all brackets, widened to avoid intermediate
    /// overflow on arbitrary field values.
    pub fn total_awarded(&self) -> u128 {
        self.payout_per_bracket
            .iter()
            .zip(self.winners_per_bracket.iter())
            .map(|(&payout, &winners)| payout as u128 * winners as u128)
            .sum()
    }

    /// Whether the settlement commits no more than the pool it was built
    /// from: awarded payouts plus rollover never exceed `distributable`.
    pub fn conserves(&self, distributable: u64) -> bool {
        self.total_awarded() + self.rollover as u128 <= distributable as u128
    }
}
