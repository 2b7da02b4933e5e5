use thiserror::Error as ThisError;

use super::{Bracket, BASIS_POINT_DENOMINATOR, BRACKET_COUNT};

/// A rewards breakdown whose basis points sum past the whole pool.
#[derive(Clone, Copy, Debug, ThisError, PartialEq, Eq)]
#[error("rewards breakdown overweight (total={total_bps} bps, max={BASIS_POINT_DENOMINATOR})")]
pub struct BreakdownOverweight {
    pub total_bps: u32,
}

/// Per-bracket basis-point weights over the distributable pool.
///
/// Weights may sum below 10_000; the unallocated remainder simply never
/// enters payouts. A sum above 10_000 would let a round owe more than it
/// holds and is rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardsBreakdown([u16; BRACKET_COUNT]);

impl RewardsBreakdown {
    pub fn new(bps: [u16; BRACKET_COUNT]) -> Result<Self, BreakdownOverweight> {
        let total_bps: u32 = bps.iter().map(|&b| b as u32).sum();
        if total_bps > BASIS_POINT_DENOMINATOR as u32 {
            return Err(BreakdownOverweight { total_bps });
        }
        Ok(Self(bps))
    }

    /// Weight of `bracket` in basis points.
    pub const fn bps(self, bracket: Bracket) -> u16 {
        self.0[bracket.index()]
    }

    /// This bracket's share of `amount`, floor-truncated.
    pub fn share_of(self, amount: u64, bracket: Bracket) -> u64 {
        // bps <= 10_000, so the widened product cannot overflow and the
        // result never exceeds `amount`.
        ((amount as u128 * self.bps(bracket) as u128) / BASIS_POINT_DENOMINATOR as u128) as u64
    }
}
