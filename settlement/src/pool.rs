//! Round pool accounting: fee netting and cross-round injection.
//!
//! The aggregator distributes an amount already net of the off-the-top fee
//! shares; this module derives that amount from a round's gross funding.
//! Custody and transfer of the withheld shares remain the surrounding
//! application's concern.

use thiserror::Error;

use sixline_types::lottery::BASIS_POINT_DENOMINATOR;

/// Fee shares whose basis points sum past the whole pool.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("fee shares overweight (total={total_bps} bps, max={BASIS_POINT_DENOMINATOR})")]
pub struct FeeShareOverweight {
    pub total_bps: u32,
}

/// Off-the-top shares withheld from a round's funding before any prize
/// distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeePolicy {
    burning_share_bps: u16,
    competition_ref_share_bps: u16,
}

impl FeePolicy {
    pub fn new(
        burning_share_bps: u16,
        competition_ref_share_bps: u16,
    ) -> Result<Self, FeeShareOverweight> {
        let total_bps = burning_share_bps as u32 + competition_ref_share_bps as u32;
        if total_bps > BASIS_POINT_DENOMINATOR as u32 {
            return Err(FeeShareOverweight { total_bps });
        }
        Ok(Self {
            burning_share_bps,
            competition_ref_share_bps,
        })
    }

    /// Combined withheld share in basis points.
    pub const fn total_bps(self) -> u32 {
        self.burning_share_bps as u32 + self.competition_ref_share_bps as u32
    }
}

/// Funds available to one round: ticket sale proceeds plus the previous
/// round's rollover injection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundPool {
    /// Ticket sale proceeds collected this round.
    pub collected: u64,
    /// Rollover injected from the previous round's settlement.
    pub injected: u64,
}

impl RoundPool {
    pub const fn new(collected: u64, injected: u64) -> Self {
        Self { collected, injected }
    }

    /// Total funding available to the round.
    pub const fn total(self) -> u64 {
        self.collected.saturating_add(self.injected)
    }

    /// Fees withheld at round close.
    ///
    /// The funding is divided by the basis-point denominator before the
    /// share multiply, so sub-myriad dust is never charged a fee. The
    /// product cannot exceed the funding.
    pub fn fees(self, policy: FeePolicy) -> u64 {
        (self.total() / BASIS_POINT_DENOMINATOR) * policy.total_bps() as u64
    }

    /// Amount available for prize distribution after fees.
    pub fn distributable(self, policy: FeePolicy) -> u64 {
        self.total() - self.fees(policy)
    }
}
