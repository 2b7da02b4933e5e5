//! Sixline settlement engine.
//!
//! This crate contains the deterministic round-settlement logic: classifying
//! tickets into prize brackets, aggregating a closed round into a
//! [`RoundSettlement`](sixline_types::RoundSettlement), verifying claims
//! against it, and the pure pricing and pool arithmetic around a round.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside settlement.
//! - Do not use randomness; a round's ticket population and winning number
//!   are frozen by the caller before aggregation starts.
//! - Avoid iteration order of hash-based collections influencing outputs
//!   (the match histogram is lookup-only).
//!
//! ## Caller invariants
//! Aggregation runs once per round close, by a single caller. Claim-time
//! reads against the resulting settlement are pure and idempotent, so they
//! are safe to run concurrently and repeatedly.
//!
//! The primary entrypoints are [`aggregate`] and [`highest_bracket`].

pub mod aggregate;
pub mod claim;
pub mod classify;
pub mod pool;
pub mod pricing;


pub use aggregate::{aggregate, aggregate_tickets};
pub use claim::{settle_claims, verify_claim, ClaimError};
pub use classify::{classify_all, highest_bracket};
pub use pool::{FeePolicy, FeeShareOverweight, RoundPool};
pub use pricing::{bulk_ticket_price, PricingError};
