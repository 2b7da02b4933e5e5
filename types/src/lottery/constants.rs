/// Inclusive lower bound of a valid ticket number. The leading `1` is a
/// sentinel digit that keeps every number six playable digits wide.
pub const TICKET_NUMBER_MIN: u32 = 1_000_000;

/// Inclusive upper bound of a valid ticket number.
pub const TICKET_NUMBER_MAX: u32 = 1_999_999;

/// Number of prize brackets (1 to 6 matched trailing digits).
pub const BRACKET_COUNT: usize = 6;

/// Repunit sentinel offsets, one per bracket.
///
/// Folding `number % 10^(j+1)` into `offset[j] + suffix` keeps suffixes of
/// different lengths in disjoint key ranges: a ticket ending in `1` encodes
/// to 2 at bracket 0, while a ticket ending in `01` encodes to 12 at
/// bracket 1, even though both equal 1 mod 10.
pub const BRACKET_OFFSETS: [u32; BRACKET_COUNT] = [1, 11, 111, 1_111, 11_111, 111_111];

/// Basis-point denominator for all proportional shares.
pub const BASIS_POINT_DENOMINATOR: u64 = 10_000;

/// Minimum accepted bulk-purchase discount divisor.
pub const MIN_DISCOUNT_DIVISOR: u32 = 300;
