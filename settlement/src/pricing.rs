//! Bulk ticket pricing.
//!
//! A purchase of `count` tickets costs
//! `price * count * (divisor + 1 - count) / divisor`: each additional ticket
//! deepens a linear discount by `1/divisor`. With `count = 1` the formula
//! collapses to the list price.

use thiserror::Error;

use sixline_types::lottery::MIN_DISCOUNT_DIVISOR;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("discount divisor too low (got={got}, min={MIN_DISCOUNT_DIVISOR})")]
    DivisorTooLow { got: u32 },
    #[error("ticket count must be nonzero")]
    EmptyPurchase,
    /// Counts above the divisor would drive the discount term negative.
    #[error("ticket count above discount divisor (count={count}, divisor={divisor})")]
    TooManyTickets { count: u32, divisor: u32 },
    #[error("total price overflows the amount range")]
    Overflow,
}

/// Total price of a bulk purchase of `count` tickets at `price` each.
pub fn bulk_ticket_price(
    price: u64,
    count: u32,
    discount_divisor: u32,
) -> Result<u64, PricingError> {
    if discount_divisor < MIN_DISCOUNT_DIVISOR {
        return Err(PricingError::DivisorTooLow {
            got: discount_divisor,
        });
    }
    if count == 0 {
        return Err(PricingError::EmptyPurchase);
    }
    if count > discount_divisor {
        return Err(PricingError::TooManyTickets {
            count,
            divisor: discount_divisor,
        });
    }

    // u64 * u32 * u32 fits u128; only the final narrowing can fail.
    let total = price as u128 * count as u128 * (discount_divisor + 1 - count) as u128
        / discount_divisor as u128;
    u64::try_from(total).map_err(|_| PricingError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ticket_pays_list_price() {
        assert_eq!(bulk_ticket_price(1_000, 1, 10_000), Ok(1_000));
        assert_eq!(bulk_ticket_price(1_000, 1, 300), Ok(1_000));
    }

    #[test]
    fn test_discount_grows_with_count() {
        // 6 tickets at divisor 10_000: 1_000 * 6 * 9_995 / 10_000 = 5_997.
        assert_eq!(bulk_ticket_price(1_000, 6, 10_000), Ok(5_997));
        // The same purchase at a steeper divisor discounts more.
        // 1_000 * 6 * 295 / 300 = 5_900.
        assert_eq!(bulk_ticket_price(1_000, 6, 300), Ok(5_900));
        // Bulk never costs more than list price times count.
        for count in 1..=50 {
            let total = bulk_ticket_price(1_000, count, 300).unwrap();
            assert!(total <= 1_000 * count as u64);
        }
    }

    #[test]
    fn test_divisor_floor_enforced() {
        assert_eq!(
            bulk_ticket_price(1_000, 1, 299),
            Err(PricingError::DivisorTooLow { got: 299 })
        );
    }

    #[test]
    fn test_empty_purchase_rejected() {
        assert_eq!(
            bulk_ticket_price(1_000, 0, 10_000),
            Err(PricingError::EmptyPurchase)
        );
    }

    #[test]
    fn test_count_capped_by_divisor() {
        assert_eq!(
            bulk_ticket_price(1_000, 301, 300),
            Err(PricingError::TooManyTickets {
                count: 301,
                divisor: 300
            })
        );
        // Exactly at the divisor the discount bottoms out at 1/divisor.
        assert_eq!(bulk_ticket_price(300, 300, 300), Ok(300));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            bulk_ticket_price(u64::MAX, 300, 10_000),
            Err(PricingError::Overflow)
        );
    }
}
