//! Gold amounts
//!
//! Carry runs are priced in whole gold; fractional currency does not exist in
//! this domain, so amounts are plain unsigned integers and every split that
//! cannot divide evenly is truncated toward zero.

use decimal_percentage::Percentage;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// A gold amount in whole currency units.
pub type Gold = u64;

/// Split `price` into `ways` equal floor shares, returning the share and the
/// truncation remainder.
///
/// The remainder belongs to whichever record the calling recipe designates as
/// last, so whole-price splits conserve exactly. A zero `ways` yields zero
/// shares.
pub(crate) fn equal_share(price: Gold, ways: Gold) -> (Gold, Gold) {
    if ways == 0 {
        return (0, 0);
    }

    let share = price / ways;

    (share, price - share * ways)
}

/// Floor `percent` of `price` in gold.
///
/// Percentage recipes truncate toward zero independently per share; the two
/// floors of a 40%/20% pairing need not sum back to the price.
pub(crate) fn percent_share(percent: Percentage, price: Gold) -> Gold {
    let applied = percent * Decimal::from(price);

    applied
        .round_dp_with_strategy(0, RoundingStrategy::ToZero)
        .to_u64()
        .unwrap_or(0)
}

/// Format a gold amount with thousands separators, e.g. `12,500`.
pub fn format_gold(value: Gold) -> String {
    let digits = value.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_share_splits_without_remainder() {
        assert_eq!(equal_share(7000, 7), (1000, 0));
    }

    #[test]
    fn equal_share_returns_truncation_remainder() {
        assert_eq!(equal_share(10000, 7), (1428, 4));
        assert_eq!(equal_share(1000, 3), (333, 1));
    }

    #[test]
    fn equal_share_zero_ways_yields_nothing() {
        assert_eq!(equal_share(5000, 0), (0, 0));
    }

    #[test]
    fn percent_share_is_exact_for_divisible_prices() {
        assert_eq!(percent_share(Percentage::from(0.4), 1000), 400);
        assert_eq!(percent_share(Percentage::from(0.2), 1000), 200);
    }

    #[test]
    fn percent_share_floors_toward_zero() {
        // 40% of 1001 is 400.4, 20% is 200.2; both truncate.
        assert_eq!(percent_share(Percentage::from(0.4), 1001), 400);
        assert_eq!(percent_share(Percentage::from(0.2), 1001), 200);
    }

    #[test]
    fn format_gold_groups_thousands() {
        assert_eq!(format_gold(0), "0");
        assert_eq!(format_gold(999), "999");
        assert_eq!(format_gold(7500), "7,500");
        assert_eq!(format_gold(1_234_567), "1,234,567");
    }
}
