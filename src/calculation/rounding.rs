//! Regulatory rounding primitives.
//!
//! Japanese payroll regulation prescribes a different rounding rule per
//! deduction type: social-insurance premiums round half *down*, pension uses
//! ordinary half-up rounding, employment insurance truncates, and withholding
//! tax rounds to the nearest 10 or 100 yen depending on the column. Each rule
//! is its own named function; none of this is configurable.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::Yen;

/// Tolerance for recognising an exact .5 fraction that arrives with
/// floating-point representation noise (e.g. 7432.5000000000001).
fn half_epsilon() -> Decimal {
    Decimal::new(1, 6) // 0.000001
}

/// Rounds to the nearest yen, except an exact .5 fraction rounds down.
///
/// Health and nursing premiums use this rule (50 sen and below truncate,
/// above 50 sen rounds up). It differs from [`round_half_up`] only at
/// exactly .5.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use tedori_engine::calculation::half_down_round;
///
/// assert_eq!(half_down_round(Decimal::new(74325, 1)), 7432); // 7432.5
/// assert_eq!(half_down_round(Decimal::new(74326, 1)), 7433); // 7432.6
/// ```
pub fn half_down_round(value: Decimal) -> Yen {
    let floored = value.floor();
    let fractional = value - floored;
    let half = Decimal::new(5, 1);

    if (fractional - half).abs() < half_epsilon() {
        floored.to_i64().unwrap_or(0)
    } else {
        round_half_up(value)
    }
}

/// Ordinary arithmetic rounding to the nearest yen (.5 rounds away from
/// zero). Pension premiums and resident tax use this rule.
pub fn round_half_up(value: Decimal) -> Yen {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Truncates toward negative infinity to whole yen. Employment-insurance
/// premiums and the tax bracket formulas use this rule.
pub fn floor_to_yen(value: Decimal) -> Yen {
    value.floor().to_i64().unwrap_or(0)
}

/// Rounds a non-negative amount to the nearest 10 yen (5 rounds up).
///
/// Primary-column withholding tax is rounded this way as its final step.
pub fn round_to_nearest_10(amount: Yen) -> Yen {
    (amount + 5).div_euclid(10) * 10
}

/// Rounds to the nearest 100 yen (50 rounds up).
///
/// The secondary-column differential is rounded this way twice, once on the
/// raw differential and again after the surtax factor; the double rounding
/// is a regulatory specification, not redundancy.
pub fn round_to_nearest_100(value: Decimal) -> Yen {
    let hundreds = (value / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    hundreds.to_i64().unwrap_or(0) * 100
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RD-001: exact .5 rounds down, not up.
    #[test]
    fn test_half_down_round_at_exact_half() {
        assert_eq!(half_down_round(dec("7432.5")), 7432);
        assert_eq!(half_down_round(dec("0.5")), 0);
    }

    /// RD-002: floating-point noise near .5 still rounds down.
    #[test]
    fn test_half_down_round_tolerates_float_noise() {
        let noisy = Decimal::from_f64(7432.5000000000001).unwrap();
        assert_eq!(half_down_round(noisy), 7432);

        let noisy_below = Decimal::from_f64(7432.4999999999999).unwrap();
        assert_eq!(half_down_round(noisy_below), 7432);
    }

    /// RD-003: away from .5 it behaves like ordinary rounding.
    #[test]
    fn test_half_down_round_ordinary_cases() {
        assert_eq!(half_down_round(dec("7432.4")), 7432);
        assert_eq!(half_down_round(dec("7432.6")), 7433);
        assert_eq!(half_down_round(dec("7432.51")), 7433);
        assert_eq!(half_down_round(dec("7432")), 7432);
    }

    /// RD-004: the half-up rule diverges from half-down only at .5.
    #[test]
    fn test_round_half_up_at_exact_half() {
        assert_eq!(round_half_up(dec("7432.5")), 7433);
        assert_eq!(round_half_up(dec("7432.4")), 7432);
        assert_eq!(round_half_up(dec("0.5")), 1);
    }

    #[test]
    fn test_floor_to_yen_truncates() {
        assert_eq!(floor_to_yen(dec("1656.787")), 1656);
        assert_eq!(floor_to_yen(dec("1656.0")), 1656);
    }

    /// RD-005: 10-yen rounding, 5 rounds up.
    #[test]
    fn test_round_to_nearest_10() {
        assert_eq!(round_to_nearest_10(6_341), 6_340);
        assert_eq!(round_to_nearest_10(6_345), 6_350);
        assert_eq!(round_to_nearest_10(6_344), 6_340);
        assert_eq!(round_to_nearest_10(0), 0);
    }

    /// RD-006: 100-yen rounding, 50 rounds up.
    #[test]
    fn test_round_to_nearest_100() {
        assert_eq!(round_to_nearest_100(dec("36820")), 36_800);
        assert_eq!(round_to_nearest_100(dec("36850")), 36_900);
        assert_eq!(round_to_nearest_100(dec("37572.8")), 37_600);
        assert_eq!(round_to_nearest_100(dec("0")), 0);
    }
}
