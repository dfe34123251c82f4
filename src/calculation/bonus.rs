//! Bonus-period social-insurance premiums.
//!
//! Bonuses do not go through the standard-remuneration tables: the same total
//! rates are applied directly to the bonus amount. The resulting employee
//! shares are folded into the monthly figures, never reported separately.

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::RateTables;
use crate::models::{HealthInsuranceConfig, NursingConfig, PensionConfig, SiMode};

use super::health::health_total_rate;
use super::nursing::nursing_total_rate;
use super::rounding::{half_down_round, round_half_up};

/// Employee-share increments for a bonus payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BonusPremiums {
    /// Health-insurance increment.
    pub health: Yen,
    /// Pension-insurance increment.
    pub pension: Yen,
    /// Nursing-care increment.
    pub nursing: Yen,
}

impl BonusPremiums {
    /// Sum of the three increments.
    pub fn total(&self) -> Yen {
        self.health + self.pension + self.nursing
    }
}

/// Calculates the bonus-period employee shares for a bonus amount.
///
/// Fires only when a bonus was actually paid and neither the health nor the
/// pension configuration is in custom mode, since a custom premium already stands
/// in for whatever the real payroll would collect. Health and nursing use
/// half-down rounding; pension plain-rounds after capping the bonus amount at
/// the per-occurrence ceiling from the rate table. The nursing increment
/// additionally requires collection to be enabled and not custom.
pub fn calculate_bonus_premiums(
    bonus_amount: Yen,
    health: &HealthInsuranceConfig,
    pension: &PensionConfig,
    nursing: &NursingConfig,
    jurisdiction: usize,
    tables: &RateTables,
) -> BonusPremiums {
    if bonus_amount <= 0 || health.mode == SiMode::Custom || pension.mode == SiMode::Custom {
        return BonusPremiums::default();
    }

    let bonus = Decimal::from(bonus_amount);

    let health_rate = health_total_rate(health, jurisdiction, tables);
    let health_share = half_down_round(bonus * health_rate / Decimal::ONE_HUNDRED / Decimal::TWO);

    let capped = Decimal::from(bonus_amount.min(tables.insurance.pension_bonus_cap));
    let pension_share = round_half_up(
        capped * tables.insurance.pension_rate / Decimal::ONE_HUNDRED / Decimal::TWO,
    );

    let nursing_share = if nursing.collected && !nursing.use_custom {
        let rate = nursing_total_rate(nursing, tables);
        half_down_round(bonus * rate / Decimal::ONE_HUNDRED / Decimal::TWO)
    } else {
        0
    };

    BonusPremiums {
        health: health_share,
        pension: pension_share,
        nursing: nursing_share,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::tests::test_tables;

    /// BP-001: a 500,000 yen bonus in Tokyo, nursing not collected.
    #[test]
    fn test_bonus_premiums_tokyo() {
        let tables = test_tables();
        let premiums = calculate_bonus_premiums(
            500_000,
            &HealthInsuranceConfig::default(),
            &PensionConfig::default(),
            &NursingConfig::default(),
            12,
            &tables,
        );

        // 500,000 * 9.91% / 2 and 500,000 * 18.3% / 2.
        assert_eq!(premiums.health, 24_775);
        assert_eq!(premiums.pension, 45_750);
        assert_eq!(premiums.nursing, 0);
        assert_eq!(premiums.total(), 70_525);
    }

    /// BP-002: the pension bonus base is capped per occurrence.
    #[test]
    fn test_pension_bonus_cap() {
        let tables = test_tables();
        let premiums = calculate_bonus_premiums(
            2_000_000,
            &HealthInsuranceConfig::default(),
            &PensionConfig::default(),
            &NursingConfig::default(),
            12,
            &tables,
        );

        // Pension computed on the 1,500,000 cap; health on the full amount.
        assert_eq!(premiums.pension, 137_250);
        assert_eq!(premiums.health, 99_100);
    }

    /// BP-003: either custom mode suppresses all bonus premiums.
    #[test]
    fn test_custom_mode_suppresses() {
        let tables = test_tables();
        let custom_health = HealthInsuranceConfig {
            mode: SiMode::Custom,
            custom_amount: Some(10_000),
            ..HealthInsuranceConfig::default()
        };

        let premiums = calculate_bonus_premiums(
            500_000,
            &custom_health,
            &PensionConfig::default(),
            &NursingConfig::default(),
            12,
            &tables,
        );
        assert_eq!(premiums, BonusPremiums::default());

        let custom_pension = PensionConfig {
            mode: SiMode::Custom,
            custom_amount: Some(10_000),
            ..PensionConfig::default()
        };
        let premiums = calculate_bonus_premiums(
            500_000,
            &HealthInsuranceConfig::default(),
            &custom_pension,
            &NursingConfig::default(),
            12,
            &tables,
        );
        assert_eq!(premiums, BonusPremiums::default());
    }

    /// BP-004: nursing increment requires collection without a custom amount.
    #[test]
    fn test_nursing_increment_conditions() {
        let tables = test_tables();
        let collected = NursingConfig {
            collected: true,
            ..NursingConfig::default()
        };

        let premiums = calculate_bonus_premiums(
            500_000,
            &HealthInsuranceConfig::default(),
            &PensionConfig::default(),
            &collected,
            12,
            &tables,
        );
        // 500,000 * 1.82% / 2
        assert_eq!(premiums.nursing, 4_550);

        let custom = NursingConfig {
            collected: true,
            use_custom: true,
            custom_amount: Some(3_000),
            ..NursingConfig::default()
        };
        let premiums = calculate_bonus_premiums(
            500_000,
            &HealthInsuranceConfig::default(),
            &PensionConfig::default(),
            &custom,
            12,
            &tables,
        );
        assert_eq!(premiums.nursing, 0);
    }

    /// BP-005: no bonus, no premiums.
    #[test]
    fn test_zero_bonus() {
        let tables = test_tables();
        let premiums = calculate_bonus_premiums(
            0,
            &HealthInsuranceConfig::default(),
            &PensionConfig::default(),
            &NursingConfig::default(),
            12,
            &tables,
        );
        assert_eq!(premiums, BonusPremiums::default());
    }
}
