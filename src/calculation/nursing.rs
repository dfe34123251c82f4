//! Nursing-care insurance premium calculation (employee share).

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::RateTables;
use crate::models::{HealthInsuranceConfig, NursingConfig};

use super::health::health_standard_remuneration;
use super::rounding::half_down_round;

/// Resolves the total nursing-care rate (%), honouring a union override.
pub(crate) fn nursing_total_rate(config: &NursingConfig, tables: &RateTables) -> Decimal {
    config.union_rate.unwrap_or(tables.insurance.nursing_rate)
}

/// Calculates the monthly nursing-care employee share.
///
/// Zero unless collection is enabled. The engine trusts the explicit
/// `collected` flag; the age bracket only supplies the UI default. A custom
/// amount bypasses the rate calculation entirely. Otherwise the premium
/// reuses the *health* standard-remuneration lookup (including the health
/// grade override) with the nursing rate, half-down rounded.
pub fn calculate_nursing_insurance(
    salary: Yen,
    config: &NursingConfig,
    health: &HealthInsuranceConfig,
    tables: &RateTables,
) -> Yen {
    if !config.collected {
        return 0;
    }

    if config.use_custom {
        return config.custom_amount.unwrap_or(0);
    }

    let standard = health_standard_remuneration(salary, health, tables);
    let rate = nursing_total_rate(config, tables);

    let employee_share = Decimal::from(standard) * rate / Decimal::ONE_HUNDRED / Decimal::TWO;
    half_down_round(employee_share)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::tests::test_tables;
    use crate::models::SiMode;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// NR-001: not collected means zero, whatever else is configured.
    #[test]
    fn test_not_collected_is_zero() {
        let tables = test_tables();
        let config = NursingConfig {
            collected: false,
            custom_amount: Some(9_999),
            ..NursingConfig::default()
        };

        assert_eq!(
            calculate_nursing_insurance(300_000, &config, &HealthInsuranceConfig::default(), &tables),
            0
        );
    }

    /// NR-002: statutory rate over the health standard remuneration.
    #[test]
    fn test_collected_auto() {
        let tables = test_tables();
        let config = NursingConfig {
            collected: true,
            ..NursingConfig::default()
        };

        // 300,000 * 1.82% / 2
        assert_eq!(
            calculate_nursing_insurance(300_000, &config, &HealthInsuranceConfig::default(), &tables),
            2_730
        );
    }

    /// NR-003: custom amount bypasses the rate calculation.
    #[test]
    fn test_custom_amount() {
        let tables = test_tables();
        let config = NursingConfig {
            collected: true,
            use_custom: true,
            custom_amount: Some(5_000),
            ..NursingConfig::default()
        };

        assert_eq!(
            calculate_nursing_insurance(300_000, &config, &HealthInsuranceConfig::default(), &tables),
            5_000
        );
    }

    /// NR-004: the health grade override carries through to nursing.
    #[test]
    fn test_health_grade_override_applies() {
        let tables = test_tables();
        let config = NursingConfig {
            collected: true,
            ..NursingConfig::default()
        };
        let health = HealthInsuranceConfig {
            mode: SiMode::StandardGrade,
            standard_grade_index: Some(25), // grade 26 = 380,000
            ..HealthInsuranceConfig::default()
        };

        // 380,000 * 1.82% / 2
        assert_eq!(
            calculate_nursing_insurance(300_000, &config, &health, &tables),
            3_458
        );
    }

    /// NR-005: a union rate overrides the statutory rate, half-down rounded.
    #[test]
    fn test_union_rate_half_down() {
        let tables = test_tables();
        let config = NursingConfig {
            collected: true,
            union_rate: Some(dec("1.95")),
            ..NursingConfig::default()
        };

        // Salary 93,000 -> standard 98,000; 98,000 * 1.95% / 2 = 955.5,
        // which rounds down under the half-down rule.
        assert_eq!(
            calculate_nursing_insurance(93_000, &config, &HealthInsuranceConfig::default(), &tables),
            955
        );
    }
}
