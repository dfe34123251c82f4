//! Health-insurance premium calculation (employee share).

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::RateTables;
use crate::models::{HealthInsuranceConfig, SiMode};

use super::rounding::half_down_round;

/// Resolves the total health-insurance rate (%) for a configuration.
///
/// A regional plan takes the prefecture (Kyokai Kenpo) rate, with an
/// out-of-range jurisdiction falling back to the table's default prefecture.
/// Otherwise the union-specific rate applies, defaulting to the table's
/// standard union rate.
pub(crate) fn health_total_rate(
    config: &HealthInsuranceConfig,
    jurisdiction: usize,
    tables: &RateTables,
) -> Decimal {
    if config.is_regional_plan {
        tables
            .prefecture(jurisdiction)
            .map(|p| p.health_rate)
            .unwrap_or(tables.insurance.union_health_rate)
    } else {
        config
            .union_rate
            .unwrap_or(tables.insurance.union_health_rate)
    }
}

/// Resolves the standard remuneration for a health-table lookup.
///
/// An explicit grade index takes precedence over the salary-derived lookup;
/// an out-of-range index falls back to the lookup rather than failing.
pub(crate) fn health_standard_remuneration(
    salary: Yen,
    config: &HealthInsuranceConfig,
    tables: &RateTables,
) -> Yen {
    if config.mode == SiMode::StandardGrade {
        if let Some(standard) = config
            .standard_grade_index
            .and_then(|index| tables.health_grades.by_index(index))
        {
            return standard;
        }
    }
    tables.health_grades.lookup(salary)
}

/// Calculates the monthly health-insurance employee share.
///
/// Custom mode returns the configured amount directly (missing amount reads
/// as 0). Otherwise the standard remuneration is multiplied by half the total
/// rate (the employee pays half) and rounded half-down.
///
/// # Example
///
/// ```no_run
/// use tedori_engine::calculation::calculate_health_insurance;
/// use tedori_engine::config::ConfigLoader;
/// use tedori_engine::models::HealthInsuranceConfig;
///
/// let loader = ConfigLoader::load("./config/reiwa7").unwrap();
/// let premium = calculate_health_insurance(
///     300_000,
///     &HealthInsuranceConfig::default(),
///     12, // Tokyo
///     loader.tables(),
/// );
/// assert_eq!(premium, 14_865);
/// ```
pub fn calculate_health_insurance(
    salary: Yen,
    config: &HealthInsuranceConfig,
    jurisdiction: usize,
    tables: &RateTables,
) -> Yen {
    if config.mode == SiMode::Custom {
        return config.custom_amount.unwrap_or(0);
    }

    let standard = health_standard_remuneration(salary, config, tables);
    let total_rate = health_total_rate(config, jurisdiction, tables);

    let employee_share =
        Decimal::from(standard) * total_rate / Decimal::ONE_HUNDRED / Decimal::TWO;
    half_down_round(employee_share)
}
