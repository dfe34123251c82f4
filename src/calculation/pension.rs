//! Pension-insurance premium calculation (employee share).

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::RateTables;
use crate::models::{PensionConfig, SiMode};

use super::rounding::round_half_up;

/// Calculates the monthly pension-insurance employee share.
///
/// Same structure as the health calculator (custom passthrough, grade
/// override, salary-derived standard remuneration) but against the 32-grade
/// pension table and the single nationwide pension rate, and with ordinary
/// half-up rounding. The rounding divergence from health insurance is
/// regulatory, not an inconsistency.
pub fn calculate_pension_insurance(
    salary: Yen,
    config: &PensionConfig,
    tables: &RateTables,
) -> Yen {
    if config.mode == SiMode::Custom {
        return config.custom_amount.unwrap_or(0);
    }

    let standard = if config.mode == SiMode::StandardGrade {
        config
            .standard_grade_index
            .and_then(|index| tables.pension_grades.by_index(index))
            .unwrap_or_else(|| tables.pension_grades.lookup(salary))
    } else {
        tables.pension_grades.lookup(salary)
    };

    let employee_share = Decimal::from(standard) * tables.insurance.pension_rate
        / Decimal::ONE_HUNDRED
        / Decimal::TWO;
    round_half_up(employee_share)
}
