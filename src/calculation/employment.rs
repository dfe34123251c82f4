//! Employment-insurance premium calculation (employee share).

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::{EmploymentCategoryRate, RateTables};
use crate::models::{EmploymentInsuranceConfig, IndustryCategory};

use super::rounding::floor_to_yen;

/// Resolves the employee-share rate entry for an industry category, or `None`
/// when no premium is collected for the category.
fn category_rate<'a>(
    category: IndustryCategory,
    tables: &'a RateTables,
) -> Option<&'a EmploymentCategoryRate> {
    match category {
        IndustryCategory::General => Some(&tables.employment.general),
        IndustryCategory::AgricultureOrSake => Some(&tables.employment.agriculture_or_sake),
        IndustryCategory::Construction => Some(&tables.employment.construction),
        IndustryCategory::None => None,
    }
}

/// Calculates the monthly employment-insurance employee share.
///
/// No standard-remuneration lookup: the premium is a straight truncated
/// percentage of total earnings for the period, `⌊earnings × rate / 100⌋`,
/// where earnings include any bonus paid in the month. Whether a monthly
/// earnings cap applies before the rate is a property of the rate table
/// (the current regime is uncapped, earlier regimes capped), so the cap is
/// read from the table entry rather than assumed either way.
pub fn calculate_employment_insurance(
    earnings: Yen,
    config: &EmploymentInsuranceConfig,
    tables: &RateTables,
) -> Yen {
    if !config.enrolled {
        return 0;
    }

    let Some(entry) = category_rate(config.industry_category, tables) else {
        return 0;
    };

    let base = match entry.monthly_earnings_cap {
        Some(cap) => earnings.min(cap),
        None => earnings,
    };

    floor_to_yen(Decimal::from(base.max(0)) * entry.rate / Decimal::ONE_HUNDRED)
}
