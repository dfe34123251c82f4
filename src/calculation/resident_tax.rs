//! Monthly resident tax (住民税) approximation.

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::{RateTables, find_band};
use crate::models::{ResidentTaxConfig, ResidentTaxMode};

use super::rounding::round_half_up;

/// Calculates the monthly resident tax.
///
/// Manual mode divides a caller-supplied annual amount over twelve months.
/// Auto mode approximates the annual levy: annualized salary minus the annual
/// salary-income deduction, an annualized social-insurance estimate, and the
/// basic deduction, times the flat rate, plus the per-capita levy, divided by
/// twelve. This is an estimate of next year's bill, not a statement of it;
/// real resident tax is assessed on the prior year's certified income.
///
/// Suppression is handled by the orchestrator, which forces the result to
/// zero regardless of mode.
pub fn calculate_resident_tax(
    annual_salary: Yen,
    monthly_social_insurance: Yen,
    config: &ResidentTaxConfig,
    tables: &RateTables,
) -> Yen {
    if config.mode == ResidentTaxMode::Manual {
        let annual = config.manual_annual_amount.unwrap_or(0);
        return round_half_up(Decimal::from(annual) / Decimal::from(12));
    }

    let annual_si = monthly_social_insurance * 12;
    let salary_deduction = find_band(&tables.resident.salary_deduction, annual_salary)
        .map(|band| band.amount(annual_salary))
        .unwrap_or(0);

    let taxable =
        (annual_salary - salary_deduction - annual_si - tables.resident.basic_deduction).max(0);

    let income_levy =
        round_half_up(Decimal::from(taxable) * tables.resident.rate / Decimal::ONE_HUNDRED);
    let annual_tax = income_levy + tables.resident.per_capita_levy;

    round_half_up(Decimal::from(annual_tax) / Decimal::from(12))
}
