//! The orchestrating entry point: one input in, one itemized result out.

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::RateTables;
use crate::models::{CalculationInput, CalculationResult};

use super::bonus::calculate_bonus_premiums;
use super::employment::calculate_employment_insurance;
use super::health::calculate_health_insurance;
use super::nursing::calculate_nursing_insurance;
use super::pension::calculate_pension_insurance;
use super::resident_tax::calculate_resident_tax;
use super::withholding::calculate_withholding_tax;

/// Calculates take-home pay and the full deduction breakdown for one month.
///
/// Pure and infallible: every lookup clamps, contradictory configuration
/// reads as zero, and a non-positive base salary flows through the natural
/// arithmetic to an all-zero breakdown. Calling twice with the same input
/// yields identical results.
///
/// The sequencing is load-bearing; later steps consume earlier results:
/// allowance partitioning, bonus selection, gross and SI bases, the four
/// premium calculators, bonus-period premiums, withholding tax on the SI
/// total, resident tax on the pre-bonus monthly SI, then assembly.
///
/// # Example
///
/// ```no_run
/// use tedori_engine::calculation::calculate_take_home;
/// use tedori_engine::config::ConfigLoader;
/// use tedori_engine::models::CalculationInput;
///
/// let loader = ConfigLoader::load("./config/reiwa7").unwrap();
/// let input = CalculationInput {
///     base_salary: 300_000,
///     month: 6,
///     ..CalculationInput::default()
/// };
///
/// let result = calculate_take_home(&input, loader.tables());
/// assert_eq!(result.take_home, result.gross_salary - result.total_deductions);
/// ```
pub fn calculate_take_home(input: &CalculationInput, tables: &RateTables) -> CalculationResult {
    // Partition allowances. Tax-exempt amounts are capped per item at the
    // commute-allowance ceiling; SI-exempt amounts are summed uncapped.
    let commute_cap = tables.allowances.commute_tax_free_cap;
    let tax_exempt_allowances: Yen = input
        .allowances
        .iter()
        .filter(|a| a.is_tax_exempt)
        .map(|a| a.amount.min(commute_cap))
        .sum();
    let si_exempt_allowances: Yen = input
        .allowances
        .iter()
        .filter(|a| a.is_si_exempt)
        .map(|a| a.amount)
        .sum();
    let total_allowances: Yen = input.allowances.iter().map(|a| a.amount).sum();

    // First enabled bonus entry matching the calculation month wins.
    let bonus = input
        .bonus_schedule
        .iter()
        .find(|b| b.enabled && b.month == input.month);
    let is_bonus_month = bonus.is_some();
    let bonus_amount = bonus.map(|b| b.amount).unwrap_or(0);

    let gross_salary = input.base_salary + total_allowances + bonus_amount;

    // The monthly standard-remuneration base excludes the bonus and the
    // SI-exempt allowances; bonus premiums are computed separately below.
    let si_base = input.base_salary + total_allowances - si_exempt_allowances;

    let health = calculate_health_insurance(si_base, &input.health, input.jurisdiction, tables);
    let pension = calculate_pension_insurance(si_base, &input.pension, tables);
    let nursing = calculate_nursing_insurance(si_base, &input.nursing, &input.health, tables);
    // Employment insurance is earnings-based, not grade-based, so the bonus
    // passes through its base.
    let employment = calculate_employment_insurance(gross_salary, &input.employment, tables);

    let bonus_premiums = calculate_bonus_premiums(
        bonus_amount,
        &input.health,
        &input.pension,
        &input.nursing,
        input.jurisdiction,
        tables,
    );

    let health_insurance = health + bonus_premiums.health;
    let pension_insurance = pension + bonus_premiums.pension;
    let nursing_insurance = nursing + bonus_premiums.nursing;
    let social_insurance_total =
        health_insurance + pension_insurance + nursing_insurance + employment;

    let withholding_tax = calculate_withholding_tax(
        gross_salary,
        social_insurance_total,
        tax_exempt_allowances,
        &input.withholding,
        tables,
    );

    // Resident tax annualizes the recurring pay only (no bonus) and uses
    // the pre-bonus monthly premiums excluding employment insurance.
    let resident_tax = if input.resident_tax.suppressed {
        0
    } else {
        calculate_resident_tax(
            (input.base_salary + total_allowances) * 12,
            health + pension + nursing,
            &input.resident_tax,
            tables,
        )
    };

    let total_other_deductions: Yen = input.other_deductions.iter().map(|d| d.amount).sum();

    let total_deductions =
        social_insurance_total + withholding_tax + resident_tax + total_other_deductions;
    let take_home = gross_salary - total_deductions;

    let deduction_rate = if gross_salary > 0 {
        Decimal::from(total_deductions) / Decimal::from(gross_salary) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    CalculationResult {
        gross_salary,
        base_salary: input.base_salary,
        total_allowances,
        bonus_amount,
        is_bonus_month,
        health_insurance,
        pension_insurance,
        nursing_insurance,
        employment_insurance: employment,
        social_insurance_total,
        withholding_tax,
        resident_tax,
        total_other_deductions,
        total_deductions,
        take_home,
        deduction_rate,
        tax_exempt_allowances,
        si_exempt_allowances,
    }
}
