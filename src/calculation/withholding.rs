//! Monthly withholding income tax (源泉徴収税).
//!
//! Two structurally different computation methods exist: the primary-column
//! progressive electronic formula (with dependent deductions) and the
//! secondary-column four-range differential method (dependent-agnostic by
//! law), plus a flat non-resident rate and an exemption short-circuit. The
//! applicable path is resolved exactly once per call into a
//! [`WithholdingPath`], first match wins, no fallthrough.

use rust_decimal::Decimal;

use crate::Yen;
use crate::config::{RateTables, SecondaryTaxTables, WithholdingTables, find_band};
use crate::models::{TaxColumn, WithholdingConfig};

use super::rounding::{floor_to_yen, round_to_nearest_10, round_to_nearest_100};

/// The withholding computation selected for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithholdingPath {
    /// Fully exempt; tax is zero.
    Exempt,
    /// Non-resident flat-rate taxation; dependents and column are ignored.
    NonResident,
    /// Secondary-employment differential method.
    Secondary,
    /// Primary-employment electronic formula.
    Primary {
        /// Number of dependents feeding the dependent deduction.
        dependents: u32,
    },
}

/// Resolves the withholding path from a configuration.
///
/// Decision order is fixed: exemption wins over non-residency, which wins
/// over the column selector.
pub fn resolve_withholding_path(config: &WithholdingConfig) -> WithholdingPath {
    if config.exempt {
        WithholdingPath::Exempt
    } else if config.non_resident {
        WithholdingPath::NonResident
    } else if config.column == TaxColumn::Secondary {
        WithholdingPath::Secondary
    } else {
        WithholdingPath::Primary {
            dependents: config.dependent_count,
        }
    }
}

/// Calculates the monthly withholding tax.
///
/// `gross_salary` includes any bonus paid this month; `social_insurance_total`
/// is the full employee-share total just computed; `tax_exempt_allowances` is
/// the capped tax-exempt allowance total. All three feed the taxable base
/// `after_si = max(0, gross − SI − tax-exempt)` shared by every non-exempt
/// path.
pub fn calculate_withholding_tax(
    gross_salary: Yen,
    social_insurance_total: Yen,
    tax_exempt_allowances: Yen,
    config: &WithholdingConfig,
    tables: &RateTables,
) -> Yen {
    let path = resolve_withholding_path(config);

    if path == WithholdingPath::Exempt {
        return 0;
    }

    let after_si = (gross_salary - social_insurance_total - tax_exempt_allowances).max(0);

    match path {
        WithholdingPath::Exempt => 0,
        WithholdingPath::NonResident => {
            floor_to_yen(Decimal::from(after_si) * tables.withholding.non_resident_rate)
        }
        WithholdingPath::Secondary => {
            secondary_column_tax(after_si, &tables.withholding.secondary)
        }
        WithholdingPath::Primary { dependents } => {
            primary_column_tax(after_si, dependents, &tables.withholding)
        }
    }
}

/// Primary-column electronic formula: a five-step deduction cascade.
fn primary_column_tax(after_si: Yen, dependents: u32, tables: &WithholdingTables) -> Yen {
    if after_si <= 0 {
        return 0;
    }

    // Step 1: salary-income deduction.
    let salary_deduction = find_band(&tables.salary_deduction, after_si)
        .map(|band| band.amount(after_si))
        .unwrap_or(0);

    // Step 2: employment income.
    let employment_income = (after_si - salary_deduction).max(0);

    // Step 3: basic deduction, keyed on employment income.
    let basic_deduction = find_band(&tables.basic_deduction, employment_income)
        .map(|band| band.amount)
        .unwrap_or(0);

    // Step 4: dependent deduction.
    let dependent_deduction = i64::from(dependents) * tables.dependent_deduction;

    // Step 5: taxable income.
    let taxable = (employment_income - basic_deduction - dependent_deduction).max(0);
    if taxable == 0 {
        return 0;
    }

    // Bracket rates carry the reconstruction surtax baked in, so no separate
    // surtax step here.
    let tax = find_band(&tables.brackets, taxable)
        .map(|bracket| {
            floor_to_yen(Decimal::from(taxable) * bracket.rate - Decimal::from(bracket.deduction))
        })
        .unwrap_or(0);

    round_to_nearest_10(tax.max(0))
}

/// Secondary-column differential method over four contiguous ranges.
fn secondary_column_tax(after_si: Yen, tables: &SecondaryTaxTables) -> Yen {
    if after_si <= 0 {
        return 0;
    }

    // Range 1: flat proportional rate, no deductions.
    if after_si < tables.flat_ceiling {
        return floor_to_yen(Decimal::from(after_si) * tables.flat_rate);
    }

    // Range 2: calculation-base snapping with the inner formula.
    if after_si <= tables.banded_ceiling {
        let base = if after_si == tables.banded_ceiling {
            after_si
        } else {
            match find_band(&tables.steps, after_si) {
                Some(region) => after_si - (after_si - region.minimum).rem_euclid(region.step),
                None => after_si,
            }
        };

        let two_and_half = Decimal::new(25, 1);
        let one_and_half = Decimal::new(15, 1);
        let tax_high = secondary_inner_tax(floor_to_yen(Decimal::from(base) * two_and_half), tables);
        let tax_low = secondary_inner_tax(floor_to_yen(Decimal::from(base) * one_and_half), tables);

        // The differential is rounded to the nearest 100 yen, surtaxed, and
        // rounded to the nearest 100 yen again; both roundings are mandated.
        let differential = round_to_nearest_100(Decimal::from(tax_high - tax_low));
        let with_surtax =
            round_to_nearest_100(Decimal::from(differential) * tables.surtax_factor);
        return with_surtax.max(0);
    }

    // Range 3: linear continuation from the banded ceiling.
    if after_si <= tables.mid_ceiling {
        return floor_to_yen(
            Decimal::from(tables.mid_base)
                + Decimal::from(after_si - tables.banded_ceiling) * tables.mid_rate,
        );
    }

    // Range 4: linear continuation from the mid ceiling.
    floor_to_yen(
        Decimal::from(tables.top_base)
            + Decimal::from(after_si - tables.mid_ceiling) * tables.top_rate,
    )
}

/// Inner tax for the range-2 differential: own salary-income-deduction table,
/// a single fixed basic deduction, and base brackets without the surtax.
fn secondary_inner_tax(amount: Yen, tables: &SecondaryTaxTables) -> Yen {
    let deduction = find_band(&tables.salary_deduction, amount)
        .map(|band| band.amount(amount))
        .unwrap_or(0);
    let taxable = (amount - deduction - tables.basic_deduction).max(0);

    find_band(&tables.base_brackets, taxable)
        .map(|bracket| {
            floor_to_yen(Decimal::from(taxable) * bracket.rate - Decimal::from(bracket.deduction))
        })
        .unwrap_or(0)
}
