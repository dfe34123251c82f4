//! The itemized result of a take-home pay calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Yen;

/// The complete, itemized result of one calculation.
///
/// Always recomputed from a [`CalculationInput`](super::CalculationInput),
/// never mutated in place. The identities
/// `take_home = gross_salary - total_deductions` and
/// `total_deductions = social_insurance_total + withholding_tax +
/// resident_tax + total_other_deductions` hold for every input.
///
/// # Example
///
/// ```
/// use tedori_engine::models::CalculationResult;
///
/// let result = CalculationResult::default();
/// assert_eq!(result.take_home, 0);
/// assert_eq!(result.deduction_rate, rust_decimal::Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Base salary + allowances + bonus.
    pub gross_salary: Yen,
    /// The base salary the calculation started from.
    pub base_salary: Yen,
    /// Unfiltered sum of all allowance amounts.
    pub total_allowances: Yen,
    /// Bonus paid this month (0 outside bonus months).
    pub bonus_amount: Yen,
    /// Whether an enabled bonus entry matched the calculation month.
    pub is_bonus_month: bool,
    /// Health-insurance employee share, including any bonus-period increment.
    pub health_insurance: Yen,
    /// Pension-insurance employee share, including any bonus-period increment.
    pub pension_insurance: Yen,
    /// Nursing-care employee share, including any bonus-period increment.
    pub nursing_insurance: Yen,
    /// Employment-insurance employee share.
    pub employment_insurance: Yen,
    /// Sum of the four social-insurance premiums.
    pub social_insurance_total: Yen,
    /// Monthly withholding income tax.
    pub withholding_tax: Yen,
    /// Monthly resident tax.
    pub resident_tax: Yen,
    /// Sum of the caller-supplied direct deductions.
    pub total_other_deductions: Yen,
    /// Sum of every deduction taken from gross salary.
    pub total_deductions: Yen,
    /// Gross salary minus total deductions.
    pub take_home: Yen,
    /// Total deductions as a percentage of gross salary; 0 when gross is 0.
    pub deduction_rate: Decimal,
    /// Informational: allowance total excluded from the withholding base
    /// (each item capped at the commute-allowance ceiling).
    pub tax_exempt_allowances: Yen,
    /// Informational: allowance total excluded from the social-insurance base.
    pub si_exempt_allowances: Yen,
}
