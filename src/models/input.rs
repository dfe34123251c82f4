//! Input models for a take-home pay calculation.
//!
//! A [`CalculationInput`] is immutable per call. The embedding application is
//! responsible for numeric parsing and clamping raw user input; the engine
//! itself never rejects a numeric value; out-of-range indices fall back to
//! auto-derived lookups and contradictory configurations read as zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Yen;

/// How a social-insurance premium is derived.
///
/// # Example
///
/// ```
/// use tedori_engine::models::SiMode;
///
/// let mode: SiMode = serde_json::from_str("\"standard_grade\"").unwrap();
/// assert_eq!(mode, SiMode::StandardGrade);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiMode {
    /// Derive the standard remuneration from the salary.
    #[default]
    Auto,
    /// Use an explicit grade index into the standard-remuneration table.
    StandardGrade,
    /// Use a fixed, caller-supplied premium amount.
    Custom,
}

/// Age bracket of the employee.
///
/// The bracket determines the *default* nursing-insurance applicability
/// (ages 40–69 inclusive are subject to collection); at calculation time the
/// engine trusts the explicit [`NursingConfig::collected`] flag instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// Under 40 years old.
    #[default]
    Under40,
    /// 40 to 64 years old.
    From40To64,
    /// 65 to 69 years old.
    From65To69,
    /// 70 years old or above.
    SeventyPlus,
}

impl AgeBracket {
    /// Whether nursing-care insurance is collected by default for this bracket.
    pub fn nursing_applies(self) -> bool {
        matches!(self, AgeBracket::From40To64 | AgeBracket::From65To69)
    }
}

/// Withholding-tax column, selecting the computation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxColumn {
    /// Primary employment: progressive electronic formula with dependent
    /// deductions.
    #[default]
    Primary,
    /// Secondary employment: four-range differential method, dependent-agnostic.
    Secondary,
}

/// Employment-insurance industry category, selecting the premium rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryCategory {
    /// General businesses.
    #[default]
    General,
    /// Agriculture, forestry, fisheries, and sake brewing.
    AgricultureOrSake,
    /// Construction businesses.
    Construction,
    /// Not categorized; no premium is collected.
    None,
}

/// Health-insurance configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInsuranceConfig {
    /// How the premium is derived.
    #[serde(default)]
    pub mode: SiMode,
    /// `true` selects the prefecture (Kyokai Kenpo) rate; `false` selects a
    /// union-negotiated rate.
    #[serde(default = "default_true")]
    pub is_regional_plan: bool,
    /// Explicit grade index into the health standard-remuneration table.
    #[serde(default)]
    pub standard_grade_index: Option<usize>,
    /// Fixed premium amount for [`SiMode::Custom`].
    #[serde(default)]
    pub custom_amount: Option<Yen>,
    /// Union-specific total rate (%), overriding the default union rate.
    #[serde(default)]
    pub union_rate: Option<Decimal>,
}

impl Default for HealthInsuranceConfig {
    fn default() -> Self {
        Self {
            mode: SiMode::Auto,
            is_regional_plan: true,
            standard_grade_index: None,
            custom_amount: None,
            union_rate: None,
        }
    }
}

/// Pension-insurance configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PensionConfig {
    /// How the premium is derived.
    #[serde(default)]
    pub mode: SiMode,
    /// Explicit grade index into the pension standard-remuneration table.
    #[serde(default)]
    pub standard_grade_index: Option<usize>,
    /// Fixed premium amount for [`SiMode::Custom`].
    #[serde(default)]
    pub custom_amount: Option<Yen>,
}

/// Nursing-care insurance configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NursingConfig {
    /// Whether the premium is collected at all.
    #[serde(default)]
    pub collected: bool,
    /// Whether to bypass the rate calculation with a fixed amount.
    #[serde(default)]
    pub use_custom: bool,
    /// Fixed premium amount when `use_custom` is set.
    #[serde(default)]
    pub custom_amount: Option<Yen>,
    /// Union-specific total rate (%), overriding the statutory rate.
    #[serde(default)]
    pub union_rate: Option<Decimal>,
}

/// Employment-insurance configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmploymentInsuranceConfig {
    /// Whether the employee is enrolled.
    #[serde(default)]
    pub enrolled: bool,
    /// Industry category selecting the employee-share rate.
    #[serde(default)]
    pub industry_category: IndustryCategory,
}

/// Withholding-tax configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WithholdingConfig {
    /// Number of dependents (primary column only).
    #[serde(default)]
    pub dependent_count: u32,
    /// Fully exempt from withholding.
    #[serde(default)]
    pub exempt: bool,
    /// Non-resident flat-rate taxation applies.
    #[serde(default)]
    pub non_resident: bool,
    /// Which withholding column to apply.
    #[serde(default)]
    pub column: TaxColumn,
}

/// Resident-tax calculation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidentTaxMode {
    /// Approximate from annualized salary.
    #[default]
    Auto,
    /// Divide a caller-supplied annual amount over twelve months.
    Manual,
}

/// Resident-tax configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResidentTaxConfig {
    /// How the monthly amount is derived.
    #[serde(default)]
    pub mode: ResidentTaxMode,
    /// Annual amount for [`ResidentTaxMode::Manual`].
    #[serde(default)]
    pub manual_annual_amount: Option<Yen>,
    /// Force the resident tax to zero regardless of mode.
    #[serde(default)]
    pub suppressed: bool,
}

/// A recurring monthly allowance line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allowance {
    /// Display name of the allowance (e.g. "commute", "housing").
    pub name: String,
    /// Monthly amount in yen.
    pub amount: Yen,
    /// Excluded from the withholding-tax base, capped per item at the
    /// statutory commute-allowance ceiling.
    #[serde(default)]
    pub is_tax_exempt: bool,
    /// Excluded from the standard-remuneration base for social insurance.
    #[serde(default)]
    pub is_si_exempt: bool,
}

/// A scheduled bonus payment.
///
/// The engine picks the first enabled entry whose month matches the
/// calculation month; duplicate months are a UI-level warning condition, not
/// an engine invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusEntry {
    /// Payment month, 1–12.
    pub month: u8,
    /// Bonus amount in yen.
    pub amount: Yen,
    /// Disabled entries are skipped.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// A deduction taken directly from take-home pay, untouched by tax and
/// social-insurance logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherDeduction {
    /// Display name of the deduction (e.g. "union dues").
    pub name: String,
    /// Monthly amount in yen.
    pub amount: Yen,
}

/// The complete input for one take-home pay calculation.
///
/// # Example
///
/// ```
/// use tedori_engine::models::CalculationInput;
///
/// let input = CalculationInput {
///     base_salary: 300_000,
///     month: 6,
///     ..CalculationInput::default()
/// };
/// assert_eq!(input.jurisdiction, 12); // Tokyo
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Monthly base pay before allowances, in yen.
    pub base_salary: Yen,
    /// Calculation month, 1–12; determines whether a configured bonus fires.
    pub month: u8,
    /// Index into the 47-entry prefecture rate table.
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: usize,
    /// Age bracket; supplies the nursing-collection UI default only.
    #[serde(default)]
    pub age_bracket: AgeBracket,
    /// Health-insurance configuration.
    #[serde(default)]
    pub health: HealthInsuranceConfig,
    /// Pension-insurance configuration.
    #[serde(default)]
    pub pension: PensionConfig,
    /// Nursing-care insurance configuration.
    #[serde(default)]
    pub nursing: NursingConfig,
    /// Employment-insurance configuration.
    #[serde(default)]
    pub employment: EmploymentInsuranceConfig,
    /// Withholding-tax configuration.
    #[serde(default)]
    pub withholding: WithholdingConfig,
    /// Resident-tax configuration.
    #[serde(default)]
    pub resident_tax: ResidentTaxConfig,
    /// Recurring allowances.
    #[serde(default)]
    pub allowances: Vec<Allowance>,
    /// Scheduled bonuses.
    #[serde(default)]
    pub bonus_schedule: Vec<BonusEntry>,
    /// Deductions taken directly from take-home pay.
    #[serde(default)]
    pub other_deductions: Vec<OtherDeduction>,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            base_salary: 0,
            month: 1,
            jurisdiction: default_jurisdiction(),
            age_bracket: AgeBracket::default(),
            health: HealthInsuranceConfig::default(),
            pension: PensionConfig::default(),
            nursing: NursingConfig::default(),
            employment: EmploymentInsuranceConfig::default(),
            withholding: WithholdingConfig::default(),
            resident_tax: ResidentTaxConfig::default(),
            allowances: Vec::new(),
            bonus_schedule: Vec::new(),
            other_deductions: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Tokyo, the fallback when a jurisdiction index is out of range.
fn default_jurisdiction() -> usize {
    12
}
