//! Request types for the take-home pay API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. The request mirrors [`CalculationInput`] but lets callers name
//! the jurisdiction by JIS prefecture code instead of a table index; the
//! conversion resolves codes against the loaded tables.

use serde::{Deserialize, Serialize};

use crate::Yen;
use crate::config::RateTables;
use crate::models::{
    AgeBracket, Allowance, BonusEntry, CalculationInput, EmploymentInsuranceConfig,
    HealthInsuranceConfig, NursingConfig, OtherDeduction, PensionConfig, ResidentTaxConfig,
    WithholdingConfig,
};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Monthly base pay before allowances, in yen.
    pub base_salary: Yen,
    /// Calculation month, 1–12.
    pub month: u8,
    /// Jurisdiction as an index into the prefecture table.
    #[serde(default)]
    pub jurisdiction: Option<usize>,
    /// Jurisdiction as a JIS prefecture code (e.g. "13" for Tokyo). Takes
    /// precedence over `jurisdiction` when both are present.
    #[serde(default)]
    pub jurisdiction_code: Option<String>,
    /// Age bracket of the employee.
    #[serde(default)]
    pub age_bracket: AgeBracket,
    /// Health-insurance configuration.
    #[serde(default)]
    pub health: HealthInsuranceConfig,
    /// Pension-insurance configuration.
    #[serde(default)]
    pub pension: PensionConfig,
    /// Nursing-care insurance configuration. When omitted, collection
    /// defaults from the age bracket.
    #[serde(default)]
    pub nursing: Option<NursingConfig>,
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

impl CalculationRequest {
    /// Converts the request into a [`CalculationInput`], resolving the
    /// jurisdiction against the loaded tables.
    ///
    /// An unknown code or a missing jurisdiction falls back to the table's
    /// default prefecture, mirroring the engine's own clamping behavior. An
    /// omitted nursing block defaults collection from the age bracket.
    pub fn into_input(self, tables: &RateTables) -> CalculationInput {
        let jurisdiction = match self.jurisdiction_code {
            Some(ref code) => tables
                .prefectures
                .iter()
                .position(|p| &p.code == code)
                .unwrap_or(tables.default_jurisdiction),
            None => self.jurisdiction.unwrap_or(tables.default_jurisdiction),
        };

        let nursing = self.nursing.unwrap_or_else(|| NursingConfig {
            collected: self.age_bracket.nursing_applies(),
            ..NursingConfig::default()
        });

        CalculationInput {
            base_salary: self.base_salary,
            month: self.month,
            jurisdiction,
            age_bracket: self.age_bracket,
            health: self.health,
            pension: self.pension,
            nursing,
            employment: self.employment,
            withholding: self.withholding,
            resident_tax: self.resident_tax,
            allowances: self.allowances,
            bonus_schedule: self.bonus_schedule,
            other_deductions: self.other_deductions,
        }
    }
}
