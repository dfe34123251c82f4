//! Rate-table configuration for the take-home pay engine.
//!
//! Rates are versioned data, not logic: the engine consumes whatever table
//! directory it is given, and a new fiscal year's rates replace the directory
//! wholesale without any engine code change.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceRules, Band, BasicDeductionBand, DeductionBand, EmploymentCategoryRate,
    EmploymentInsuranceRates, InsuranceRates, Prefecture, RateTables, RemunerationGrade,
    ResidentTaxTables, SecondaryTaxTables, StandardRemunerationTable, StepBand, TableMetadata,
    TaxBracket, WithholdingTables, find_band,
};
