//! Data models for the take-home pay engine.
//!
//! This module contains the [`CalculationInput`] type with its per-category
//! configuration blocks, and the [`CalculationResult`] type capturing the
//! fully itemized deduction breakdown.

mod input;
mod result;

pub use input::{
    AgeBracket, Allowance, BonusEntry, CalculationInput, EmploymentInsuranceConfig,
    HealthInsuranceConfig, IndustryCategory, NursingConfig, OtherDeduction, PensionConfig,
    ResidentTaxConfig, ResidentTaxMode, SiMode, TaxColumn, WithholdingConfig,
};
pub use result::CalculationResult;
