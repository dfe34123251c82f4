//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate-table
//! directory from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{
    AllowanceRules, EmploymentInsuranceRates, InsuranceRates, Prefecture, RateTables,
    RemunerationGrade, ResidentTaxTables, StandardRemunerationTable, TableMetadata,
    WithholdingTables,
};

/// File shape of `prefectures.yaml`.
#[derive(Debug, Deserialize)]
struct PrefecturesFile {
    default_jurisdiction: usize,
    prefectures: Vec<Prefecture>,
}

/// File shape of `remuneration.yaml`.
#[derive(Debug, Deserialize)]
struct RemunerationFile {
    health: Vec<RemunerationGrade>,
    pension: Vec<RemunerationGrade>,
}

/// File shape of `insurance.yaml`.
#[derive(Debug, Deserialize)]
struct InsuranceFile {
    insurance: InsuranceRates,
    employment: EmploymentInsuranceRates,
    allowances: AllowanceRules,
}

/// Loads and provides access to a versioned rate-table directory.
///
/// # Directory Structure
///
/// ```text
/// config/reiwa7/
/// ├── metadata.yaml       # Table-version metadata
/// ├── prefectures.yaml    # 47 prefectures with health rates
/// ├── remuneration.yaml   # Standard-remuneration grade tables
/// ├── insurance.yaml      # Pension/nursing/union/employment rates
/// ├── withholding.yaml    # Monthly withholding-tax tables
/// └── resident_tax.yaml   # Resident-tax approximation tables
/// ```
///
/// # Example
///
/// ```no_run
/// use tedori_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reiwa7").unwrap();
/// assert_eq!(loader.tables().prefectures.len(), 47);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: RateTables,
}

impl ConfigLoader {
    /// Loads a rate-table directory.
    ///
    /// Returns an error if a required file is missing, fails to parse, or a
    /// table fails structural validation (empty table, out-of-range default
    /// jurisdiction).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TableMetadata>(&path.join("metadata.yaml"))?;
        let prefectures_file = Self::load_yaml::<PrefecturesFile>(&path.join("prefectures.yaml"))?;
        let remuneration = Self::load_yaml::<RemunerationFile>(&path.join("remuneration.yaml"))?;
        let insurance_file = Self::load_yaml::<InsuranceFile>(&path.join("insurance.yaml"))?;
        let withholding = Self::load_yaml::<WithholdingTables>(&path.join("withholding.yaml"))?;
        let resident = Self::load_yaml::<ResidentTaxTables>(&path.join("resident_tax.yaml"))?;

        let tables = RateTables {
            metadata,
            prefectures: prefectures_file.prefectures,
            default_jurisdiction: prefectures_file.default_jurisdiction,
            health_grades: StandardRemunerationTable {
                grades: remuneration.health,
            },
            pension_grades: StandardRemunerationTable {
                grades: remuneration.pension,
            },
            insurance: insurance_file.insurance,
            employment: insurance_file.employment,
            withholding,
            resident,
            allowances: insurance_file.allowances,
        };

        Self::validate(&tables)?;

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Structural validation of the assembled tables.
    fn validate(tables: &RateTables) -> EngineResult<()> {
        fn non_empty<T>(items: &[T], table: &str) -> EngineResult<()> {
            if items.is_empty() {
                return Err(EngineError::InvalidTable {
                    table: table.to_string(),
                    message: "table is empty".to_string(),
                });
            }
            Ok(())
        }

        non_empty(&tables.prefectures, "prefectures")?;
        non_empty(&tables.health_grades.grades, "health_grades")?;
        non_empty(&tables.pension_grades.grades, "pension_grades")?;
        non_empty(&tables.withholding.salary_deduction, "salary_deduction")?;
        non_empty(&tables.withholding.basic_deduction, "basic_deduction")?;
        non_empty(&tables.withholding.brackets, "brackets")?;
        non_empty(&tables.withholding.secondary.steps, "secondary.steps")?;
        non_empty(
            &tables.withholding.secondary.salary_deduction,
            "secondary.salary_deduction",
        )?;
        non_empty(
            &tables.withholding.secondary.base_brackets,
            "secondary.base_brackets",
        )?;
        non_empty(&tables.resident.salary_deduction, "resident.salary_deduction")?;

        if tables.default_jurisdiction >= tables.prefectures.len() {
            return Err(EngineError::InvalidTable {
                table: "prefectures".to_string(),
                message: format!(
                    "default jurisdiction {} out of range for {} prefectures",
                    tables.default_jurisdiction,
                    tables.prefectures.len()
                ),
            });
        }

        Ok(())
    }

    /// Returns the loaded rate tables.
    pub fn tables(&self) -> &RateTables {
        &self.tables
    }

    /// Returns the table-version metadata.
    pub fn metadata(&self) -> &TableMetadata {
        &self.tables.metadata
    }
}
